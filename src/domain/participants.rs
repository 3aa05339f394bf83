//! Participants: a bare array of free-form records keyed by `participantID`.

use crate::domain::collection::{Collection, DataError, JsonObject, Layout};
use crate::storage::DocumentStore;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use uuid::Uuid;

pub const DOCUMENT: &str = "participant/participants.json";
pub const ID_FIELD: &str = "participantID";

pub struct Participants {
    collection: Collection,
}

impl Participants {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self {
            collection: Collection::new(store, DOCUMENT, Layout::BareArray),
        }
    }

    pub async fn list(&self) -> Result<Vec<JsonValue>, DataError> {
        Ok(self.collection.read().await?.records().to_vec())
    }

    pub async fn get(&self, id: &str) -> Result<JsonValue, DataError> {
        let doc = self.collection.read().await?;
        doc.find_by(ID_FIELD, id)
            .cloned()
            .ok_or(DataError::NotFound("Participant"))
    }

    /// Stores `fields` under a freshly generated `participantID`. Any id in `fields` is replaced.
    pub async fn create(&self, mut fields: JsonObject) -> Result<JsonValue, DataError> {
        fields.insert(
            ID_FIELD.to_string(),
            JsonValue::String(Uuid::new_v4().to_string()),
        );
        let record = JsonValue::Object(fields);
        let stored = record.clone();
        self.collection
            .mutate(move |doc| {
                doc.records_mut().push(stored);
                Ok(())
            })
            .await?;
        Ok(record)
    }

    /// Replaces the record with `fields`. The id from the path always wins over one in `fields`.
    pub async fn update(&self, id: &str, mut fields: JsonObject) -> Result<JsonValue, DataError> {
        fields.insert(ID_FIELD.to_string(), JsonValue::String(id.to_string()));
        let record = JsonValue::Object(fields);
        self.collection
            .mutate(|doc| {
                let index = doc
                    .position_by(ID_FIELD, id)
                    .ok_or(DataError::NotFound("Participant"))?;
                doc.records_mut()[index] = record.clone();
                Ok(())
            })
            .await?;
        Ok(record)
    }

    /// Removes every record carrying `id`. Succeeds whether or not anything matched.
    pub async fn delete(&self, id: &str) -> Result<usize, DataError> {
        let ids = [id.to_string()];
        self.collection
            .mutate(|doc| Ok(doc.remove_where_in(ID_FIELD, &ids)))
            .await
    }
}
