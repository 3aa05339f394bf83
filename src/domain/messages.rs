//! Messages, identified by generated UUID strings.

use crate::domain::collection::{Collection, DataError, JsonObject, Layout};
use crate::storage::DocumentStore;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use uuid::Uuid;

pub const DOCUMENT: &str = "messages/messages.json";
pub const ROOT_KEY: &str = "messages";

pub struct Messages {
    collection: Collection,
}

impl Messages {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self {
            collection: Collection::new(store, DOCUMENT, Layout::Keyed(ROOT_KEY)),
        }
    }

    pub async fn list(&self) -> Result<Vec<JsonValue>, DataError> {
        Ok(self.collection.read().await?.records().to_vec())
    }

    /// The whole messages document (`{ "messages": [...] }`).
    pub async fn document(&self) -> Result<JsonValue, DataError> {
        Ok(self.collection.read().await?.into_json())
    }

    pub async fn create(&self, mut fields: JsonObject) -> Result<JsonValue, DataError> {
        fields.insert(
            "id".to_string(),
            JsonValue::String(Uuid::new_v4().to_string()),
        );
        let message = JsonValue::Object(fields);
        let stored = message.clone();
        self.collection
            .mutate(move |doc| {
                doc.records_mut().push(stored);
                Ok(())
            })
            .await?;
        Ok(message)
    }

    pub async fn delete_many(&self, ids: &[String]) -> Result<usize, DataError> {
        self.collection
            .mutate(|doc| Ok(doc.remove_where_in("id", ids)))
            .await
    }

    pub async fn get(&self, id: &str) -> Result<JsonValue, DataError> {
        let doc = self.collection.read().await?;
        doc.find_by("id", id)
            .cloned()
            .ok_or(DataError::NotFound("Message"))
    }
}
