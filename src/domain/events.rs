//! Events, identified by stringified integers handed out by a persisted counter.

use crate::domain::collection::{Collection, DataError, JsonObject, Layout, RecordDocument};
use crate::storage::DocumentStore;
use serde_json::Value as JsonValue;
use std::sync::Arc;

pub const DOCUMENT: &str = "events/events.json";
pub const ROOT_KEY: &str = "events";
/// Root-level field holding the next id to hand out.
pub const COUNTER_FIELD: &str = "nextEventID";

pub struct Events {
    collection: Collection,
}

/// Next free id. Documents written before the counter existed start past both the record
/// count and the highest numeric id, so no surviving id is ever handed out again.
fn next_id(doc: &RecordDocument) -> u64 {
    let stored = doc.meta().get(COUNTER_FIELD).and_then(JsonValue::as_u64);
    let highest = doc
        .records()
        .iter()
        .filter_map(|r| r.get("id"))
        .filter_map(|id| match id {
            JsonValue::String(s) => s.parse::<u64>().ok(),
            other => other.as_u64(),
        })
        .max()
        .unwrap_or(0);
    let floor = highest.max(doc.records().len() as u64).saturating_add(1);
    stored.map_or(floor, |n| n.max(floor))
}

impl Events {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self {
            collection: Collection::new(store, DOCUMENT, Layout::Keyed(ROOT_KEY)),
        }
    }

    pub async fn list(&self) -> Result<Vec<JsonValue>, DataError> {
        Ok(self.collection.read().await?.records().to_vec())
    }

    /// The whole events document, counter included.
    pub async fn document(&self) -> Result<JsonValue, DataError> {
        Ok(self.collection.read().await?.into_json())
    }

    pub async fn create(&self, mut fields: JsonObject) -> Result<JsonValue, DataError> {
        self.collection
            .mutate(move |doc| {
                let id = next_id(doc);
                fields.insert("id".to_string(), JsonValue::String(id.to_string()));
                let event = JsonValue::Object(fields);
                doc.records_mut().push(event.clone());
                doc.meta_mut()
                    .insert(COUNTER_FIELD.to_string(), JsonValue::from(id.saturating_add(1)));
                Ok(event)
            })
            .await
    }

    /// Removes every event whose id is listed. Unknown ids are ignored.
    pub async fn delete_many(&self, ids: &[String]) -> Result<usize, DataError> {
        self.collection
            .mutate(|doc| Ok(doc.remove_where_in("id", ids)))
            .await
    }
}
