//! Record documents and the load/mutate/persist cycle shared by every collection.

use crate::storage::{DocumentStore, StoreError};
use serde_json::{Map, Value as JsonValue};
use std::sync::Arc;
use thiserror::Error;

pub type JsonObject = Map<String, JsonValue>;

#[derive(Debug, Error)]
pub enum DataError {
    /// The requested record is absent. Carries the human name of the record kind.
    #[error("{0} not found.")]
    NotFound(&'static str),
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[source] StoreError),
    #[error("write failed: {0}")]
    WriteFailure(#[source] StoreError),
}

impl From<StoreError> for DataError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Write { .. } | StoreError::Encode { .. } => DataError::WriteFailure(e),
            StoreError::Read { .. } | StoreError::Corrupt { .. } | StoreError::Shape { .. } => {
                DataError::StorageUnavailable(e)
            }
        }
    }
}

/// How the records sit inside a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// The document root is the array of records.
    BareArray,
    /// The document root is an object holding the records under this key.
    Keyed(&'static str),
}

/// In-memory view of one document for the lifetime of a single operation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDocument {
    layout: Layout,
    records: Vec<JsonValue>,
    /// Other root-level fields of a keyed document, kept on rewrite.
    meta: JsonObject,
}

impl RecordDocument {
    pub fn empty(layout: Layout) -> Self {
        Self {
            layout,
            records: Vec::new(),
            meta: JsonObject::new(),
        }
    }

    /// Builds the view from a loaded document. `None` (no file yet) is an empty collection.
    ///
    /// Returns `None` if the root has the wrong shape for `layout`.
    pub fn from_json(layout: Layout, doc: Option<JsonValue>) -> Option<Self> {
        let Some(doc) = doc else {
            return Some(Self::empty(layout));
        };
        match (layout, doc) {
            (Layout::BareArray, JsonValue::Array(records)) => Some(Self {
                layout,
                records,
                meta: JsonObject::new(),
            }),
            (Layout::Keyed(key), JsonValue::Object(mut meta)) => {
                let records = match meta.remove(key) {
                    Some(JsonValue::Array(records)) => records,
                    None | Some(JsonValue::Null) => Vec::new(),
                    Some(_) => return None,
                };
                Some(Self {
                    layout,
                    records,
                    meta,
                })
            }
            _ => None,
        }
    }

    pub fn into_json(self) -> JsonValue {
        match self.layout {
            Layout::BareArray => JsonValue::Array(self.records),
            Layout::Keyed(key) => {
                let mut root = JsonObject::new();
                root.insert(key.to_string(), JsonValue::Array(self.records));
                root.extend(self.meta);
                JsonValue::Object(root)
            }
        }
    }

    pub fn records(&self) -> &[JsonValue] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut Vec<JsonValue> {
        &mut self.records
    }

    pub fn meta(&self) -> &JsonObject {
        &self.meta
    }

    pub fn meta_mut(&mut self) -> &mut JsonObject {
        &mut self.meta
    }

    /// First record whose string field `field` equals `value`.
    pub fn find_by(&self, field: &str, value: &str) -> Option<&JsonValue> {
        self.records.iter().find(|r| field_eq(r, field, value))
    }

    pub fn position_by(&self, field: &str, value: &str) -> Option<usize> {
        self.records.iter().position(|r| field_eq(r, field, value))
    }

    /// Drops every record whose `field` is one of `values`. Returns how many were removed.
    pub fn remove_where_in(&mut self, field: &str, values: &[String]) -> usize {
        let before = self.records.len();
        self.records.retain(|r| {
            !r.get(field)
                .and_then(JsonValue::as_str)
                .is_some_and(|v| values.iter().any(|x| x == v))
        });
        before - self.records.len()
    }
}

pub fn field_eq(record: &JsonValue, field: &str, value: &str) -> bool {
    record.get(field).and_then(JsonValue::as_str) == Some(value)
}

/// One document on disk, seen as a sequence of records.
#[derive(Clone)]
pub struct Collection {
    store: Arc<DocumentStore>,
    name: &'static str,
    layout: Layout,
}

impl Collection {
    pub fn new(store: Arc<DocumentStore>, name: &'static str, layout: Layout) -> Self {
        Self {
            store,
            name,
            layout,
        }
    }

    async fn load(&self) -> Result<RecordDocument, DataError> {
        let raw = self.store.load(self.name).await?;
        RecordDocument::from_json(self.layout, raw).ok_or_else(|| {
            tracing::warn!(document = self.name, "document root has an unexpected shape");
            DataError::StorageUnavailable(StoreError::Shape {
                path: self.store.path_of(self.name),
            })
        })
    }

    /// Loads the whole document.
    pub async fn read(&self) -> Result<RecordDocument, DataError> {
        let _guard = self.store.lock(self.name).await;
        self.load().await
    }

    /// Runs `op` against the freshly loaded document and persists the result.
    ///
    /// Nothing is written when `op` fails. The document stays locked from load to save.
    pub async fn mutate<T, F>(&self, op: F) -> Result<T, DataError>
    where
        F: FnOnce(&mut RecordDocument) -> Result<T, DataError>,
    {
        let _guard = self.store.lock(self.name).await;
        let mut doc = self.load().await?;
        let out = op(&mut doc)?;
        if let Err(e) = self.store.save(self.name, &doc.into_json()).await {
            tracing::error!(document = self.name, error = %e, "failed to persist document");
            return Err(e.into());
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keyed_document_keeps_other_root_fields() {
        let raw = json!({ "nextEventID": 4, "events": [{ "id": "3" }] });
        let doc = RecordDocument::from_json(Layout::Keyed("events"), Some(raw)).unwrap();
        assert_eq!(doc.records().len(), 1);
        assert_eq!(doc.meta().get("nextEventID"), Some(&json!(4)));
        assert_eq!(
            doc.into_json(),
            json!({ "events": [{ "id": "3" }], "nextEventID": 4 })
        );
    }

    #[test]
    fn keyed_document_without_array_is_empty() {
        let doc = RecordDocument::from_json(Layout::Keyed("responses"), Some(json!({}))).unwrap();
        assert!(doc.records().is_empty());
    }

    #[test]
    fn wrong_root_shape_is_rejected() {
        assert!(RecordDocument::from_json(Layout::BareArray, Some(json!({}))).is_none());
        assert!(RecordDocument::from_json(Layout::Keyed("events"), Some(json!([]))).is_none());
        assert!(
            RecordDocument::from_json(Layout::Keyed("events"), Some(json!({ "events": 1 })))
                .is_none()
        );
    }

    #[test]
    fn remove_where_in_only_drops_listed_ids() {
        let raw = json!([{ "id": "a" }, { "id": "b" }, { "id": "c" }, { "other": "a" }]);
        let mut doc = RecordDocument::from_json(Layout::BareArray, Some(raw)).unwrap();
        let removed = doc.remove_where_in("id", &["a".to_string(), "c".to_string(), "z".to_string()]);
        assert_eq!(removed, 2);
        assert_eq!(doc.into_json(), json!([{ "id": "b" }, { "other": "a" }]));
    }
}
