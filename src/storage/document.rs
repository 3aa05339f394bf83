//! Flat-file JSON document store.
//!
//! Every document lives at a path relative to the store's data directory. Documents are
//! read whole and rewritten whole; a write goes to a sibling temp file which is then renamed
//! over the target so readers never observe a truncated document.

use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read document {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("document {path} is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("document {path} has an unexpected root shape")]
    Shape { path: PathBuf },
    #[error("failed to encode document {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write document {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Loads and persists named JSON documents under one data directory.
pub struct DocumentStore {
    data_dir: PathBuf,
    /// One lock per document path, created lazily.
    locks: std::sync::Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl DocumentStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            locks: std::sync::Mutex::new(HashMap::new()),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    /// Serializes access to one document for the duration of a load/mutate/save cycle.
    pub async fn lock(&self, name: &str) -> OwnedMutexGuard<()> {
        let path = self.path_of(name);
        let lock = {
            let mut locks = match self.locks.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            locks.entry(path).or_default().clone()
        };
        lock.lock_owned().await
    }

    /// Reads and parses a document.
    ///
    /// Returns `Ok(None)` when the file does not exist, including when a parent path component
    /// is not a directory. Any other read failure and any parse failure are errors.
    pub async fn load(&self, name: &str) -> Result<Option<JsonValue>, StoreError> {
        let path = self.path_of(name);
        let raw = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                return Ok(None)
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };
        match serde_json::from_slice::<JsonValue>(&raw) {
            Ok(v) => Ok(Some(v)),
            Err(source) => {
                tracing::warn!(path = %path.display(), error = %source, "document is not valid JSON");
                Err(StoreError::Corrupt { path, source })
            }
        }
    }

    /// Writes a document with 2-space indentation, replacing any previous version.
    pub async fn save(&self, name: &str, document: &JsonValue) -> Result<(), StoreError> {
        let path = self.path_of(name);
        let payload = serde_json::to_vec_pretty(document).map_err(|source| StoreError::Encode {
            path: path.clone(),
            source,
        })?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Write {
                    path: path.clone(),
                    source,
                })?;
        }

        let temp_path = path.with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
        if let Err(source) = tokio::fs::write(&temp_path, &payload).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(StoreError::Write { path, source });
        }
        if let Err(source) = tokio::fs::rename(&temp_path, &path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(StoreError::Write { path, source });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn missing_document_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path());
        assert!(store.load("events/events.json").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load_returns_same_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path());
        let doc = json!({ "messages": [{ "id": "a", "body": "hi", "tags": [1, 2] }] });

        store.save("messages/messages.json", &doc).await.unwrap();
        let loaded = store.load("messages/messages.json").await.unwrap();
        assert_eq!(loaded, Some(doc));
    }

    #[tokio::test]
    async fn save_writes_indented_json_without_leftover_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path());
        store
            .save("participants.json", &json!([{ "participantID": "p1" }]))
            .await
            .unwrap();

        let raw = std::fs::read_to_string(dir.path().join("participants.json")).unwrap();
        assert_eq!(raw, "[\n  {\n    \"participantID\": \"p1\"\n  }\n]");

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn save_under_a_file_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("blocker"), "plain file").unwrap();
        let store = DocumentStore::new(dir.path());

        assert!(store.load("blocker/x.json").await.unwrap().is_none());
        let err = store.save("blocker/x.json", &json!([])).await.unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
    }

    #[tokio::test]
    async fn corrupt_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("surveys.json"), "{ not json").unwrap();
        let store = DocumentStore::new(dir.path());

        let err = store.load("surveys.json").await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }
}
