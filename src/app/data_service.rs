//! The data service.
//!
//! Owns one `DocumentStore` rooted at the configured data directory and hands every
//! resource collection a view onto it. Each collection owns exactly one document; the
//! store serializes load/mutate/save cycles per document path.

use crate::domain::{Events, Messages, Participants, SurveyResponses, Surveys};
use crate::storage::DocumentStore;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct DataService {
    store: Arc<DocumentStore>,
    pub participants: Participants,
    pub responses: SurveyResponses,
    pub surveys: Surveys,
    pub events: Events,
    pub messages: Messages,
}

impl DataService {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let store = Arc::new(DocumentStore::new(data_dir));
        Self {
            participants: Participants::new(store.clone()),
            responses: SurveyResponses::new(store.clone()),
            surveys: Surveys::new(store.clone()),
            events: Events::new(store.clone()),
            messages: Messages::new(store.clone()),
            store,
        }
    }

    pub fn data_dir(&self) -> &Path {
        self.store.data_dir()
    }
}
