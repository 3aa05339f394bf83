//! Survey definitions. Seed data only; nothing in the service writes this document.

use crate::domain::collection::{Collection, DataError, Layout};
use crate::storage::DocumentStore;
use serde_json::Value as JsonValue;
use std::sync::Arc;

pub const DOCUMENT: &str = "surveys/surveys.json";

pub struct Surveys {
    collection: Collection,
}

impl Surveys {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self {
            collection: Collection::new(store, DOCUMENT, Layout::Keyed("surveys")),
        }
    }

    pub async fn get(&self, survey_id: &str) -> Result<JsonValue, DataError> {
        let doc = self.collection.read().await?;
        doc.find_by("surveyID", survey_id)
            .cloned()
            .ok_or(DataError::NotFound("Survey data"))
    }
}
