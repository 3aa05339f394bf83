//! Survey responses, at most one per (participantID, surveyID) pair.

use crate::domain::collection::{field_eq, Collection, DataError, Layout};
use crate::storage::DocumentStore;
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;
use uuid::Uuid;

pub const DOCUMENT: &str = "surveys/responses.json";
pub const ROOT_KEY: &str = "responses";

pub struct SurveyResponses {
    collection: Collection,
}

fn is_pair(record: &JsonValue, participant_id: &str, survey_id: &str) -> bool {
    field_eq(record, "participantID", participant_id) && field_eq(record, "surveyID", survey_id)
}

impl SurveyResponses {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self {
            collection: Collection::new(store, DOCUMENT, Layout::Keyed(ROOT_KEY)),
        }
    }

    /// Creates or replaces the response for the pair and returns its `responseID`.
    ///
    /// A replacement keeps the `responseID` of the response it overwrites.
    pub async fn upsert(
        &self,
        participant_id: &str,
        survey_id: &str,
        form_data: JsonValue,
    ) -> Result<String, DataError> {
        self.collection
            .mutate(|doc| {
                let existing = doc
                    .records()
                    .iter()
                    .position(|r| is_pair(r, participant_id, survey_id));
                let response_id = existing
                    .and_then(|i| doc.records()[i].get("responseID"))
                    .and_then(JsonValue::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| Uuid::new_v4().to_string());

                let record = json!({
                    "responseID": response_id,
                    "participantID": participant_id,
                    "surveyID": survey_id,
                    "formData": form_data,
                });
                match existing {
                    Some(i) => doc.records_mut()[i] = record,
                    None => doc.records_mut().push(record),
                }
                Ok(response_id)
            })
            .await
    }

    pub async fn get(&self, participant_id: &str, survey_id: &str) -> Result<JsonValue, DataError> {
        let doc = self.collection.read().await?;
        doc.records()
            .iter()
            .find(|r| is_pair(r, participant_id, survey_id))
            .cloned()
            .ok_or(DataError::NotFound("Form data"))
    }
}
