use crate::app::data_service::DataService;
use crate::domain::{DataError, UserDirectory};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub data_service: Arc<DataService>,
    pub users: Arc<UserDirectory>,
}

/// Body of every error response, and of acknowledgements that carry nothing else.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveFormDataRequest {
    #[serde(default)]
    #[schema(value_type = Object)]
    pub form_data: JsonValue,
    #[serde(rename = "participantID")]
    pub participant_id: String,
    #[serde(rename = "surveyID")]
    pub survey_id: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct SaveFormDataResponse {
    pub message: String,
    #[serde(rename = "responseID")]
    pub response_id: String,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FormDataQuery {
    #[serde(rename = "participantID")]
    pub participant_id: Option<String>,
    #[serde(rename = "surveyID")]
    pub survey_id: Option<String>,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SurveyQuery {
    #[serde(rename = "surveyID")]
    pub survey_id: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateEventRequest {
    #[serde(default)]
    #[schema(value_type = Object)]
    pub event: Map<String, JsonValue>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct CreateEventResponse {
    pub message: String,
    #[schema(value_type = Object)]
    pub event: JsonValue,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct DeleteEventsRequest {
    #[serde(default, rename = "eventIDs")]
    pub event_ids: Vec<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateMessageRequest {
    #[serde(default)]
    #[schema(value_type = Object)]
    pub message: Map<String, JsonValue>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct CreateMessageResponse {
    pub message: String,
    #[serde(rename = "newMessage")]
    #[schema(value_type = Object)]
    pub new_message: JsonValue,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct DeleteMessagesRequest {
    #[serde(default, rename = "messageIDs")]
    pub message_ids: Vec<String>,
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub data_dir: String,
}

pub fn message(status: StatusCode, text: impl Into<String>) -> Response {
    (status, Json(MessageResponse::new(text))).into_response()
}

/// Maps a collection failure onto the wire. `failure` is the endpoint's 500 message.
pub fn data_error(err: DataError, failure: &str) -> Response {
    match err {
        DataError::NotFound(_) => message(StatusCode::NOT_FOUND, err.to_string()),
        DataError::StorageUnavailable(e) | DataError::WriteFailure(e) => {
            tracing::error!(error = %e, "{}", failure);
            message(StatusCode::INTERNAL_SERVER_ERROR, failure)
        }
    }
}

pub fn json_422(err: JsonRejection, expected: &str) -> Response {
    message(
        StatusCode::UNPROCESSABLE_ENTITY,
        format!("Invalid JSON body: {} (expected: {})", err, expected),
    )
}
