use crate::transport::http::types::{data_error, json_422, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{Map, Value as JsonValue};

const EXPECTED_BODY: &str = "a JSON object of participant fields";

#[utoipa::path(
    get,
    path = "/api/participants",
    responses(
        (status = 200, description = "All participants"),
        (status = 500, description = "Participants document unavailable", body = crate::transport::http::types::MessageResponse)
    )
)]
pub async fn list_participants_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.data_service.participants.list().await {
        Ok(participants) => (StatusCode::OK, Json(participants)).into_response(),
        Err(e) => data_error(e, "Failed to read participants data."),
    }
}

#[utoipa::path(
    get,
    path = "/api/participants/{id}",
    params(("id" = String, Path, description = "participantID")),
    responses(
        (status = 200, description = "The participant"),
        (status = 404, description = "No such participant", body = crate::transport::http::types::MessageResponse),
        (status = 500, description = "Participants document unavailable", body = crate::transport::http::types::MessageResponse)
    )
)]
pub async fn get_participant_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.data_service.participants.get(&id).await {
        Ok(participant) => (StatusCode::OK, Json(participant)).into_response(),
        Err(e) => data_error(e, "Failed to read participants data."),
    }
}

#[utoipa::path(
    post,
    path = "/api/participants",
    request_body = Object,
    responses(
        (status = 201, description = "Participant created with a generated participantID"),
        (status = 422, description = "Body is not a JSON object", body = crate::transport::http::types::MessageResponse),
        (status = 500, description = "Participants document unavailable", body = crate::transport::http::types::MessageResponse)
    )
)]
pub async fn create_participant_handler(
    State(state): State<AppState>,
    request: Result<Json<Map<String, JsonValue>>, JsonRejection>,
) -> impl IntoResponse {
    let Json(fields) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, EXPECTED_BODY),
    };

    match state.data_service.participants.create(fields).await {
        Ok(participant) => (StatusCode::CREATED, Json(participant)).into_response(),
        Err(e) => data_error(e, "Failed to save new participant."),
    }
}

#[utoipa::path(
    put,
    path = "/api/participants/{id}",
    params(("id" = String, Path, description = "participantID")),
    request_body = Object,
    responses(
        (status = 200, description = "Participant replaced"),
        (status = 404, description = "No such participant", body = crate::transport::http::types::MessageResponse),
        (status = 422, description = "Body is not a JSON object", body = crate::transport::http::types::MessageResponse),
        (status = 500, description = "Participants document unavailable", body = crate::transport::http::types::MessageResponse)
    )
)]
pub async fn update_participant_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<Map<String, JsonValue>>, JsonRejection>,
) -> impl IntoResponse {
    let Json(fields) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, EXPECTED_BODY),
    };

    match state.data_service.participants.update(&id, fields).await {
        Ok(participant) => (StatusCode::OK, Json(participant)).into_response(),
        Err(e) => data_error(e, "Failed to update participant."),
    }
}

#[utoipa::path(
    delete,
    path = "/api/participants/{id}",
    params(("id" = String, Path, description = "participantID")),
    responses(
        (status = 204, description = "Participant removed (or was never there)"),
        (status = 500, description = "Participants document unavailable", body = crate::transport::http::types::MessageResponse)
    )
)]
pub async fn delete_participant_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.data_service.participants.delete(&id).await {
        Ok(removed) => {
            tracing::debug!(participant_id = %id, removed, "participant delete");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => data_error(e, "Failed to delete participant."),
    }
}

