use crate::transport::http::types::{
    data_error, json_422, AppState, CreateEventRequest, CreateEventResponse, DeleteEventsRequest,
    MessageResponse,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/getEventData",
    responses(
        (status = 200, description = "The whole events document"),
        (status = 500, description = "Events document unavailable", body = MessageResponse)
    )
)]
pub async fn get_event_data_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.data_service.events.document().await {
        Ok(doc) => (StatusCode::OK, Json(doc)).into_response(),
        Err(e) => data_error(e, "Failed to read event data."),
    }
}

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "All events"),
        (status = 500, description = "Events document unavailable", body = MessageResponse)
    )
)]
pub async fn list_events_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.data_service.events.list().await {
        Ok(events) => (StatusCode::OK, Json(events)).into_response(),
        Err(e) => data_error(e, "Failed to read events data."),
    }
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    responses(
        (status = 200, description = "Event stored with the next id", body = CreateEventResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = MessageResponse),
        (status = 500, description = "Events document unavailable", body = MessageResponse)
    )
)]
pub async fn create_event_handler(
    State(state): State<AppState>,
    request: Result<Json<CreateEventRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"event\": {...}}"),
    };

    match state.data_service.events.create(request.event).await {
        Ok(event) => (
            StatusCode::OK,
            Json(CreateEventResponse {
                message: "Event saved successfully.".to_string(),
                event,
            }),
        )
            .into_response(),
        Err(e) => data_error(e, "Failed to save event."),
    }
}

#[utoipa::path(
    post,
    path = "/api/events/delete",
    request_body = DeleteEventsRequest,
    responses(
        (status = 200, description = "Listed events removed", body = MessageResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = MessageResponse),
        (status = 500, description = "Events document unavailable", body = MessageResponse)
    )
)]
pub async fn delete_events_handler(
    State(state): State<AppState>,
    request: Result<Json<DeleteEventsRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"eventIDs\": [\"...\"]}"),
    };

    match state.data_service.events.delete_many(&request.event_ids).await {
        Ok(removed) => {
            tracing::debug!(requested = request.event_ids.len(), removed, "events deleted");
            (
                StatusCode::OK,
                Json(MessageResponse::new("Events deleted successfully.")),
            )
                .into_response()
        }
        Err(e) => data_error(e, "Failed to delete events."),
    }
}
