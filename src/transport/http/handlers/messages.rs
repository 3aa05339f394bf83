use crate::transport::http::types::{
    data_error, json_422, AppState, CreateMessageRequest, CreateMessageResponse,
    DeleteMessagesRequest, MessageResponse,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/messages",
    responses(
        (status = 200, description = "The whole messages document"),
        (status = 500, description = "Messages document unavailable", body = MessageResponse)
    )
)]
pub async fn list_messages_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.data_service.messages.document().await {
        Ok(doc) => (StatusCode::OK, Json(doc)).into_response(),
        Err(e) => data_error(e, "Failed to read messages data."),
    }
}

#[utoipa::path(
    post,
    path = "/api/messages",
    request_body = CreateMessageRequest,
    responses(
        (status = 200, description = "Message stored with a generated id", body = CreateMessageResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = MessageResponse),
        (status = 500, description = "Messages document unavailable", body = MessageResponse)
    )
)]
pub async fn create_message_handler(
    State(state): State<AppState>,
    request: Result<Json<CreateMessageRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"message\": {...}}"),
    };

    match state.data_service.messages.create(request.message).await {
        Ok(new_message) => (
            StatusCode::OK,
            Json(CreateMessageResponse {
                message: "Message saved successfully.".to_string(),
                new_message,
            }),
        )
            .into_response(),
        Err(e) => data_error(e, "Failed to save message."),
    }
}

#[utoipa::path(
    post,
    path = "/api/messages/delete",
    request_body = DeleteMessagesRequest,
    responses(
        (status = 200, description = "Listed messages removed", body = MessageResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = MessageResponse),
        (status = 500, description = "Messages document unavailable", body = MessageResponse)
    )
)]
pub async fn delete_messages_handler(
    State(state): State<AppState>,
    request: Result<Json<DeleteMessagesRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"messageIDs\": [\"...\"]}"),
    };

    match state
        .data_service
        .messages
        .delete_many(&request.message_ids)
        .await
    {
        Ok(removed) => {
            tracing::debug!(requested = request.message_ids.len(), removed, "messages deleted");
            (
                StatusCode::OK,
                Json(MessageResponse::new("Messages deleted successfully.")),
            )
                .into_response()
        }
        Err(e) => data_error(e, "Failed to read messages data."),
    }
}

#[utoipa::path(
    get,
    path = "/api/messages/{id}",
    params(("id" = String, Path, description = "Message id")),
    responses(
        (status = 200, description = "The message"),
        (status = 404, description = "No such message", body = MessageResponse),
        (status = 500, description = "Messages document unavailable", body = MessageResponse)
    )
)]
pub async fn get_message_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    tracing::debug!(message_id = %id, "message lookup");
    match state.data_service.messages.get(&id).await {
        Ok(message) => (StatusCode::OK, Json(message)).into_response(),
        Err(e) => data_error(e, "Failed to read messages data."),
    }
}
