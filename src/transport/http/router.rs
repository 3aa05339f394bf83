use crate::domain::UserRecord;
use crate::transport::http::handlers::{events, forms, health, messages, participants, users};
use crate::transport::http::types::{
    CreateEventRequest, CreateEventResponse, CreateMessageRequest, CreateMessageResponse,
    DeleteEventsRequest, DeleteMessagesRequest, HealthResponse, MessageResponse,
    SaveFormDataRequest, SaveFormDataResponse,
};
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        forms::save_form_data_handler,
        forms::get_form_data_handler,
        forms::get_survey_data_handler,
        participants::list_participants_handler,
        participants::get_participant_handler,
        participants::create_participant_handler,
        participants::update_participant_handler,
        participants::delete_participant_handler,
        events::get_event_data_handler,
        events::list_events_handler,
        events::create_event_handler,
        events::delete_events_handler,
        messages::list_messages_handler,
        messages::create_message_handler,
        messages::delete_messages_handler,
        messages::get_message_handler,
        users::list_users_handler
    ),
    components(schemas(
        MessageResponse,
        HealthResponse,
        SaveFormDataRequest,
        SaveFormDataResponse,
        CreateEventRequest,
        CreateEventResponse,
        DeleteEventsRequest,
        CreateMessageRequest,
        CreateMessageResponse,
        DeleteMessagesRequest,
        UserRecord
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/saveFormData", post(forms::save_form_data_handler))
        .route("/api/getFormData", get(forms::get_form_data_handler))
        .route("/api/getSurveyData", get(forms::get_survey_data_handler))
        .route(
            "/api/participants",
            get(participants::list_participants_handler)
                .post(participants::create_participant_handler),
        )
        .route(
            "/api/participants/:id",
            get(participants::get_participant_handler)
                .put(participants::update_participant_handler)
                .delete(participants::delete_participant_handler),
        )
        .route("/api/getEventData", get(events::get_event_data_handler))
        .route(
            "/api/events",
            get(events::list_events_handler).post(events::create_event_handler),
        )
        .route("/api/events/delete", post(events::delete_events_handler))
        .route("/api/users", get(users::list_users_handler))
        .route(
            "/api/messages",
            get(messages::list_messages_handler).post(messages::create_message_handler),
        )
        // The static segment wins over `:id`, so GET /api/messages/delete answers 405.
        .route("/api/messages/delete", post(messages::delete_messages_handler))
        .route("/api/messages/:id", get(messages::get_message_handler))
        .with_state(app_state)
}
