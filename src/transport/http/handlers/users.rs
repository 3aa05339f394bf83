use crate::transport::http::types::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "The user directory", body = Vec<crate::domain::UserRecord>)
    )
)]
pub async fn list_users_handler(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.users.list().to_vec()))
}
