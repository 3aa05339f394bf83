use crate::domain::DataError;
use crate::transport::http::types::{
    data_error, json_422, AppState, FormDataQuery, SaveFormDataRequest,
    SaveFormDataResponse, SurveyQuery,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/saveFormData",
    request_body = SaveFormDataRequest,
    responses(
        (status = 200, description = "Response stored (created or overwritten)", body = SaveFormDataResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = crate::transport::http::types::MessageResponse),
        (status = 500, description = "Responses document unavailable", body = crate::transport::http::types::MessageResponse)
    )
)]
pub async fn save_form_data_handler(
    State(state): State<AppState>,
    request: Result<Json<SaveFormDataRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => {
            return json_422(
                e,
                "{\"formData\": {...}, \"participantID\": \"...\", \"surveyID\": \"...\"}",
            )
        }
    };
    tracing::debug!(
        participant_id = %request.participant_id,
        survey_id = %request.survey_id,
        form_data = %request.form_data,
        "received form data"
    );

    match state
        .data_service
        .responses
        .upsert(&request.participant_id, &request.survey_id, request.form_data)
        .await
    {
        Ok(response_id) => (
            StatusCode::OK,
            Json(SaveFormDataResponse {
                message: "File saved successfully.".to_string(),
                response_id,
            }),
        )
            .into_response(),
        Err(e) => data_error(e, "Failed to save form data."),
    }
}

#[utoipa::path(
    get,
    path = "/api/getFormData",
    params(FormDataQuery),
    responses(
        (status = 200, description = "The stored survey response"),
        (status = 404, description = "No response for this participant/survey", body = crate::transport::http::types::MessageResponse),
        (status = 500, description = "Responses document unavailable", body = crate::transport::http::types::MessageResponse)
    )
)]
pub async fn get_form_data_handler(
    State(state): State<AppState>,
    Query(query): Query<FormDataQuery>,
) -> impl IntoResponse {
    let (Some(participant_id), Some(survey_id)) = (query.participant_id, query.survey_id) else {
        return data_error(DataError::NotFound("Form data"), "Failed to read form data.");
    };

    match state
        .data_service
        .responses
        .get(&participant_id, &survey_id)
        .await
    {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => data_error(e, "Failed to read form data."),
    }
}

#[utoipa::path(
    get,
    path = "/api/getSurveyData",
    params(SurveyQuery),
    responses(
        (status = 200, description = "The survey definition"),
        (status = 404, description = "No such survey", body = crate::transport::http::types::MessageResponse),
        (status = 500, description = "Surveys document unavailable", body = crate::transport::http::types::MessageResponse)
    )
)]
pub async fn get_survey_data_handler(
    State(state): State<AppState>,
    Query(query): Query<SurveyQuery>,
) -> impl IntoResponse {
    let Some(survey_id) = query.survey_id else {
        return data_error(DataError::NotFound("Survey data"), "Failed to read survey data.");
    };

    match state.data_service.surveys.get(&survey_id).await {
        Ok(survey) => (StatusCode::OK, Json(survey)).into_response(),
        Err(e) => data_error(e, "Failed to read survey data."),
    }
}
