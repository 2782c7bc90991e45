use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Json, Response},
};
use serde_json::Value as JsonValue;

use crate::dto::quiz_dto::GradeRequest;
use crate::error::Error;
use crate::services::grading_service::GradingService;
use crate::services::quiz_service::QuizService;
use crate::AppState;

#[axum::debug_handler]
pub async fn get_quiz(State(state): State<AppState>) -> crate::error::Result<Response> {
    let selection = QuizService::random_selection(state.bank).map_err(|e| {
        tracing::error!("Quiz selection failed: {:?}", e);
        Error::Internal("Failed to load quiz".to_string())
    })?;
    Ok(Json(selection).into_response())
}

#[axum::debug_handler]
pub async fn grade(
    State(state): State<AppState>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> crate::error::Result<Response> {
    // A body that cannot be read as JSON at all is an internal failure, not a
    // validation failure; only a well-formed body with the wrong shape is 400.
    let Json(body) = body.map_err(|_| Error::Internal("Server error".to_string()))?;

    let request: GradeRequest = match serde_json::from_value(body) {
        Ok(parsed) => parsed,
        Err(_) => return Err(Error::BadRequest("Invalid payload".to_string())),
    };

    let report = GradingService::grade(state.bank, &request.answers);
    Ok(Json(report).into_response())
}
