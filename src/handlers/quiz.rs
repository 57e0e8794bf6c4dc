use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::Serialize;

use crate::domain::{QuizQuestion, QuizRequest};
use crate::error::{ApiError, QUIZ_FAILED};
use crate::services;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
}

/// POST /generate-quiz
pub async fn generate_quiz(
    State(state): State<AppState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let params = request.validate().ok_or(ApiError::MissingFields)?;

    tracing::info!(
        "Generating {} {} questions for {:?}",
        params.num_questions,
        params.quiz_type,
        params.topic
    );

    let questions = services::generate_quiz(state.backend.as_ref(), &state.llm, &params)
        .await
        .map_err(|e| ApiError::generation(QUIZ_FAILED, e))?;

    Ok(Json(QuizResponse { questions }))
}
