use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::Serialize;

use crate::domain::PlanRequest;
use crate::error::{ApiError, PLAN_FAILED};
use crate::services;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub plan: String,
}

/// POST /generate-plan
pub async fn generate_plan(
    State(state): State<AppState>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<PlanResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let params = request.validate().ok_or(ApiError::MissingFields)?;

    tracing::info!(
        "Generating {}-day {} plan for {:?}",
        params.num_days,
        params.difficulty,
        params.topic
    );

    let plan = services::generate_plan(state.backend.as_ref(), &state.llm, &params)
        .await
        .map_err(|e| ApiError::generation(PLAN_FAILED, e))?;

    Ok(Json(PlanResponse { plan }))
}
