//! HTTP-facing error type. This is the only place failures become status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::llm::LlmError;

pub const MISSING_FIELDS: &str = "Missing required fields";
pub const INVALID_BODY: &str = "Invalid request body";
pub const PLAN_FAILED: &str = "Failed to generate study plan";
pub const QUIZ_FAILED: &str = "Failed to generate quiz";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("{context}: {source}")]
    Generation {
        context: &'static str,
        #[source]
        source: LlmError,
    },
}

impl ApiError {
    pub fn generation(context: &'static str, source: LlmError) -> Self {
        ApiError::Generation { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Generation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::MissingFields => json!({ "error": MISSING_FIELDS }),
            ApiError::InvalidBody(details) => json!({
                "error": INVALID_BODY,
                "details": details,
            }),
            ApiError::Generation { context, source } => {
                tracing::error!("{}: {}", context, source);
                json!({
                    "error": context,
                    "details": source.to_string(),
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::MissingFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidBody("expected u32".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::generation(PLAN_FAILED, LlmError::EmptyResponse).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ApiError::MissingFields.to_string(), "Missing required fields");
        let err = ApiError::generation(
            QUIZ_FAILED,
            LlmError::Status {
                status: 401,
                body: "bad key".into(),
            },
        );
        assert_eq!(
            err.to_string(),
            "Failed to generate quiz: chat-completion API returned 401: bad key"
        );
    }
}
