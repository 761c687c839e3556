use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use vitals_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce `{"status": "error", ...}` bodies,
/// the shape the sensor firmware expects.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `vitals_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request body that could not be extracted.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotExpected { .. } => {
                    (StatusCode::BAD_REQUEST, "NOT_EXPECTED", core.to_string())
                }
                CoreError::InvalidFormat { .. } => {
                    (StatusCode::BAD_REQUEST, "INVALID_FORMAT", core.to_string())
                }
                CoreError::InvalidSelection(_) => {
                    (StatusCode::BAD_REQUEST, "INVALID_SELECTION", core.to_string())
                }
                CoreError::IncompleteSession => {
                    (StatusCode::CONFLICT, "INCOMPLETE_SESSION", core.to_string())
                }
                CoreError::MissingFeature(_) | CoreError::InvalidFeatureValue { .. } => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", core.to_string())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- HTTP-level errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "status": "error",
            "message": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
