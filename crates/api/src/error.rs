use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use invite_core::error::CoreError;
use invite_db::error::StoreError;
use serde_json::json;

/// Generic message returned in place of any internal failure detail.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Generic message returned when the loader asset cannot be served.
pub const SEGMENTS_ERROR_MESSAGE: &str = "Failed to load segments";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for backing-file
/// failures. Implements [`IntoResponse`] to produce `{ "error": string }`
/// bodies. Internal causes are logged and never sent to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `invite_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The invitation store could not be read or parsed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The segment asset could not be read or parsed.
    #[error("Segment asset error: {0}")]
    SegmentsUnavailable(StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, key } => {
                    tracing::debug!(entity, key = %key, "Lookup found no match");
                    (StatusCode::NOT_FOUND, format!("{entity} not found"))
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        INTERNAL_ERROR_MESSAGE.to_string(),
                    )
                }
            },

            // --- Storage errors ---
            AppError::Store(err) => {
                tracing::error!(error = %err, "Failed to load invitations");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            AppError::SegmentsUnavailable(err) => {
                tracing::error!(error = %err, "Failed to load segment asset");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SEGMENTS_ERROR_MESSAGE.to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}
