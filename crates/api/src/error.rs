use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use estate_core::error::CoreError;
use estate_db::error::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Every failure reaching a handler is already classified as a [`CoreError`].
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `estate_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Core(core) => AppError::Core(core),
            StoreError::Database(db) => AppError::Core(CoreError::Internal(db.to_string())),
            StoreError::Timeout(deadline) => {
                tracing::warn!(?deadline, "Store call timed out");
                AppError::Core(CoreError::Timeout)
            }
        }
    }
}

/// Missing, non-JSON or mistyped request bodies are caller errors.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Core(CoreError::BadInput(rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut details = None;

        let AppError::Core(core) = &self;
        let (status, code, message) = match core {
            CoreError::BadInput(msg) => (StatusCode::BAD_REQUEST, "BAD_INPUT", msg.clone()),
            CoreError::NotFound { entity, key } => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {key} not found"),
            ),
            CoreError::ValidationFailed(errors) => {
                details = Some(json!(errors));
                (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_FAILED",
                    errors
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("; "),
                )
            }
            CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            CoreError::ReadOnly(resource) => (
                StatusCode::METHOD_NOT_ALLOWED,
                "READ_ONLY_RESOURCE",
                format!("{resource} is a read-only view"),
            ),
            CoreError::StoreUnavailable(msg) => {
                tracing::error!(error = %msg, "Store unavailable");
                store_unavailable()
            }
            CoreError::Timeout => (
                StatusCode::SERVICE_UNAVAILABLE,
                "STORE_TIMEOUT",
                "The data store did not respond in time".to_string(),
            ),
            CoreError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal core error");
                internal_error()
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(details) = details {
            body["details"] = details;
        }

        (status, axum::Json(body)).into_response()
    }
}

fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

fn store_unavailable() -> (StatusCode, &'static str, String) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        "STORE_UNAVAILABLE",
        "The data store is unavailable".to_string(),
    )
}
