use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{CoreError, FieldError};
use thiserror::Error;

/// Errors a handler can answer with. Each maps to one status code and the
/// shared `{"error": {"code", "message"}}` envelope.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid input")]
    Invalid(Vec<FieldError>),

    #[error("authentication required")]
    Unauthorized,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("access denied")]
    Forbidden,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("resource already exists")]
    Conflict,

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Invalid(fields) => ApiError::Invalid(fields),
            CoreError::AlreadyExists => ApiError::Conflict,
            CoreError::NotFound(kind) => ApiError::NotFound(kind),
            CoreError::Repository(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Invalid(fields) => {
                tracing::warn!(fields = ?fields, "invalid input");
                let details = serde_json::to_value(fields).unwrap_or_default();
                (
                    StatusCode::BAD_REQUEST,
                    http_common::json_error_with_fields(
                        "invalid_input",
                        &CoreError::Invalid(fields.clone()).to_string(),
                        details,
                    ),
                )
            }
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                http_common::json_err("unauthorized"),
            ),
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                http_common::json_err("invalid_credentials"),
            ),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, http_common::json_err("forbidden")),
            ApiError::NotFound(kind) => {
                tracing::debug!(kind = *kind, "not found");
                (
                    StatusCode::NOT_FOUND,
                    http_common::json_error_with_message("not_found", &self.to_string()),
                )
            }
            ApiError::Conflict => (StatusCode::CONFLICT, http_common::json_err("conflict")),
            ApiError::Internal(msg) => {
                tracing::error!(err = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    http_common::json_err("internal"),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
