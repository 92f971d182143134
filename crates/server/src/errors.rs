use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use models::errors::ModelError;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

const INTERNAL_MESSAGE: &str = "Internal Server Error";

/// Error returned by handlers; always rendered as `{"error": message}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) | ServiceError::Model(ModelError::Validation(msg)) => {
                ApiError::new(StatusCode::BAD_REQUEST, msg)
            }
            ServiceError::NotFound(msg) => ApiError::new(StatusCode::NOT_FOUND, msg),
            other => {
                // details stay in the log, the caller only sees a generic failure
                error!(err = %other, "store operation failed");
                ApiError::internal()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(status = %rejection.status(), reason = %rejection.body_text(), "rejected request body");
        ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_service_errors_to_statuses() {
        let e: ApiError = ServiceError::Validation("Missing fields".into()).into();
        assert_eq!((e.status, e.message.as_str()), (StatusCode::BAD_REQUEST, "Missing fields"));

        let e: ApiError = ServiceError::not_found("Expense").into();
        assert_eq!((e.status, e.message.as_str()), (StatusCode::NOT_FOUND, "Expense not found"));

        let e: ApiError = ServiceError::Db("connection refused on 10.0.0.5".into()).into();
        assert_eq!((e.status, e.message.as_str()), (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE));

        let e: ApiError = ServiceError::Model(ModelError::Db("timeout".into())).into();
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
