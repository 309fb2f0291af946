use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use vibeloop_core::errors::{Error as CoreError, ErrorKind};

use crate::models::ErrorBody;

const INVALID_REQUEST: &str = "INVALID_REQUEST";
const INTERNAL_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    /// Missing or unreadable request fields, caught before the core is called.
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

impl ApiError {
    pub fn required(field: &str) -> Self {
        ApiError::InvalidRequest(format!("{} is required", field))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::InvalidRequest(reason) => {
                (StatusCode::BAD_REQUEST, INVALID_REQUEST, reason.clone())
            }
            ApiError::Core(e) => match e.kind() {
                ErrorKind::Validation => (StatusCode::BAD_REQUEST, e.kind().as_str(), e.to_string()),
                ErrorKind::NotFound => (StatusCode::NOT_FOUND, e.kind().as_str(), e.to_string()),
                ErrorKind::Internal => {
                    tracing::error!(error = %e, "Unhandled error while serving request");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        e.kind().as_str(),
                        INTERNAL_MESSAGE.to_string(),
                    )
                }
            },
            ApiError::Anyhow(e) => {
                tracing::error!(error = %e, "Unhandled error while serving request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorKind::Internal.as_str(),
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        };
        let body = Json(ErrorBody {
            error: code.to_string(),
            message,
        });
        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
