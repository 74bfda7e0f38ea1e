//! Typed errors and HTTP mapping.

use crate::response::ErrorBody;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("validation: {0}")]
    Validation(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// No record matches the requested id.
    #[error("not found")]
    NotFound,
    /// One human-readable message per offending field.
    #[error("validation: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Body exceeded the configured limit.
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, ErrorBody::not_found()),
            AppError::Validation(messages) => (StatusCode::BAD_REQUEST, ErrorBody::bad_request(messages.into())),
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, ErrorBody::bad_request(message.into())),
            AppError::PayloadTooLarge(detail) => {
                tracing::debug!(%detail, "request body rejected");
                (StatusCode::PAYLOAD_TOO_LARGE, ErrorBody::payload_too_large())
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::internal())
            }
            AppError::Config(e) => {
                tracing::error!(error = %e, "configuration error");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::internal())
            }
        };
        (status, Json(body)).into_response()
    }
}
