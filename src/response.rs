//! Response helpers: success statuses and the error body shape.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Error payload: `{statusCode, error?, message}`. `message` is either a single
/// string or a list of field errors.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    pub message: serde_json::Value,
}

impl ErrorBody {
    pub fn not_found() -> Self {
        ErrorBody {
            status_code: StatusCode::NOT_FOUND.as_u16(),
            error: None,
            message: "Not Found".into(),
        }
    }

    /// Unknown route, e.g. `Cannot GET /authors`.
    pub fn no_route(method: &str, path: &str) -> Self {
        ErrorBody {
            status_code: StatusCode::NOT_FOUND.as_u16(),
            error: Some("Not Found"),
            message: format!("Cannot {} {}", method, path).into(),
        }
    }

    pub fn bad_request(message: serde_json::Value) -> Self {
        ErrorBody {
            status_code: StatusCode::BAD_REQUEST.as_u16(),
            error: Some("Bad Request"),
            message,
        }
    }

    pub fn payload_too_large() -> Self {
        ErrorBody {
            status_code: StatusCode::PAYLOAD_TOO_LARGE.as_u16(),
            error: Some("Payload Too Large"),
            message: "request entity too large".into(),
        }
    }

    pub fn internal() -> Self {
        ErrorBody {
            status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            error: None,
            message: "Internal server error".into(),
        }
    }
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}
