use axum::http::StatusCode;
use axum::response::IntoResponse;

use vpaygo_core::DomainError;

use crate::app::dto::{StatusResponse, MSG_INVALID_DATA};

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => {
            tracing::warn!(reason = %msg, "rejected product payload");
            invalid_payload()
        }
    }
}

/// The single client error the API reports. Details stay in the logs.
pub fn invalid_payload() -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, MSG_INVALID_DATA)
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, axum::Json(StatusResponse::error(message))).into_response()
}
