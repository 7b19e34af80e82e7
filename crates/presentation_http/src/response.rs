//! JSON response writer
//!
//! Every response leaving the broker goes through [`respond`], so the body is
//! always JSON and always carries `Content-Type: application/json`.

use axum::{
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

const APPLICATION_JSON: &str = "application/json";

const SERIALIZATION_FAILURE_BODY: &str = r#"{"description":"failed to serialize response"}"#;

/// Body of a successful call with nothing to report: `{}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyJson {}

/// Error body: `{"description": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub description: String,
}

impl Failure {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Serialize `body` and write it with `status`
///
/// A value that cannot be serialized is a bug, not a client error: it is
/// logged and answered with a fixed 500 rather than a wrong success.
pub fn respond<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (status, [(CONTENT_TYPE, APPLICATION_JSON)], bytes).into_response(),
        Err(e) => {
            error!(error = %e, status = %status, "Failed to serialize response body");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(CONTENT_TYPE, APPLICATION_JSON)],
                SERIALIZATION_FAILURE_BODY,
            )
                .into_response()
        },
    }
}
