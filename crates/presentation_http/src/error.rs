//! API error handling
//!
//! Maps every failure the broker can produce to a status code and a JSON
//! body. Collaborator errors are classified by kind only: conflicts and
//! missing resources render as `{}`, anything else surfaces its message.

use application::ApplicationError;
use axum::{
    http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use domain::ErrorKind;
use thiserror::Error;

use crate::response::{EmptyJson, Failure, respond};

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or incomplete request, detected before any collaborator call
    #[error("{0}")]
    Validation(String),

    /// Request body exceeds the configured limit
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Missing or wrong Basic credentials
    #[error("not authorized")]
    Unauthorized { realm: String },

    /// The instance or binding already exists
    #[error("resource already exists")]
    Conflict,

    /// The instance or binding no longer exists
    #[error("resource is gone")]
    Gone,

    /// No route matches the path
    #[error("no route matches path {0}")]
    NoRoute(String),

    /// The path exists but not for this verb
    #[error("method {0} is not allowed for this path")]
    MethodNotAllowed(String),

    /// Any other failure; the message is passed through verbatim
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Status code this error renders with
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Gone => StatusCode::GONE,
            Self::NoRoute(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err.kind() {
            ErrorKind::AlreadyExists => Self::Conflict,
            ErrorKind::NotFound => Self::Gone,
            ErrorKind::Generic => Self::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Conflict | Self::Gone => respond(status, &EmptyJson {}),
            Self::Unauthorized { ref realm } => {
                let challenge = HeaderValue::from_str(&format!("Basic realm=\"{realm}\""))
                    .unwrap_or_else(|_| HeaderValue::from_static("Basic"));
                let mut response = respond(status, &Failure::new(self.to_string()));
                response.headers_mut().insert(WWW_AUTHENTICATE, challenge);
                response
            },
            other => respond(status, &Failure::new(other.to_string())),
        }
    }
}
