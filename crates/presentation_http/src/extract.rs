//! Request parsing
//!
//! Extractors that turn raw path segments, query strings and bodies into
//! typed values and enforce required fields with the validator crate. Every
//! rejection renders as a JSON `{"description": ...}` body.

use axum::{
    body::Bytes,
    extract::{
        FromRequest, FromRequestParts, Path, Query, Request,
        rejection::{BytesRejection, PathRejection},
    },
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use validator::{Validate, ValidationErrors};

use crate::error::ApiError;

/// Validation error type
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The body could not be read (too large, connection dropped)
    #[error("failed to read request body: {0}")]
    Body(#[from] BytesRejection),

    /// The body is not a JSON document of the expected shape
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// The query string could not be decoded
    #[error("invalid query string: {0}")]
    InvalidQuery(String),

    /// A path segment could not be decoded
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// One or more required fields are absent or empty
    #[error("missing required field: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

impl From<ValidationErrors> for ValidationError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(ToString::to_string)
            .collect();
        fields.sort();
        fields.dedup();
        Self::MissingFields(fields)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match &err {
            ValidationError::Body(rejection)
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE =>
            {
                Self::PayloadTooLarge(err.to_string())
            },
            _ => Self::Validation(err.to_string()),
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        debug!(error = %self, "Rejected request");
        ApiError::from(self).into_response()
    }
}

/// JSON body extractor with required-field validation
///
/// Reads the raw body regardless of `Content-Type`, decodes it with
/// `serde_json`, then runs the type's `validator` rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrokerJson<T>(pub T);

impl<T, S> FromRequest<S> for BrokerJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let value: T = serde_json::from_slice(&bytes)
            .map_err(|e| ValidationError::InvalidJson(e.to_string()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Query string extractor with required-field validation
#[derive(Debug, Clone, Copy, Default)]
pub struct BrokerQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for BrokerQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::try_from_uri(&parts.uri)
            .map_err(|e| ValidationError::InvalidQuery(e.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Path extractor whose rejection is JSON like every other broker error
#[derive(Debug, Clone, Copy, Default)]
pub struct BrokerPath<T>(pub T);

impl<T, S> FromRequestParts<S> for BrokerPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e: PathRejection| ValidationError::InvalidPath(e.body_text()))?;
        Ok(Self(value))
    }
}
