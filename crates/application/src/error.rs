//! Application-level errors

use domain::{DomainError, ErrorKind};
use thiserror::Error;

/// Errors a collaborator can return
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Classified domain outcome (conflict, gone)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A backing service the collaborator depends on failed
    #[error("external service error: {0}")]
    ExternalService(String),

    /// Any other failure; the message is surfaced unchanged
    #[error("{0}")]
    Internal(String),
}

impl ApplicationError {
    /// Create an internal error from any message
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Classify this error
    ///
    /// Only domain errors carry a specific kind; everything else is generic.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(e) => e.kind(),
            Self::ExternalService(_) | Self::Internal(_) => ErrorKind::Generic,
        }
    }
}
