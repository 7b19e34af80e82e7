//! Domain-level errors

use std::fmt;

use thiserror::Error;

/// Classification of a broker outcome
///
/// Every error a collaborator can return falls into exactly one kind.
/// The HTTP layer derives the status code from the kind alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The instance or binding is already present
    AlreadyExists,
    /// The instance or binding is no longer present
    NotFound,
    /// Anything else
    Generic,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyExists => write!(f, "already_exists"),
            Self::NotFound => write!(f, "not_found"),
            Self::Generic => write!(f, "generic"),
        }
    }
}

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A service instance with this ID was already provisioned
    #[error("service instance already exists: {instance_id}")]
    InstanceAlreadyExists { instance_id: String },

    /// A service binding with this ID was already created
    #[error("service binding already exists: {binding_id}")]
    BindingAlreadyExists { binding_id: String },

    /// The service instance does not exist
    #[error("service instance not found: {instance_id}")]
    InstanceNotFound { instance_id: String },

    /// The service binding does not exist
    #[error("service binding not found: {binding_id}")]
    BindingNotFound { binding_id: String },
}

impl DomainError {
    /// Create an instance-already-exists error
    pub fn instance_already_exists(instance_id: impl Into<String>) -> Self {
        Self::InstanceAlreadyExists {
            instance_id: instance_id.into(),
        }
    }

    /// Create a binding-already-exists error
    pub fn binding_already_exists(binding_id: impl Into<String>) -> Self {
        Self::BindingAlreadyExists {
            binding_id: binding_id.into(),
        }
    }

    /// Create an instance-not-found error
    pub fn instance_not_found(instance_id: impl Into<String>) -> Self {
        Self::InstanceNotFound {
            instance_id: instance_id.into(),
        }
    }

    /// Create a binding-not-found error
    pub fn binding_not_found(binding_id: impl Into<String>) -> Self {
        Self::BindingNotFound {
            binding_id: binding_id.into(),
        }
    }

    /// Classify this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InstanceAlreadyExists { .. } | Self::BindingAlreadyExists { .. } => {
                ErrorKind::AlreadyExists
            },
            Self::InstanceNotFound { .. } | Self::BindingNotFound { .. } => ErrorKind::NotFound,
        }
    }
}
