//! Binding port

use async_trait::async_trait;
use domain::{BindRequest, BindResponse};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Issues credentials for a service instance
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Binder: Send + Sync {
    /// Create the binding described by `request`
    ///
    /// `request.app_guid` may be empty for app-less service keys.
    async fn bind(&self, request: &BindRequest) -> Result<BindResponse, ApplicationError>;
}
