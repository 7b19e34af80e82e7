//! Provisioning port

use async_trait::async_trait;
use domain::{ProvisionRequest, ProvisionResponse};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Creates service instances
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Provisioner: Send + Sync {
    /// Provision the instance described by `request`
    ///
    /// Returns `DomainError::InstanceAlreadyExists` when the instance ID is
    /// already in use.
    async fn provision(
        &self,
        request: &ProvisionRequest,
    ) -> Result<ProvisionResponse, ApplicationError>;
}
