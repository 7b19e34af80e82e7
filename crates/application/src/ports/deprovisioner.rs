//! Deprovisioning port

use async_trait::async_trait;
use domain::DeprovisionRequest;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Deletes service instances
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Deprovisioner: Send + Sync {
    /// Remove the instance named in `request`
    ///
    /// Returns `DomainError::InstanceNotFound` when there is nothing to remove,
    /// which the platform treats as an already-completed delete.
    async fn deprovision(&self, request: &DeprovisionRequest) -> Result<(), ApplicationError>;
}
