//! Port definitions for the collaborators of the broker
//!
//! Each port exposes exactly one operation. Handlers depend on these traits
//! only, so any implementation (or a test double) can be substituted.

mod binder;
mod catalog_source;
mod deprovisioner;
mod instance_details;
mod provisioner;
mod unbinder;

#[cfg(test)]
pub use binder::MockBinder;
pub use binder::Binder;
#[cfg(test)]
pub use catalog_source::MockCatalogSource;
pub use catalog_source::CatalogSource;
#[cfg(test)]
pub use deprovisioner::MockDeprovisioner;
pub use deprovisioner::Deprovisioner;
#[cfg(test)]
pub use instance_details::MockInstanceDetailsFetcher;
pub use instance_details::InstanceDetailsFetcher;
#[cfg(test)]
pub use provisioner::MockProvisioner;
pub use provisioner::Provisioner;
#[cfg(test)]
pub use unbinder::MockUnbinder;
pub use unbinder::Unbinder;

/// A single component that implements every lifecycle port
///
/// Blanket-implemented, so any type providing the five operations can be
/// handed to the HTTP layer as one value.
pub trait ServiceBroker:
    Provisioner + Deprovisioner + Binder + Unbinder + InstanceDetailsFetcher
{
}

impl<T> ServiceBroker for T where
    T: Provisioner + Deprovisioner + Binder + Unbinder + InstanceDetailsFetcher
{
}
