//! Application state shared across handlers

use std::sync::Arc;

use application::ports::{
    Binder, CatalogSource, Deprovisioner, InstanceDetailsFetcher, Provisioner, ServiceBroker,
    Unbinder,
};

/// Shared application state
///
/// One trait object per collaborator, so each can be substituted on its own.
#[derive(Clone)]
pub struct AppState {
    /// Source of the advertised catalog
    pub catalog: Arc<dyn CatalogSource>,
    pub provisioner: Arc<dyn Provisioner>,
    pub deprovisioner: Arc<dyn Deprovisioner>,
    pub binder: Arc<dyn Binder>,
    pub unbinder: Arc<dyn Unbinder>,
    pub instance_details: Arc<dyn InstanceDetailsFetcher>,
}

impl AppState {
    /// Use a single component for every lifecycle operation
    pub fn from_broker<B>(catalog: Arc<dyn CatalogSource>, broker: Arc<B>) -> Self
    where
        B: ServiceBroker + 'static,
    {
        Self {
            catalog,
            provisioner: Arc::clone(&broker) as Arc<dyn Provisioner>,
            deprovisioner: Arc::clone(&broker) as Arc<dyn Deprovisioner>,
            binder: Arc::clone(&broker) as Arc<dyn Binder>,
            unbinder: Arc::clone(&broker) as Arc<dyn Unbinder>,
            instance_details: broker,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
