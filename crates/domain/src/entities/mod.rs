//! Domain entities - per-request value objects and the catalog document

mod catalog;
mod service_binding;
mod service_instance;

pub use catalog::{Catalog, DashboardClient, Plan, Service};
pub use service_binding::{BindRequest, BindResponse, BindingCredentials, UnbindRequest};
pub use service_instance::{
    DeprovisionRequest, InstanceDetails, ProvisionParameters, ProvisionRequest, ProvisionResponse,
};
