//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod in_memory_broker;
mod static_catalog;

pub use in_memory_broker::InMemoryBroker;
pub use static_catalog::{CatalogLoadError, StaticCatalog};
