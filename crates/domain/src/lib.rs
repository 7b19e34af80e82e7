//! Domain layer for the service broker
//!
//! Contains the typed requests and responses exchanged with the managing
//! platform, the catalog document and the broker error taxonomy.
//! This layer has no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::{DomainError, ErrorKind};
