//! Application layer - collaborator ports
//!
//! Defines the narrow interfaces through which the HTTP layer reaches the
//! components that actually provision instances and issue bindings.
//! Adapters in the infrastructure layer (or in a consuming crate) implement
//! these ports.

pub mod error;
pub mod ports;

pub use error::ApplicationError;
pub use ports::*;
