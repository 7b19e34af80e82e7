//! Service broker HTTP presentation layer
//!
//! Request parsing, error shaping, Basic authentication and routing for the
//! `/v2` broker endpoints.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use extract::{BrokerJson, BrokerPath, BrokerQuery, ValidationError};
pub use middleware::{BasicAuth, BasicAuthLayer};
pub use response::{EmptyJson, Failure, respond};
pub use routes::{Endpoint, create_router};
pub use state::AppState;
