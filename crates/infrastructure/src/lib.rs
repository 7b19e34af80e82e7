//! Infrastructure layer - Adapters and process plumbing
//!
//! Configuration loading, tracing setup, startup validation, and reference
//! implementations of the application ports.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod validation;

pub use adapters::*;
pub use config::{
    AppConfig, BrokerConfig, CatalogConfig, Environment, SecurityConfig, ServerConfig, TelemetryAppConfig,
};
pub use telemetry::{LogFormat, init_tracing};
pub use validation::{ConfigIssue, Finding, SecurityValidator, Severity};
