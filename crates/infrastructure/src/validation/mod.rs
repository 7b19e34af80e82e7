//! Configuration validation module
//!
//! Startup checks for the broker configuration.

pub mod security;

pub use security::{ConfigIssue, Finding, SecurityValidator, Severity};
