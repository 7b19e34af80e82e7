//! HTTP request handlers
//!
//! Each handler parses its request, calls exactly one collaborator and
//! shapes the outcome. Parse failures are rejected by the extractors before
//! the handler body runs.

pub mod bindings;
pub mod catalog;
pub mod instances;

use application::ApplicationError;
use serde::Deserialize;
use tracing::warn;
use validator::Validate;

use crate::error::ApiError;

/// `service_id` and `plan_id` as sent on delete-style query strings
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ServicePlanQuery {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub service_id: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub plan_id: String,
}

/// Log a collaborator failure and map it to its response
fn collaborator_failure(operation: &'static str) -> impl FnOnce(ApplicationError) -> ApiError {
    move |error| {
        warn!(operation, kind = %error.kind(), error = %error, "Collaborator call failed");
        ApiError::from(error)
    }
}
