//! Service instance requests and responses

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Arbitrary provisioning parameters passed through from the platform
pub type ProvisionParameters = Map<String, Value>;

/// Intent to create a service instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionRequest {
    /// Instance ID taken from the request path
    pub instance_id: String,
    /// Service offering the instance belongs to
    pub service_id: String,
    /// Plan the instance is created from
    pub plan_id: String,
    /// Organization owning the instance
    pub organization_guid: String,
    /// Space owning the instance
    pub space_guid: String,
    /// Raw parameters, if the platform sent any
    pub parameters: Option<ProvisionParameters>,
}

/// Result of a successful provision
///
/// Serializes to `{}` unless a dashboard URL is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionResponse {
    /// URL of a web dashboard for the new instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_url: Option<String>,
}

impl ProvisionResponse {
    /// A response pointing at a dashboard
    pub fn with_dashboard(url: impl Into<String>) -> Self {
        Self {
            dashboard_url: Some(url.into()),
        }
    }
}

/// Intent to delete a service instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeprovisionRequest {
    pub instance_id: String,
    pub service_id: String,
    pub plan_id: String,
}

/// Detail document for a provisioned instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceDetails {
    pub service_id: String,
    pub plan_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ProvisionParameters>,
}
