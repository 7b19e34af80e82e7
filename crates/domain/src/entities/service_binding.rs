//! Service binding requests and responses

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque credentials handed to the bound application
///
/// Values are whatever the binder produced: strings, numbers, nested objects.
pub type BindingCredentials = Map<String, Value>;

/// Intent to create a credential binding
///
/// `app_guid` is empty for service keys that are not tied to an application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindRequest {
    pub binding_id: String,
    pub instance_id: String,
    pub service_id: String,
    pub plan_id: String,
    pub app_guid: String,
}

impl BindRequest {
    /// Whether this binding is an app-less service key
    pub fn is_service_key(&self) -> bool {
        self.app_guid.is_empty()
    }
}

/// Result of a successful bind
///
/// Empty credentials and an empty syslog drain URL are left out of the
/// serialized document, so a bare success renders as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindResponse {
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub credentials: BindingCredentials,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub syslog_drain_url: String,
}

impl BindResponse {
    /// A response carrying only credentials
    pub fn with_credentials(credentials: BindingCredentials) -> Self {
        Self {
            credentials,
            syslog_drain_url: String::new(),
        }
    }
}

/// Intent to remove a credential binding
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnbindRequest {
    pub binding_id: String,
    pub instance_id: String,
    pub service_id: String,
    pub plan_id: String,
}
