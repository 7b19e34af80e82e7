//! Reference broker settings.

use domain::BindingCredentials;
use serde::{Deserialize, Serialize};

/// Behaviour of the bundled in-memory broker
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrokerConfig {
    /// Static entries merged into every bind response
    #[serde(default)]
    pub credentials: BindingCredentials,

    /// Base URL; new instances report `<base>/<instance_id>` as their dashboard
    #[serde(default)]
    pub dashboard_base_url: Option<String>,
}
