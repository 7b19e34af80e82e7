//! Security configuration: the Basic Authentication credentials the
//! platform must present.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Security configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Expected Basic Authentication username
    #[serde(default)]
    pub username: String,

    /// Expected Basic Authentication password
    #[serde(default = "empty_secret", skip_serializing)]
    pub password: SecretString,

    /// Realm advertised in the `WWW-Authenticate` challenge
    #[serde(default = "default_realm")]
    pub realm: String,
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

fn default_realm() -> String {
    "service-broker".to_string()
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: empty_secret(),
            realm: default_realm(),
        }
    }
}

impl SecurityConfig {
    /// Create a configuration with the given credentials
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
            realm: default_realm(),
        }
    }

    /// Whether both username and password are set
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.expose_secret().is_empty()
    }
}
