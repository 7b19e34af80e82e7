//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP listener settings
//! - `security`: Basic Authentication credentials
//! - `catalog`: where the catalog document comes from
//! - `telemetry`: log filtering
//! - `broker`: credentials and dashboard of the in-memory broker

mod broker;
mod catalog;
mod security;
mod server;
mod telemetry;

use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

pub use broker::BrokerConfig;
pub use catalog::CatalogConfig;
pub use security::SecurityConfig;
pub use server::ServerConfig;
pub use telemetry::TelemetryAppConfig;

/// Environment variable naming an alternative configuration file
pub const CONFIG_PATH_ENV: &str = "BROKER_CONFIG";

/// Prefix for environment variable overrides, e.g. `BROKER__SERVER__PORT`
pub const ENV_PREFIX: &str = "BROKER";

/// Application environment (development or production)
///
/// Controls security validation strictness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - relaxed security warnings
    #[default]
    Development,
    /// Production environment - strict security validation
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development or production)
    #[serde(default)]
    pub environment: Option<Environment>,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Broker credentials expected from the platform
    #[serde(default)]
    pub security: SecurityConfig,

    /// Catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryAppConfig,

    /// In-memory broker behaviour
    #[serde(default)]
    pub broker: BrokerConfig,
}

impl AppConfig {
    /// Load configuration from `config.{toml,json,yaml}` (or the file named by
    /// `BROKER_CONFIG`) and environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let file = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => config::File::from(Path::new(&path)).required(true),
            Err(_) => config::File::with_name("config").required(false),
        };
        Self::build(file)
    }

    /// Load configuration from an explicit file plus environment overrides
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build<T>(file: T) -> Result<Self, config::ConfigError>
    where
        T: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .add_source(file)
            // Override with environment variables (e.g., BROKER__SECURITY__PASSWORD)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Whether strict production validation applies
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment == Some(Environment::Production)
    }
}
