//! Catalog source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the catalog document is read from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a JSON catalog document; an empty catalog is served when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}
