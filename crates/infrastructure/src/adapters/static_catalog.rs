//! Static catalog adapter - Implements CatalogSource from a fixed document

use std::{fs, io, path::Path};

use application::ports::CatalogSource;
use async_trait::async_trait;
use domain::Catalog;
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors raised while reading a catalog document from disk
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The file could not be read
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The file is not a valid catalog document
    #[error("invalid catalog document {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Serves the same catalog on every call
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    catalog: Catalog,
}

impl StaticCatalog {
    /// Wrap an in-memory catalog
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Read a JSON catalog document
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn from_file(path: &Path) -> Result<Self, CatalogLoadError> {
        let display = path.display().to_string();
        let raw = fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
            path: display.clone(),
            source,
        })?;
        let catalog: Catalog = serde_json::from_str(&raw)
            .map_err(|source| CatalogLoadError::Parse { path: display, source })?;

        debug!(services = catalog.services.len(), "Loaded catalog");
        Ok(Self::new(catalog))
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn catalog(&self) -> Catalog {
        self.catalog.clone()
    }
}
