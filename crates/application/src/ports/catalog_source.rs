//! Catalog port

use async_trait::async_trait;
use domain::Catalog;
#[cfg(test)]
use mockall::automock;

/// Supplies the static catalog document
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// The catalog to advertise to the platform
    async fn catalog(&self) -> Catalog;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn CatalogSource) {}

    #[tokio::test]
    async fn mock_returns_catalog() {
        let mut mock = MockCatalogSource::new();
        mock.expect_catalog().returning(Catalog::default);

        assert!(mock.catalog().await.services.is_empty());
    }
}
