//! Instance detail retrieval port

use async_trait::async_trait;
use domain::InstanceDetails;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Looks up an existing service instance
#[cfg_attr(test, automock)]
#[async_trait]
pub trait InstanceDetailsFetcher: Send + Sync {
    /// Fetch the detail document for `instance_id`
    async fn fetch_instance_details(
        &self,
        instance_id: &str,
    ) -> Result<InstanceDetails, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn InstanceDetailsFetcher) {}

    #[tokio::test]
    async fn mock_returns_details() {
        let mut mock = MockInstanceDetailsFetcher::new();
        mock.expect_fetch_instance_details()
            .withf(|id| id == "my-instance")
            .returning(|_| {
                Ok(InstanceDetails {
                    service_id: "svc".to_string(),
                    plan_id: "plan".to_string(),
                    ..InstanceDetails::default()
                })
            });

        let details = mock.fetch_instance_details("my-instance").await.unwrap();
        assert_eq!(details.plan_id, "plan");
    }
}
