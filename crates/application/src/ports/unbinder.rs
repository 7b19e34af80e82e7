//! Unbinding port

use async_trait::async_trait;
use domain::UnbindRequest;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Revokes previously issued bindings
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Unbinder: Send + Sync {
    /// Remove the binding named in `request`
    async fn unbind(&self, request: &UnbindRequest) -> Result<(), ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn Unbinder) {}

    #[tokio::test]
    async fn mock_propagates_generic_failure() {
        let mut mock = MockUnbinder::new();
        mock.expect_unbind()
            .returning(|_| Err(ApplicationError::internal("BANG!")));

        let err = mock.unbind(&UnbindRequest::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "BANG!");
    }
}
