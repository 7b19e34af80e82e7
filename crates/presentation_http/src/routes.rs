//! Route definitions
//!
//! The broker exposes a fixed table of (verb, path) pairs. Authentication is
//! attached per route with `route_layer`, so a request that matches no route
//! or uses an unlisted verb is refused by routing before credentials are
//! checked or a handler runs.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Method, Uri},
    routing::{MethodRouter, delete, get, put},
};

use crate::{error::ApiError, handlers, middleware::BasicAuthLayer, state::AppState};

const CATALOG_PATH: &str = "/v2/catalog";
const INSTANCE_PATH: &str = "/v2/service_instances/{instance_id}";
const BINDING_PATH: &str = "/v2/service_instances/{instance_id}/service_bindings/{binding_id}";

/// One routed broker operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Catalog,
    Provision,
    InstanceDetails,
    Deprovision,
    Bind,
    Unbind,
}

impl Endpoint {
    /// Every endpoint, in registration order
    pub const ALL: [Self; 6] = [
        Self::Catalog,
        Self::Provision,
        Self::InstanceDetails,
        Self::Deprovision,
        Self::Bind,
        Self::Unbind,
    ];

    /// The only verb this endpoint answers to
    #[must_use]
    pub const fn method(self) -> Method {
        match self {
            Self::Catalog | Self::InstanceDetails => Method::GET,
            Self::Provision | Self::Bind => Method::PUT,
            Self::Deprovision | Self::Unbind => Method::DELETE,
        }
    }

    /// Path pattern in axum syntax
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Catalog => CATALOG_PATH,
            Self::Provision | Self::InstanceDetails | Self::Deprovision => INSTANCE_PATH,
            Self::Bind | Self::Unbind => BINDING_PATH,
        }
    }

    fn method_router(self) -> MethodRouter<AppState> {
        match self {
            Self::Catalog => get(handlers::catalog::catalog),
            Self::Provision => put(handlers::instances::provision),
            Self::InstanceDetails => get(handlers::instances::instance_details),
            Self::Deprovision => delete(handlers::instances::deprovision),
            Self::Bind => put(handlers::bindings::bind),
            Self::Unbind => delete(handlers::bindings::unbind),
        }
    }
}

async fn no_route(uri: Uri) -> ApiError {
    ApiError::NoRoute(uri.path().to_string())
}

async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(method.to_string())
}

/// Create the broker router
///
/// Every endpoint is wrapped by `auth`; request bodies are capped at
/// `max_body_size` bytes.
pub fn create_router(state: AppState, auth: BasicAuthLayer, max_body_size: usize) -> Router {
    Endpoint::ALL
        .into_iter()
        .fold(Router::new(), |router, endpoint| {
            router.route(
                endpoint.path(),
                endpoint.method_router().route_layer(auth.clone()),
            )
        })
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(no_route)
        .layer(DefaultBodyLimit::max(max_body_size))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn verb_and_path_pairs_are_unique() {
        let pairs: HashSet<(Method, &str)> = Endpoint::ALL
            .iter()
            .map(|e| (e.method(), e.path()))
            .collect();
        assert_eq!(pairs.len(), Endpoint::ALL.len());
    }

    #[test]
    fn instance_path_carries_three_verbs() {
        let verbs: Vec<Method> = Endpoint::ALL
            .iter()
            .filter(|e| e.path() == INSTANCE_PATH)
            .map(|e| e.method())
            .collect();
        assert_eq!(verbs, vec![Method::PUT, Method::GET, Method::DELETE]);
    }

    #[test]
    fn binding_endpoints() {
        assert_eq!(Endpoint::Bind.method(), Method::PUT);
        assert_eq!(Endpoint::Unbind.method(), Method::DELETE);
        assert_eq!(
            Endpoint::Bind.path(),
            "/v2/service_instances/{instance_id}/service_bindings/{binding_id}"
        );
    }

    #[test]
    fn catalog_is_get_only() {
        assert_eq!(Endpoint::Catalog.method(), Method::GET);
        assert_eq!(Endpoint::Catalog.path(), "/v2/catalog");
    }
}
