//! Catalog handler

use axum::{extract::State, http::StatusCode, response::Response};
use tracing::{debug, instrument};

use crate::{response::respond, state::AppState};

/// `GET /v2/catalog`
#[instrument(skip(state))]
pub async fn catalog(State(state): State<AppState>) -> Response {
    let catalog = state.catalog.catalog().await;
    debug!(services = catalog.services.len(), "Serving catalog");
    respond(StatusCode::OK, &catalog)
}
