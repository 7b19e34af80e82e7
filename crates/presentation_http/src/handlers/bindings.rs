//! Service binding handlers: bind, unbind

use axum::{extract::State, http::StatusCode, response::Response};
use domain::{BindRequest, UnbindRequest};
use serde::Deserialize;
use tracing::{info, instrument};
use validator::Validate;

use super::{ServicePlanQuery, collaborator_failure};
use crate::{
    error::ApiError,
    extract::{BrokerJson, BrokerPath, BrokerQuery},
    response::{EmptyJson, respond},
    state::AppState,
};

/// Bind request body
///
/// `app_guid` may be omitted for service keys.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BindBody {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub service_id: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub plan_id: String,
    #[serde(default)]
    pub app_guid: String,
}

/// `PUT /v2/service_instances/{instance_id}/service_bindings/{binding_id}`
#[instrument(skip(state, body), fields(service_id = %body.service_id, plan_id = %body.plan_id))]
pub async fn bind(
    State(state): State<AppState>,
    BrokerPath((instance_id, binding_id)): BrokerPath<(String, String)>,
    BrokerJson(body): BrokerJson<BindBody>,
) -> Result<Response, ApiError> {
    let request = BindRequest {
        binding_id,
        instance_id,
        service_id: body.service_id,
        plan_id: body.plan_id,
        app_guid: body.app_guid,
    };
    let response = state
        .binder
        .bind(&request)
        .await
        .map_err(collaborator_failure("bind"))?;

    // credentials stay out of the log
    info!(service_key = request.is_service_key(), "Binding created");
    Ok(respond(StatusCode::CREATED, &response))
}

/// `DELETE /v2/service_instances/{instance_id}/service_bindings/{binding_id}?service_id=..&plan_id=..`
#[instrument(skip(state, query))]
pub async fn unbind(
    State(state): State<AppState>,
    BrokerPath((instance_id, binding_id)): BrokerPath<(String, String)>,
    BrokerQuery(query): BrokerQuery<ServicePlanQuery>,
) -> Result<Response, ApiError> {
    let request = UnbindRequest {
        binding_id,
        instance_id,
        service_id: query.service_id,
        plan_id: query.plan_id,
    };
    state
        .unbinder
        .unbind(&request)
        .await
        .map_err(collaborator_failure("unbind"))?;

    info!("Binding removed");
    Ok(respond(StatusCode::OK, &EmptyJson {}))
}
