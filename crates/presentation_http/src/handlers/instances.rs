//! Service instance handlers: provision, deprovision, details

use axum::{extract::State, http::StatusCode, response::Response};
use domain::{DeprovisionRequest, ProvisionParameters, ProvisionRequest};
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

/// Provision request body
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProvisionBody {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub service_id: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub plan_id: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub organization_guid: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub space_guid: String,
    #[serde(default)]
    pub parameters: Option<ProvisionParameters>,
}

impl ProvisionBody {
    fn into_request(self, instance_id: String) -> ProvisionRequest {
        ProvisionRequest {
            instance_id,
            service_id: self.service_id,
            plan_id: self.plan_id,
            organization_guid: self.organization_guid,
            space_guid: self.space_guid,
            parameters: self.parameters,
        }
    }
}

/// `PUT /v2/service_instances/{instance_id}`
#[instrument(skip(state, body), fields(service_id = %body.service_id, plan_id = %body.plan_id))]
pub async fn provision(
    State(state): State<AppState>,
    BrokerPath(instance_id): BrokerPath<String>,
    BrokerJson(body): BrokerJson<ProvisionBody>,
) -> Result<Response, ApiError> {
    let request = body.into_request(instance_id);
    let response = state
        .provisioner
        .provision(&request)
        .await
        .map_err(collaborator_failure("provision"))?;

    info!("Instance provisioned");
    Ok(respond(StatusCode::CREATED, &response))
}

/// `DELETE /v2/service_instances/{instance_id}?service_id=..&plan_id=..`
#[instrument(skip(state, query))]
pub async fn deprovision(
    State(state): State<AppState>,
    BrokerPath(instance_id): BrokerPath<String>,
    BrokerQuery(query): BrokerQuery<ServicePlanQuery>,
) -> Result<Response, ApiError> {
    let request = DeprovisionRequest {
        instance_id,
        service_id: query.service_id,
        plan_id: query.plan_id,
    };
    state
        .deprovisioner
        .deprovision(&request)
        .await
        .map_err(collaborator_failure("deprovision"))?;

    info!("Instance deprovisioned");
    Ok(respond(StatusCode::OK, &EmptyJson {}))
}

/// `GET /v2/service_instances/{instance_id}`
#[instrument(skip(state))]
pub async fn instance_details(
    State(state): State<AppState>,
    BrokerPath(instance_id): BrokerPath<String>,
) -> Result<Response, ApiError> {
    let details = state
        .instance_details
        .fetch_instance_details(&instance_id)
        .await
        .map_err(collaborator_failure("fetch_instance_details"))?;

    Ok(respond(StatusCode::OK, &details))
}
