//! In-memory broker - Implements every lifecycle port over process-local maps
//!
//! State is lost on restart. Useful for local development and for driving the
//! HTTP surface end to end.

use std::collections::HashMap;

use application::{
    error::ApplicationError,
    ports::{Binder, Deprovisioner, InstanceDetailsFetcher, Provisioner, Unbinder},
};
use async_trait::async_trait;
use domain::{
    BindRequest, BindResponse, BindingCredentials, DeprovisionRequest, DomainError,
    InstanceDetails, ProvisionRequest, ProvisionResponse, UnbindRequest,
};
use parking_lot::RwLock;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::BrokerConfig;

#[derive(Debug, Clone)]
struct InstanceRecord {
    service_id: String,
    plan_id: String,
    dashboard_url: Option<String>,
    parameters: Option<serde_json::Map<String, Value>>,
}

#[derive(Debug, Clone)]
struct BindingRecord {
    instance_id: String,
}

#[derive(Debug, Default)]
struct State {
    instances: HashMap<String, InstanceRecord>,
    bindings: HashMap<String, BindingRecord>,
}

/// Process-local broker backing all five lifecycle ports
#[derive(Debug, Default)]
pub struct InMemoryBroker {
    state: RwLock<State>,
    credentials: BindingCredentials,
    dashboard_base_url: Option<String>,
}

impl InMemoryBroker {
    /// Create an empty broker
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty broker with credentials and dashboard taken from config
    #[must_use]
    pub fn from_config(config: &BrokerConfig) -> Self {
        let broker = Self::new().with_credentials(config.credentials.clone());
        match &config.dashboard_base_url {
            Some(base) => broker.with_dashboard_base_url(base.as_str()),
            None => broker,
        }
    }

    /// Merge static credentials into every bind response
    #[must_use]
    pub fn with_credentials(mut self, credentials: BindingCredentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Report `<base>/<instance_id>` as the dashboard of new instances
    #[must_use]
    pub fn with_dashboard_base_url(mut self, base: impl Into<String>) -> Self {
        self.dashboard_base_url = Some(base.into());
        self
    }

    /// Number of provisioned instances
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.state.read().instances.len()
    }

    /// Number of live bindings
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.state.read().bindings.len()
    }

    fn dashboard_url_for(&self, instance_id: &str) -> Option<String> {
        self.dashboard_base_url
            .as_ref()
            .map(|base| format!("{}/{instance_id}", base.trim_end_matches('/')))
    }
}

#[async_trait]
impl Provisioner for InMemoryBroker {
    #[instrument(skip(self, request), fields(instance_id = %request.instance_id))]
    async fn provision(
        &self,
        request: &ProvisionRequest,
    ) -> Result<ProvisionResponse, ApplicationError> {
        let mut state = self.state.write();
        if state.instances.contains_key(&request.instance_id) {
            return Err(DomainError::instance_already_exists(&request.instance_id).into());
        }

        let dashboard_url = self.dashboard_url_for(&request.instance_id);
        state.instances.insert(
            request.instance_id.clone(),
            InstanceRecord {
                service_id: request.service_id.clone(),
                plan_id: request.plan_id.clone(),
                dashboard_url: dashboard_url.clone(),
                parameters: request.parameters.clone(),
            },
        );
        debug!("Instance stored");

        Ok(ProvisionResponse { dashboard_url })
    }
}

#[async_trait]
impl Deprovisioner for InMemoryBroker {
    #[instrument(skip(self, request), fields(instance_id = %request.instance_id))]
    async fn deprovision(&self, request: &DeprovisionRequest) -> Result<(), ApplicationError> {
        let mut state = self.state.write();
        if state.instances.remove(&request.instance_id).is_none() {
            return Err(DomainError::instance_not_found(&request.instance_id).into());
        }

        let before = state.bindings.len();
        state
            .bindings
            .retain(|_, binding| binding.instance_id != request.instance_id);
        debug!(
            removed_bindings = before - state.bindings.len(),
            "Instance removed"
        );

        Ok(())
    }
}

#[async_trait]
impl Binder for InMemoryBroker {
    #[instrument(
        skip(self, request),
        fields(instance_id = %request.instance_id, binding_id = %request.binding_id)
    )]
    async fn bind(&self, request: &BindRequest) -> Result<BindResponse, ApplicationError> {
        let mut state = self.state.write();
        if !state.instances.contains_key(&request.instance_id) {
            return Err(DomainError::instance_not_found(&request.instance_id).into());
        }
        if state.bindings.contains_key(&request.binding_id) {
            return Err(DomainError::binding_already_exists(&request.binding_id).into());
        }

        state.bindings.insert(
            request.binding_id.clone(),
            BindingRecord {
                instance_id: request.instance_id.clone(),
            },
        );
        debug!(service_key = request.is_service_key(), "Binding stored");

        let mut credentials = self.credentials.clone();
        credentials.insert(
            "instance_id".to_string(),
            Value::String(request.instance_id.clone()),
        );
        credentials.insert(
            "binding_id".to_string(),
            Value::String(request.binding_id.clone()),
        );

        Ok(BindResponse::with_credentials(credentials))
    }
}

#[async_trait]
impl Unbinder for InMemoryBroker {
    #[instrument(
        skip(self, request),
        fields(instance_id = %request.instance_id, binding_id = %request.binding_id)
    )]
    async fn unbind(&self, request: &UnbindRequest) -> Result<(), ApplicationError> {
        let mut state = self.state.write();
        let owned_by_instance = state
            .bindings
            .get(&request.binding_id)
            .is_some_and(|binding| binding.instance_id == request.instance_id);
        if !owned_by_instance {
            return Err(DomainError::binding_not_found(&request.binding_id).into());
        }

        state.bindings.remove(&request.binding_id);
        debug!("Binding removed");
        Ok(())
    }
}

#[async_trait]
impl InstanceDetailsFetcher for InMemoryBroker {
    #[instrument(skip(self))]
    async fn fetch_instance_details(
        &self,
        instance_id: &str,
    ) -> Result<InstanceDetails, ApplicationError> {
        let state = self.state.read();
        let record = state
            .instances
            .get(instance_id)
            .ok_or_else(|| DomainError::instance_not_found(instance_id))?;

        Ok(InstanceDetails {
            service_id: record.service_id.clone(),
            plan_id: record.plan_id.clone(),
            dashboard_url: record.dashboard_url.clone(),
            parameters: record.parameters.clone(),
        })
    }
}
