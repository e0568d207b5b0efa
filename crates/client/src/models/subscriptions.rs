//! Subscription models and request options.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{JsonPatchOperation, Resource, SparkStruct, Status};
use super::credentials::ScoringEndpointCredentials;
use super::options::{Headers, option_setters, require, require_items};
use super::training_data::TrainingDataReference;
use crate::error::Result;

/// Deployed model (or function) being monitored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub asset_id: String,
    pub asset_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_rn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_data_type: Option<String>,
}

impl Asset {
    pub fn new(asset_id: impl Into<String>, asset_type: impl Into<String>) -> Self {
        Self {
            asset_id: asset_id.into(),
            asset_type: asset_type.into(),
            url: None,
            name: None,
            asset_rn: None,
            created_at: None,
            problem_type: None,
            model_type: None,
            runtime_environment: None,
            input_data_type: None,
        }
    }
}

/// Scoring endpoint OpenScale calls to reach a deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringEndpoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<ScoringEndpointCredentials>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_headers: Option<Map<String, Value>>,
}

/// Deployment of the monitored asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDeployment {
    pub deployment_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_rn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring_endpoint: Option<ScoringEndpoint>,
}

impl AssetDeployment {
    pub fn new(deployment_id: impl Into<String>) -> Self {
        Self {
            deployment_id: deployment_id.into(),
            deployment_rn: None,
            url: None,
            name: None,
            description: None,
            deployment_type: None,
            created_at: None,
            scoring_endpoint: None,
        }
    }
}

/// Model properties needed by the monitors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AssetProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_data_reference: Option<TrainingDataReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_data_schema: Option<SparkStruct>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_data_schema: Option<SparkStruct>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_data_schema: Option<SparkStruct>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_target_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability_fields: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_fields: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categorical_fields: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_configuration: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionResponseEntity {
    pub data_mart_id: String,
    pub service_provider_id: String,
    pub asset: Asset,
    pub deployment: AssetDeployment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_properties: Option<AssetProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_evaluation_status: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_engine: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_sources: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_reference: Option<Value>,
    #[serde(default)]
    pub status: Status,
}

pub type SubscriptionResponse = Resource<SubscriptionResponseEntity>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionResponseCollection {
    pub subscriptions: Vec<SubscriptionResponse>,
}

/// Options for `list_subscriptions`.
#[derive(Debug, Clone, Default)]
pub struct ListSubscriptionsOptions {
    pub data_mart_id: Option<String>,
    pub service_provider_id: Option<String>,
    pub asset_asset_id: Option<String>,
    pub asset_asset_type: Option<String>,
    pub deployment_deployment_id: Option<String>,
    pub deployment_deployment_type: Option<String>,
    pub integration_reference_integrated_system_id: Option<String>,
    pub integration_reference_external_id: Option<String>,
    pub risk_evaluation_status_state: Option<String>,
    pub service_provider_operational_space_id: Option<String>,
    pub pre_production_reference_id: Option<String>,
    pub headers: Option<Headers>,
}

impl ListSubscriptionsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

option_setters!(ListSubscriptionsOptions {
    data_mart_id: String,
    service_provider_id: String,
    asset_asset_id: String,
    asset_asset_type: String,
    deployment_deployment_id: String,
    deployment_deployment_type: String,
    integration_reference_integrated_system_id: String,
    integration_reference_external_id: String,
    risk_evaluation_status_state: String,
    service_provider_operational_space_id: String,
    pre_production_reference_id: String,
});

/// Options for `add_subscription`; the serialized form is the request body.
#[derive(Debug, Clone, Serialize)]
pub struct AddSubscriptionOptions {
    pub data_mart_id: String,
    pub service_provider_id: String,
    pub asset: Asset,
    pub deployment: AssetDeployment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_properties: Option<AssetProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_evaluation_status: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_engine: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_sources: Option<Vec<Value>>,
    #[serde(skip)]
    pub headers: Option<Headers>,
}

impl AddSubscriptionOptions {
    pub fn new(
        data_mart_id: impl Into<String>,
        service_provider_id: impl Into<String>,
        asset: Asset,
        deployment: AssetDeployment,
    ) -> Self {
        Self {
            data_mart_id: data_mart_id.into(),
            service_provider_id: service_provider_id.into(),
            asset,
            deployment,
            asset_properties: None,
            risk_evaluation_status: None,
            analytics_engine: None,
            data_sources: None,
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("data_mart_id", &self.data_mart_id)?;
        require("service_provider_id", &self.service_provider_id)?;
        require("asset.asset_id", &self.asset.asset_id)?;
        require("deployment.deployment_id", &self.deployment.deployment_id)
    }
}

option_setters!(AddSubscriptionOptions {
    asset_properties: AssetProperties,
    risk_evaluation_status: Value,
    analytics_engine: Value,
    data_sources: Vec<Value>,
});

/// Options for `get_subscription`.
#[derive(Debug, Clone, Default)]
pub struct GetSubscriptionOptions {
    pub subscription_id: String,
    pub headers: Option<Headers>,
}

impl GetSubscriptionOptions {
    pub fn new(subscription_id: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("subscription_id", &self.subscription_id)
    }
}

option_setters!(GetSubscriptionOptions {});

/// Options for `patch_subscription`.
#[derive(Debug, Clone, Default)]
pub struct PatchSubscriptionOptions {
    pub subscription_id: String,
    pub json_patch_operation: Vec<JsonPatchOperation>,
    pub headers: Option<Headers>,
}

impl PatchSubscriptionOptions {
    pub fn new(
        subscription_id: impl Into<String>,
        json_patch_operation: Vec<JsonPatchOperation>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            json_patch_operation,
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("subscription_id", &self.subscription_id)?;
        require_items("json_patch_operation", &self.json_patch_operation)
    }
}

option_setters!(PatchSubscriptionOptions {});

/// Options for `delete_subscription`.
#[derive(Debug, Clone, Default)]
pub struct DeleteSubscriptionOptions {
    pub subscription_id: String,
    pub force: Option<bool>,
    pub headers: Option<Headers>,
}

impl DeleteSubscriptionOptions {
    pub fn new(subscription_id: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("subscription_id", &self.subscription_id)
    }
}

option_setters!(DeleteSubscriptionOptions { force: bool });

/// Options for `subscriptions_schemas`: infer a schema from sample scoring
/// input or from the training data.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SubscriptionsSchemasOptions {
    #[serde(skip)]
    pub subscription_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data: Option<Vec<Map<String, Value>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_data_reference: Option<TrainingDataReference>,
    #[serde(skip)]
    pub headers: Option<Headers>,
}

impl SubscriptionsSchemasOptions {
    pub fn new(subscription_id: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("subscription_id", &self.subscription_id)
    }
}

option_setters!(SubscriptionsSchemasOptions {
    input_data: Vec<Map<String, Value>>,
    training_data_reference: TrainingDataReference,
});

/// Options for `subscriptions_tables`: create a data set table for a subscription.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionsTablesOptions {
    pub subscription_id: String,
    pub dataset_type: String,
    pub unknown_base_type: Option<bool>,
    pub force: Option<bool>,
    /// Table schema; omitted to let the service derive it.
    pub schema: Option<SparkStruct>,
    pub headers: Option<Headers>,
}

impl SubscriptionsTablesOptions {
    pub fn new(subscription_id: impl Into<String>, dataset_type: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            dataset_type: dataset_type.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("subscription_id", &self.subscription_id)?;
        require("dataset_type", &self.dataset_type)
    }
}

option_setters!(SubscriptionsTablesOptions {
    unknown_base_type: bool,
    force: bool,
    schema: SparkStruct,
});
