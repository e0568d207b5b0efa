//! Subscription endpoints, including schema inference and table creation.

use reqwest::Method;

use super::request::ApiRequest;
use super::response::DetailedResponse;
use super::url_encoding::resolve_path;
use crate::client::OpenScaleClient;
use crate::error::Result;
use crate::models::{
    AddSubscriptionOptions, DataSetResponse, DeleteSubscriptionOptions, GetSubscriptionOptions,
    ListSubscriptionsOptions, PatchSubscriptionOptions, SparkStruct, SubscriptionResponse,
    SubscriptionResponseCollection, SubscriptionsSchemasOptions, SubscriptionsTablesOptions,
};

const SUBSCRIPTIONS: &str = "/v2/subscriptions";
const SUBSCRIPTION: &str = "/v2/subscriptions/{subscription_id}";

/// List subscriptions.
pub async fn list_subscriptions(
    client: &OpenScaleClient,
    options: &ListSubscriptionsOptions,
) -> Result<DetailedResponse<SubscriptionResponseCollection>> {
    options.validate()?;
    let mut query = vec![];
    crate::query_params! { query =>
        "data_mart_id" => options.data_mart_id,
        "service_provider_id" => options.service_provider_id,
        "asset.asset_id" => options.asset_asset_id,
        "asset.asset_type" => options.asset_asset_type,
        "deployment.deployment_id" => options.deployment_deployment_id,
        "deployment.deployment_type" => options.deployment_deployment_type,
        "integration_reference.integrated_system_id" => options.integration_reference_integrated_system_id,
        "integration_reference.external_id" => options.integration_reference_external_id,
        "risk_evaluation_status.state" => options.risk_evaluation_status_state,
        "service_provider.operational_space_id" => options.service_provider_operational_space_id,
        "pre_production_reference_id" => options.pre_production_reference_id,
    }
    ApiRequest::new(client, Method::GET, "list_subscriptions", SUBSCRIPTIONS.to_string())
        .query(query)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Subscribe a deployed asset for monitoring.
pub async fn add_subscription(
    client: &OpenScaleClient,
    options: &AddSubscriptionOptions,
) -> Result<DetailedResponse<SubscriptionResponse>> {
    options.validate()?;
    ApiRequest::new(client, Method::POST, "add_subscription", SUBSCRIPTIONS.to_string())
        .headers(options.headers.as_ref())
        .json_body(options)?
        .send_json()
        .await
}

/// Get a subscription by id.
pub async fn get_subscription(
    client: &OpenScaleClient,
    options: &GetSubscriptionOptions,
) -> Result<DetailedResponse<SubscriptionResponse>> {
    options.validate()?;
    let path = resolve_path(SUBSCRIPTION, &[("subscription_id", options.subscription_id.as_str())])?;
    ApiRequest::new(client, Method::GET, "get_subscription", path)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Update a subscription with a JSON Patch document.
pub async fn patch_subscription(
    client: &OpenScaleClient,
    options: &PatchSubscriptionOptions,
) -> Result<DetailedResponse<SubscriptionResponse>> {
    options.validate()?;
    let path = resolve_path(SUBSCRIPTION, &[("subscription_id", options.subscription_id.as_str())])?;
    ApiRequest::new(client, Method::PATCH, "patch_subscription", path)
        .headers(options.headers.as_ref())
        .json_patch_body(&options.json_patch_operation)?
        .send_json()
        .await
}

/// Delete a subscription.
pub async fn delete_subscription(
    client: &OpenScaleClient,
    options: &DeleteSubscriptionOptions,
) -> Result<DetailedResponse<()>> {
    options.validate()?;
    let path = resolve_path(SUBSCRIPTION, &[("subscription_id", options.subscription_id.as_str())])?;
    let mut query = vec![];
    crate::query_params! { query =>
        "force" => options.force,
    }
    ApiRequest::new(client, Method::DELETE, "delete_subscription", path)
        .query(query)
        .headers(options.headers.as_ref())
        .send_empty()
        .await
}

/// Infer a Spark schema from sample input rows or a training data reference.
pub async fn subscriptions_schemas(
    client: &OpenScaleClient,
    options: &SubscriptionsSchemasOptions,
) -> Result<DetailedResponse<SparkStruct>> {
    options.validate()?;
    let path = resolve_path(
        "/v2/subscriptions/{subscription_id}/schemas",
        &[("subscription_id", options.subscription_id.as_str())],
    )?;
    ApiRequest::new(client, Method::POST, "subscriptions_schemas", path)
        .headers(options.headers.as_ref())
        .json_body(options)?
        .send_json()
        .await
}

/// Create the table backing one of the subscription's data sets.
pub async fn subscriptions_tables(
    client: &OpenScaleClient,
    options: &SubscriptionsTablesOptions,
) -> Result<DetailedResponse<DataSetResponse>> {
    options.validate()?;
    let path = resolve_path(
        "/v2/subscriptions/{subscription_id}/tables",
        &[("subscription_id", options.subscription_id.as_str())],
    )?;
    let mut query = vec![];
    crate::query_params! { query =>
        "dataset_type" => required options.dataset_type,
        "unknown_base_type" => options.unknown_base_type,
        "force" => options.force,
    }
    let request = ApiRequest::new(client, Method::POST, "subscriptions_tables", path)
        .query(query)
        .headers(options.headers.as_ref());
    let request = match &options.schema {
        Some(schema) => request.json_body(schema)?,
        None => request,
    };
    request.send_json().await
}
