//! Service provider endpoints.

use reqwest::Method;

use super::request::ApiRequest;
use super::response::DetailedResponse;
use super::url_encoding::resolve_path;
use crate::client::OpenScaleClient;
use crate::error::Result;
use crate::models::{
    AddServiceProviderOptions, DeleteServiceProviderOptions, GetServiceProviderOptions,
    ListServiceProvidersOptions, PatchServiceProviderOptions, ServiceProviderResponse,
    ServiceProviderResponseCollection,
};

const SERVICE_PROVIDERS: &str = "/v2/service_providers";
const SERVICE_PROVIDER: &str = "/v2/service_providers/{service_provider_id}";

/// List service providers.
pub async fn list_service_providers(
    client: &OpenScaleClient,
    options: &ListServiceProvidersOptions,
) -> Result<DetailedResponse<ServiceProviderResponseCollection>> {
    options.validate()?;
    let mut query = vec![];
    crate::query_params! { query =>
        "show_deleted" => options.show_deleted,
        "service_type" => options.service_type,
        "instance_id" => options.instance_id,
        "operational_space_id" => options.operational_space_id,
        "deployment_space_id" => options.deployment_space_id,
        "integrated_project_id" => options.integrated_project_id,
    }
    ApiRequest::new(client, Method::GET, "list_service_providers", SERVICE_PROVIDERS.to_string())
        .query(query)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Register a machine learning service provider.
pub async fn add_service_provider(
    client: &OpenScaleClient,
    options: &AddServiceProviderOptions,
) -> Result<DetailedResponse<ServiceProviderResponse>> {
    options.validate()?;
    ApiRequest::new(client, Method::POST, "add_service_provider", SERVICE_PROVIDERS.to_string())
        .headers(options.headers.as_ref())
        .json_body(options)?
        .send_json()
        .await
}

/// Get a service provider by id.
pub async fn get_service_provider(
    client: &OpenScaleClient,
    options: &GetServiceProviderOptions,
) -> Result<DetailedResponse<ServiceProviderResponse>> {
    options.validate()?;
    let path = resolve_path(
        SERVICE_PROVIDER,
        &[("service_provider_id", options.service_provider_id.as_str())],
    )?;
    ApiRequest::new(client, Method::GET, "get_service_provider", path)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Update a service provider with a JSON Patch document.
pub async fn patch_service_provider(
    client: &OpenScaleClient,
    options: &PatchServiceProviderOptions,
) -> Result<DetailedResponse<ServiceProviderResponse>> {
    options.validate()?;
    let path = resolve_path(
        SERVICE_PROVIDER,
        &[("service_provider_id", options.service_provider_id.as_str())],
    )?;
    ApiRequest::new(client, Method::PATCH, "patch_service_provider", path)
        .headers(options.headers.as_ref())
        .json_patch_body(&options.json_patch_operation)?
        .send_json()
        .await
}

/// Delete a service provider.
pub async fn delete_service_provider(
    client: &OpenScaleClient,
    options: &DeleteServiceProviderOptions,
) -> Result<DetailedResponse<()>> {
    options.validate()?;
    let path = resolve_path(
        SERVICE_PROVIDER,
        &[("service_provider_id", options.service_provider_id.as_str())],
    )?;
    let mut query = vec![];
    crate::query_params! { query =>
        "force" => options.force,
    }
    ApiRequest::new(client, Method::DELETE, "delete_service_provider", path)
        .query(query)
        .headers(options.headers.as_ref())
        .send_empty()
        .await
}
