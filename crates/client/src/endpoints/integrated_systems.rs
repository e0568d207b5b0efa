//! Integrated system endpoints.

use reqwest::Method;

use super::request::ApiRequest;
use super::response::DetailedResponse;
use super::url_encoding::resolve_path;
use crate::client::OpenScaleClient;
use crate::error::Result;
use crate::models::{
    AddIntegratedSystemOptions, DeleteIntegratedSystemOptions, GetIntegratedSystemOptions,
    IntegratedSystemCollection, IntegratedSystemResponse, ListIntegratedSystemsOptions,
    PatchIntegratedSystemOptions,
};

const INTEGRATED_SYSTEMS: &str = "/v2/integrated_systems";
const INTEGRATED_SYSTEM: &str = "/v2/integrated_systems/{integrated_system_id}";

/// List integrated systems.
pub async fn list_integrated_systems(
    client: &OpenScaleClient,
    options: &ListIntegratedSystemsOptions,
) -> Result<DetailedResponse<IntegratedSystemCollection>> {
    options.validate()?;
    let mut query = vec![];
    crate::query_params! { query =>
        "type" => options.system_type,
    }
    ApiRequest::new(client, Method::GET, "list_integrated_systems", INTEGRATED_SYSTEMS.to_string())
        .query(query)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Create an integrated system.
pub async fn add_integrated_system(
    client: &OpenScaleClient,
    options: &AddIntegratedSystemOptions,
) -> Result<DetailedResponse<IntegratedSystemResponse>> {
    options.validate()?;
    ApiRequest::new(client, Method::POST, "add_integrated_system", INTEGRATED_SYSTEMS.to_string())
        .headers(options.headers.as_ref())
        .json_body(options)?
        .send_json()
        .await
}

/// Get an integrated system by id.
pub async fn get_integrated_system(
    client: &OpenScaleClient,
    options: &GetIntegratedSystemOptions,
) -> Result<DetailedResponse<IntegratedSystemResponse>> {
    options.validate()?;
    let path = resolve_path(
        INTEGRATED_SYSTEM,
        &[("integrated_system_id", options.integrated_system_id.as_str())],
    )?;
    ApiRequest::new(client, Method::GET, "get_integrated_system", path)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Update an integrated system with a JSON Patch document.
pub async fn patch_integrated_system(
    client: &OpenScaleClient,
    options: &PatchIntegratedSystemOptions,
) -> Result<DetailedResponse<IntegratedSystemResponse>> {
    options.validate()?;
    let path = resolve_path(
        INTEGRATED_SYSTEM,
        &[("integrated_system_id", options.integrated_system_id.as_str())],
    )?;
    ApiRequest::new(client, Method::PATCH, "patch_integrated_system", path)
        .headers(options.headers.as_ref())
        .json_patch_body(&options.json_patch_operation)?
        .send_json()
        .await
}

/// Delete an integrated system.
pub async fn delete_integrated_system(
    client: &OpenScaleClient,
    options: &DeleteIntegratedSystemOptions,
) -> Result<DetailedResponse<()>> {
    options.validate()?;
    let path = resolve_path(
        INTEGRATED_SYSTEM,
        &[("integrated_system_id", options.integrated_system_id.as_str())],
    )?;
    ApiRequest::new(client, Method::DELETE, "delete_integrated_system", path)
        .headers(options.headers.as_ref())
        .send_empty()
        .await
}
