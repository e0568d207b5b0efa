//! Business application endpoints.

use reqwest::Method;

use super::request::ApiRequest;
use super::response::DetailedResponse;
use super::url_encoding::resolve_path;
use crate::client::OpenScaleClient;
use crate::error::Result;
use crate::models::{
    AddBusinessApplicationOptions, BusinessApplicationResponse, BusinessApplicationsCollection,
    DeleteBusinessApplicationOptions, GetBusinessApplicationOptions,
    ListBusinessApplicationsOptions, PatchBusinessApplicationOptions,
};

const BUSINESS_APPLICATIONS: &str = "/v2/business_applications";
const BUSINESS_APPLICATION: &str = "/v2/business_applications/{application_id}";

/// List business applications.
pub async fn list_business_applications(
    client: &OpenScaleClient,
    options: &ListBusinessApplicationsOptions,
) -> Result<DetailedResponse<BusinessApplicationsCollection>> {
    options.validate()?;
    let url_path = BUSINESS_APPLICATIONS.to_string();
    ApiRequest::new(client, Method::GET, "list_business_applications", url_path)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Create a business application.
pub async fn add_business_application(
    client: &OpenScaleClient,
    options: &AddBusinessApplicationOptions,
) -> Result<DetailedResponse<BusinessApplicationResponse>> {
    options.validate()?;
    let url_path = BUSINESS_APPLICATIONS.to_string();
    ApiRequest::new(client, Method::POST, "add_business_application", url_path)
        .headers(options.headers.as_ref())
        .json_body(options)?
        .send_json()
        .await
}

/// Get a business application by id.
pub async fn get_business_application(
    client: &OpenScaleClient,
    options: &GetBusinessApplicationOptions,
) -> Result<DetailedResponse<BusinessApplicationResponse>> {
    options.validate()?;
    let path = resolve_path(
        BUSINESS_APPLICATION,
        &[("application_id", options.application_id.as_str())],
    )?;
    ApiRequest::new(client, Method::GET, "get_business_application", path)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Update a business application with a JSON Patch document.
pub async fn patch_business_application(
    client: &OpenScaleClient,
    options: &PatchBusinessApplicationOptions,
) -> Result<DetailedResponse<BusinessApplicationResponse>> {
    options.validate()?;
    let path = resolve_path(
        BUSINESS_APPLICATION,
        &[("application_id", options.application_id.as_str())],
    )?;
    ApiRequest::new(client, Method::PATCH, "patch_business_application", path)
        .headers(options.headers.as_ref())
        .json_patch_body(&options.json_patch_operation)?
        .send_json()
        .await
}

/// Delete a business application.
pub async fn delete_business_application(
    client: &OpenScaleClient,
    options: &DeleteBusinessApplicationOptions,
) -> Result<DetailedResponse<()>> {
    options.validate()?;
    let path = resolve_path(
        BUSINESS_APPLICATION,
        &[("application_id", options.application_id.as_str())],
    )?;
    ApiRequest::new(client, Method::DELETE, "delete_business_application", path)
        .headers(options.headers.as_ref())
        .send_empty()
        .await
}
