//! Explanation task endpoints.

use reqwest::Method;

use super::request::ApiRequest;
use super::response::DetailedResponse;
use super::url_encoding::resolve_path;
use crate::client::OpenScaleClient;
use crate::error::Result;
use crate::models::{
    AddExplanationTasksOptions, GetExplanationTaskOptions, GetExplanationTaskResponse,
    GetExplanationTasksResponse, ListExplanationTasksOptions, PostExplanationTaskResponse,
};

const EXPLANATION_TASKS: &str = "/v2/explanation_tasks";

/// Request explanations for scored transactions.
pub async fn add_explanation_tasks(
    client: &OpenScaleClient,
    options: &AddExplanationTasksOptions,
) -> Result<DetailedResponse<PostExplanationTaskResponse>> {
    options.validate()?;
    let path = EXPLANATION_TASKS.to_string();
    ApiRequest::new(client, Method::POST, "add_explanation_tasks", path)
        .headers(options.headers.as_ref())
        .json_body(options)?
        .send_json()
        .await
}

/// List explanation tasks of a subscription.
pub async fn list_explanation_tasks(
    client: &OpenScaleClient,
    options: &ListExplanationTasksOptions,
) -> Result<DetailedResponse<GetExplanationTasksResponse>> {
    options.validate()?;
    let mut query = vec![];
    crate::query_params! { query =>
        "subscription_id" => required options.subscription_id,
        "offset" => options.offset,
        "limit" => options.limit,
        "scoring_id" => options.scoring_id,
        "status" => options.status,
    }
    let path = EXPLANATION_TASKS.to_string();
    ApiRequest::new(client, Method::GET, "list_explanation_tasks", path)
        .query(query)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Get one explanation task with its explanations.
pub async fn get_explanation_task(
    client: &OpenScaleClient,
    options: &GetExplanationTaskOptions,
) -> Result<DetailedResponse<GetExplanationTaskResponse>> {
    options.validate()?;
    let path = resolve_path(
        "/v2/explanation_tasks/{explanation_task_id}",
        &[("explanation_task_id", options.explanation_task_id.as_str())],
    )?;
    let mut query = vec![];
    crate::query_params! { query =>
        "subscription_id" => options.subscription_id,
    }
    ApiRequest::new(client, Method::GET, "get_explanation_task", path)
        .query(query)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}
