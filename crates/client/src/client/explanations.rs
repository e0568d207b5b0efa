//! Explanation task methods for [`OpenScaleClient`].

use crate::client::OpenScaleClient;
use crate::endpoints::{self, DetailedResponse};
use crate::error::Result;
use crate::models::{
    AddExplanationTasksOptions, GetExplanationTaskOptions, GetExplanationTaskResponse,
    GetExplanationTasksResponse, ListExplanationTasksOptions, PostExplanationTaskResponse,
};

impl OpenScaleClient {
    /// Request explanations for scored transactions.
    pub async fn add_explanation_tasks(
        &self,
        options: &AddExplanationTasksOptions,
    ) -> Result<DetailedResponse<PostExplanationTaskResponse>> {
        endpoints::add_explanation_tasks(self, options).await
    }

    /// List explanation tasks of a subscription.
    pub async fn list_explanation_tasks(
        &self,
        options: &ListExplanationTasksOptions,
    ) -> Result<DetailedResponse<GetExplanationTasksResponse>> {
        endpoints::list_explanation_tasks(self, options).await
    }

    /// Get one explanation task with its explanations.
    pub async fn get_explanation_task(
        &self,
        options: &GetExplanationTaskOptions,
    ) -> Result<DetailedResponse<GetExplanationTaskResponse>> {
        endpoints::get_explanation_task(self, options).await
    }
}
