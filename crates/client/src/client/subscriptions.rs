//! Subscription methods for [`OpenScaleClient`].

use crate::client::OpenScaleClient;
use crate::endpoints::{self, DetailedResponse};
use crate::error::Result;
use crate::models::{
    AddSubscriptionOptions, DataSetResponse, DeleteSubscriptionOptions, GetSubscriptionOptions,
    ListSubscriptionsOptions, PatchSubscriptionOptions, SparkStruct, SubscriptionResponse,
    SubscriptionResponseCollection, SubscriptionsSchemasOptions, SubscriptionsTablesOptions,
};

impl OpenScaleClient {
    /// List subscriptions.
    pub async fn list_subscriptions(
        &self,
        options: &ListSubscriptionsOptions,
    ) -> Result<DetailedResponse<SubscriptionResponseCollection>> {
        endpoints::list_subscriptions(self, options).await
    }

    /// Subscribe a deployed asset for monitoring.
    pub async fn add_subscription(
        &self,
        options: &AddSubscriptionOptions,
    ) -> Result<DetailedResponse<SubscriptionResponse>> {
        endpoints::add_subscription(self, options).await
    }

    /// Get a subscription by id.
    pub async fn get_subscription(
        &self,
        options: &GetSubscriptionOptions,
    ) -> Result<DetailedResponse<SubscriptionResponse>> {
        endpoints::get_subscription(self, options).await
    }

    /// Update a subscription with a JSON Patch document.
    pub async fn patch_subscription(
        &self,
        options: &PatchSubscriptionOptions,
    ) -> Result<DetailedResponse<SubscriptionResponse>> {
        endpoints::patch_subscription(self, options).await
    }

    /// Delete a subscription.
    pub async fn delete_subscription(
        &self,
        options: &DeleteSubscriptionOptions,
    ) -> Result<DetailedResponse<()>> {
        endpoints::delete_subscription(self, options).await
    }

    /// Infer a Spark schema from sample input rows or a training data reference.
    pub async fn subscriptions_schemas(
        &self,
        options: &SubscriptionsSchemasOptions,
    ) -> Result<DetailedResponse<SparkStruct>> {
        endpoints::subscriptions_schemas(self, options).await
    }

    /// Create the table backing one of the subscription's data sets.
    pub async fn subscriptions_tables(
        &self,
        options: &SubscriptionsTablesOptions,
    ) -> Result<DetailedResponse<DataSetResponse>> {
        endpoints::subscriptions_tables(self, options).await
    }
}
