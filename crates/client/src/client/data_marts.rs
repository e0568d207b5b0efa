//! Data mart methods for [`OpenScaleClient`].

use crate::client::OpenScaleClient;
use crate::endpoints::{self, DetailedResponse};
use crate::error::Result;
use crate::models::{
    AddDataMartOptions, DataMartDatabaseResponse, DataMartDatabaseResponseCollection,
    DeleteDataMartOptions, GetDataMartOptions, ListDataMartsOptions, PatchDataMartOptions,
};

impl OpenScaleClient {
    /// List data marts.
    pub async fn list_data_marts(
        &self,
        options: &ListDataMartsOptions,
    ) -> Result<DetailedResponse<DataMartDatabaseResponseCollection>> {
        endpoints::list_data_marts(self, options).await
    }

    /// Create a data mart.
    pub async fn add_data_mart(
        &self,
        options: &AddDataMartOptions,
    ) -> Result<DetailedResponse<DataMartDatabaseResponse>> {
        endpoints::add_data_mart(self, options).await
    }

    /// Get a data mart by id.
    pub async fn get_data_mart(
        &self,
        options: &GetDataMartOptions,
    ) -> Result<DetailedResponse<DataMartDatabaseResponse>> {
        endpoints::get_data_mart(self, options).await
    }

    /// Update a data mart with a JSON Patch document.
    pub async fn patch_data_mart(
        &self,
        options: &PatchDataMartOptions,
    ) -> Result<DetailedResponse<DataMartDatabaseResponse>> {
        endpoints::patch_data_mart(self, options).await
    }

    /// Delete a data mart.
    pub async fn delete_data_mart(
        &self,
        options: &DeleteDataMartOptions,
    ) -> Result<DetailedResponse<()>> {
        endpoints::delete_data_mart(self, options).await
    }
}
