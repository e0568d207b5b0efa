//! Data set methods for [`OpenScaleClient`].

use crate::client::OpenScaleClient;
use crate::endpoints::{self, DetailedResponse};
use crate::error::Result;
use crate::models::{
    AddDataSetOptions, DataSetResponse, DataSetResponseCollection, DeleteDataSetOptions,
    GetDataSetOptions, ListDataSetsOptions, PatchDataSetOptions,
};

impl OpenScaleClient {
    /// List data sets.
    pub async fn list_data_sets(
        &self,
        options: &ListDataSetsOptions,
    ) -> Result<DetailedResponse<DataSetResponseCollection>> {
        endpoints::list_data_sets(self, options).await
    }

    /// Create a data set.
    pub async fn add_data_set(
        &self,
        options: &AddDataSetOptions,
    ) -> Result<DetailedResponse<DataSetResponse>> {
        endpoints::add_data_set(self, options).await
    }

    /// Get a data set by id.
    pub async fn get_data_set(
        &self,
        options: &GetDataSetOptions,
    ) -> Result<DetailedResponse<DataSetResponse>> {
        endpoints::get_data_set(self, options).await
    }

    /// Update a data set with a JSON Patch document.
    pub async fn patch_data_set(
        &self,
        options: &PatchDataSetOptions,
    ) -> Result<DetailedResponse<DataSetResponse>> {
        endpoints::patch_data_set(self, options).await
    }

    /// Delete a data set.
    pub async fn delete_data_set(
        &self,
        options: &DeleteDataSetOptions,
    ) -> Result<DetailedResponse<()>> {
        endpoints::delete_data_set(self, options).await
    }
}
