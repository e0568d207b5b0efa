//! Data set record methods for [`OpenScaleClient`].

use crate::client::OpenScaleClient;
use crate::endpoints::{self, DetailedResponse};
use crate::error::Result;
use crate::models::{
    DataRecordResponse, DataSetRecords, GetRecordOptions, GetRecordsRequestOptions,
    RecordsAddOptions, RecordsListOptions, RecordsListResponse, RecordsPatchOptions,
    RecordsQueryOptions, Status, UpdateRecordOptions,
};

impl OpenScaleClient {
    /// Add records to a data set.
    ///
    /// Synchronous uploads return no body; asynchronous ones return a
    /// [`Status`] and a `Location` header pointing at the request to poll.
    pub async fn records_add(
        &self,
        options: &RecordsAddOptions,
    ) -> Result<DetailedResponse<Option<Status>>> {
        endpoints::records_add(self, options).await
    }

    /// List records of a data set.
    pub async fn records_list(
        &self,
        options: &RecordsListOptions,
    ) -> Result<DetailedResponse<RecordsListResponse>> {
        endpoints::records_list(self, options).await
    }

    /// Patch several records of a data set in one call.
    pub async fn records_patch(
        &self,
        options: &RecordsPatchOptions,
    ) -> Result<DetailedResponse<Option<Status>>> {
        endpoints::records_patch(self, options).await
    }

    /// Get one record.
    pub async fn get_record(
        &self,
        options: &GetRecordOptions,
    ) -> Result<DetailedResponse<DataRecordResponse>> {
        endpoints::get_record(self, options).await
    }

    /// Update one record with a JSON Patch document.
    pub async fn update_record(
        &self,
        options: &UpdateRecordOptions,
    ) -> Result<DetailedResponse<DataRecordResponse>> {
        endpoints::update_record(self, options).await
    }

    /// Look up records by id across the data sets of one type.
    pub async fn records_query(
        &self,
        options: &RecordsQueryOptions,
    ) -> Result<DetailedResponse<DataSetRecords>> {
        endpoints::records_query(self, options).await
    }

    /// Status of an asynchronous `records_add` request.
    pub async fn get_records_request(
        &self,
        options: &GetRecordsRequestOptions,
    ) -> Result<DetailedResponse<Status>> {
        endpoints::get_records_request(self, options).await
    }
}
