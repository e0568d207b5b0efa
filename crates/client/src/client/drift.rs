//! Drift archive methods for [`OpenScaleClient`].

use crate::client::OpenScaleClient;
use crate::endpoints::{self, DetailedResponse};
use crate::error::Result;
use crate::models::{DriftArchiveOptions, UploadDriftArchiveOptions};

impl OpenScaleClient {
    /// Check the drift archive with HEAD; only the response headers are returned.
    pub async fn head_drift_archive(
        &self,
        options: &DriftArchiveOptions,
    ) -> Result<DetailedResponse<()>> {
        endpoints::head_drift_archive(self, options).await
    }

    /// Download the drift archive bytes.
    pub async fn download_drift_archive(
        &self,
        options: &DriftArchiveOptions,
    ) -> Result<DetailedResponse<Vec<u8>>> {
        endpoints::download_drift_archive(self, options).await
    }

    /// Upload a drift archive trained outside OpenScale.
    pub async fn upload_drift_archive(
        &self,
        options: &UploadDriftArchiveOptions,
    ) -> Result<DetailedResponse<()>> {
        endpoints::upload_drift_archive(self, options).await
    }
}
