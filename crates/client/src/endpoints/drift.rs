//! Drift archive endpoints.
//!
//! Archives are transferred as `application/octet-stream`; responses are
//! never JSON-decoded.

use reqwest::Method;

use super::request::{APPLICATION_OCTET_STREAM, ApiRequest};
use super::response::DetailedResponse;
use super::url_encoding::resolve_path;
use crate::client::OpenScaleClient;
use crate::error::Result;
use crate::models::{DriftArchiveOptions, UploadDriftArchiveOptions};

const DRIFT_ARCHIVE: &str =
    "/v2/monitoring_services/drift/monitor_instances/{monitor_instance_id}/archive";

/// Check the drift archive with HEAD; only the response headers are returned.
pub async fn head_drift_archive(
    client: &OpenScaleClient,
    options: &DriftArchiveOptions,
) -> Result<DetailedResponse<()>> {
    options.validate()?;
    let path = resolve_path(
        DRIFT_ARCHIVE,
        &[("monitor_instance_id", options.monitor_instance_id.as_str())],
    )?;
    ApiRequest::new(client, Method::HEAD, "head_drift_archive", path)
        .accept(None)
        .headers(options.headers.as_ref())
        .send_empty()
        .await
}

/// Download the drift archive bytes.
pub async fn download_drift_archive(
    client: &OpenScaleClient,
    options: &DriftArchiveOptions,
) -> Result<DetailedResponse<Vec<u8>>> {
    options.validate()?;
    let path = resolve_path(
        DRIFT_ARCHIVE,
        &[("monitor_instance_id", options.monitor_instance_id.as_str())],
    )?;
    ApiRequest::new(client, Method::GET, "download_drift_archive", path)
        .accept(Some(APPLICATION_OCTET_STREAM))
        .headers(options.headers.as_ref())
        .send_bytes()
        .await
}

/// Upload a drift archive trained outside OpenScale.
pub async fn upload_drift_archive(
    client: &OpenScaleClient,
    options: &UploadDriftArchiveOptions,
) -> Result<DetailedResponse<()>> {
    options.validate()?;
    let path = resolve_path(
        DRIFT_ARCHIVE,
        &[("monitor_instance_id", options.monitor_instance_id.as_str())],
    )?;
    let mut query = vec![];
    crate::query_params! { query =>
        "archive_name" => options.archive_name,
        "enable_data_drift" => options.enable_data_drift,
        "enable_model_drift" => options.enable_model_drift,
    }
    ApiRequest::new(client, Method::POST, "upload_drift_archive", path)
        .query(query)
        .headers(options.headers.as_ref())
        .binary_body(options.body.clone())
        .send_empty()
        .await
}
