//! Drift archive request options.
//!
//! Drift archives are opaque binary blobs produced by offline drift model
//! training; they are uploaded and downloaded as `application/octet-stream`.

use super::options::{Headers, option_setters, require};
use crate::error::Result;

/// Options for `head_drift_archive` and `download_drift_archive`.
#[derive(Debug, Clone, Default)]
pub struct DriftArchiveOptions {
    pub monitor_instance_id: String,
    pub headers: Option<Headers>,
}

impl DriftArchiveOptions {
    pub fn new(monitor_instance_id: impl Into<String>) -> Self {
        Self {
            monitor_instance_id: monitor_instance_id.into(),
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("monitor_instance_id", &self.monitor_instance_id)
    }
}

option_setters!(DriftArchiveOptions {});

pub type HeadDriftArchiveOptions = DriftArchiveOptions;
pub type DownloadDriftArchiveOptions = DriftArchiveOptions;

/// Options for `upload_drift_archive`.
#[derive(Debug, Clone, Default)]
pub struct UploadDriftArchiveOptions {
    pub monitor_instance_id: String,
    pub body: Vec<u8>,
    pub archive_name: Option<String>,
    pub enable_data_drift: Option<bool>,
    pub enable_model_drift: Option<bool>,
    pub headers: Option<Headers>,
}

impl UploadDriftArchiveOptions {
    pub fn new(monitor_instance_id: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            monitor_instance_id: monitor_instance_id.into(),
            body: body.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("monitor_instance_id", &self.monitor_instance_id)?;
        if self.body.is_empty() {
            return require("body", "");
        }
        Ok(())
    }
}

option_setters!(UploadDriftArchiveOptions {
    archive_name: String,
    enable_data_drift: bool,
    enable_model_drift: bool,
});
