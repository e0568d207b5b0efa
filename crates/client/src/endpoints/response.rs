//! Typed result of an API call together with response metadata.

use reqwest::header::{HeaderMap, LOCATION};

/// Decoded result plus the HTTP status and headers it arrived with.
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    pub status: u16,
    pub headers: HeaderMap,
    pub result: T,
}

impl<T> DetailedResponse<T> {
    /// Header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The `Location` header; set by asynchronous operations such as `records_add`.
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).and_then(|v| v.to_str().ok())
    }

    /// Drop the metadata and keep the decoded result.
    pub fn into_result(self) -> T {
        self.result
    }
}
