//! Request builder shared by every endpoint, with optional retry.
//!
//! # Responsibilities
//! - Assemble method, URL, query, headers and body for one operation.
//! - Apply authentication and the SDK identification headers.
//! - Retry transient failures with capped exponential backoff when the
//!   client has retries enabled.
//! - Map non-2xx responses to [`ClientError::ApiError`] using the service
//!   error body.
//!
//! # Does NOT handle
//! - Path templating (see [`super::url_encoding`]).
//! - Per-operation validation (done by the options structs before a request
//!   is created).
//!
//! # Invariants
//! - Header precedence, lowest to highest: client defaults, per-call
//!   headers, SDK identification headers, `Accept`/`Content-Type`.
//! - Request bodies are serialized once, before the first attempt.

use std::time::{Duration, Instant};

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, RETRY_AFTER, USER_AGENT};
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::response::DetailedResponse;
use crate::client::OpenScaleClient;
use crate::error::{ClientError, Result};
use crate::models::{GenericErrorResponse, Headers, JsonPatchOperation};
use openscale_config::constants::{DEFAULT_SERVICE_NAME, SERVICE_VERSION};

pub(crate) const APPLICATION_JSON: &str = "application/json";
pub(crate) const APPLICATION_JSON_PATCH: &str = "application/json-patch+json";
pub(crate) const APPLICATION_OCTET_STREAM: &str = "application/octet-stream";

const ANALYTICS_HEADER: &str = "x-ibmcloud-sdk-analytics";
const TRANSACTION_ID_HEADER: &str = "x-global-transaction-id";

/// Retry settings used by the transport once retries are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: usize,
    /// Cap on the delay between two attempts.
    pub max_retry_interval: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: usize, max_retry_interval: Duration) -> Self {
        Self {
            max_retries,
            max_retry_interval,
        }
    }

    /// Delay before retry number `attempt + 1`.
    ///
    /// `2^attempt` seconds capped at `max_retry_interval`; a `Retry-After`
    /// hint replaces the exponential delay but is capped the same way.
    pub fn backoff(&self, attempt: usize, retry_after: Option<Duration>) -> Duration {
        let exponential = Duration::from_secs(2u64.saturating_pow(attempt.min(32) as u32));
        retry_after
            .unwrap_or(exponential)
            .min(self.max_retry_interval)
    }
}

impl From<openscale_config::RetryConfig> for RetryPolicy {
    fn from(config: openscale_config::RetryConfig) -> Self {
        Self::new(config.max_retries, config.max_retry_interval)
    }
}

#[derive(Debug, Clone)]
enum RequestBody {
    Json(Vec<u8>),
    JsonPatch(Vec<u8>),
    Binary(Vec<u8>),
    Raw {
        bytes: Vec<u8>,
        content_type: Option<String>,
    },
}

impl RequestBody {
    fn content_type(&self) -> Option<&str> {
        match self {
            Self::Json(_) => Some(APPLICATION_JSON),
            Self::JsonPatch(_) => Some(APPLICATION_JSON_PATCH),
            Self::Binary(_) => Some(APPLICATION_OCTET_STREAM),
            Self::Raw { content_type, .. } => content_type.as_deref(),
        }
    }

    fn bytes(&self) -> &[u8] {
        match self {
            Self::Json(b) | Self::JsonPatch(b) | Self::Binary(b) => b,
            Self::Raw { bytes, .. } => bytes,
        }
    }
}

/// One API request, built up by an endpoint function and then sent.
pub(crate) struct ApiRequest<'a> {
    client: &'a OpenScaleClient,
    method: Method,
    operation_id: &'static str,
    path: String,
    query: Vec<(&'static str, String)>,
    headers: Option<&'a Headers>,
    accept: Option<&'static str>,
    body: Option<RequestBody>,
}

impl<'a> ApiRequest<'a> {
    pub(crate) fn new(
        client: &'a OpenScaleClient,
        method: Method,
        operation_id: &'static str,
        path: String,
    ) -> Self {
        Self {
            client,
            method,
            operation_id,
            path,
            query: Vec::new(),
            headers: None,
            accept: Some(APPLICATION_JSON),
            body: None,
        }
    }

    pub(crate) fn query(mut self, query: Vec<(&'static str, String)>) -> Self {
        self.query = query;
        self
    }

    pub(crate) fn headers(mut self, headers: Option<&'a Headers>) -> Self {
        self.headers = headers;
        self
    }

    pub(crate) fn accept(mut self, accept: Option<&'static str>) -> Self {
        self.accept = accept;
        self
    }

    pub(crate) fn json_body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let bytes = serde_json::to_vec(body).map_err(ClientError::RequestBody)?;
        self.body = Some(RequestBody::Json(bytes));
        Ok(self)
    }

    pub(crate) fn json_patch_body(mut self, operations: &[JsonPatchOperation]) -> Result<Self> {
        let bytes = serde_json::to_vec(operations).map_err(ClientError::RequestBody)?;
        self.body = Some(RequestBody::JsonPatch(bytes));
        Ok(self)
    }

    pub(crate) fn binary_body(mut self, bytes: Vec<u8>) -> Self {
        self.body = Some(RequestBody::Binary(bytes));
        self
    }

    /// Raw body; `Content-Type` is sent only when the caller supplied one.
    pub(crate) fn raw_body(mut self, bytes: Vec<u8>, content_type: Option<String>) -> Self {
        self.body = Some(RequestBody::Raw {
            bytes,
            content_type,
        });
        self
    }

    fn url(&self) -> String {
        format!("{}{}", self.client.service_url, self.path)
    }

    fn header_map(&self) -> Result<HeaderMap> {
        let mut map = HeaderMap::new();

        for (name, value) in &self.client.default_headers {
            insert_header(&mut map, name, value)?;
        }
        if let Some(headers) = self.headers {
            for (name, value) in headers {
                insert_header(&mut map, name, value)?;
            }
        }

        map.insert(USER_AGENT, header_value(&sdk_user_agent())?);
        map.insert(
            HeaderName::from_static(ANALYTICS_HEADER),
            header_value(&format!(
                "service_name={DEFAULT_SERVICE_NAME};service_version={SERVICE_VERSION};operation_id={}",
                self.operation_id
            ))?,
        );

        if let Some(accept) = self.accept {
            map.insert(ACCEPT, HeaderValue::from_static(accept));
        }
        if let Some(content_type) = self.body.as_ref().and_then(RequestBody::content_type) {
            map.insert(CONTENT_TYPE, header_value(content_type)?);
        }

        Ok(map)
    }

    fn build(&self, url: &str, headers: &HeaderMap) -> RequestBuilder {
        let mut builder = self
            .client
            .http
            .request(self.method.clone(), url)
            .headers(headers.clone());
        if !self.query.is_empty() {
            builder = builder.query(&self.query);
        }
        if let Some(body) = &self.body {
            builder = builder.body(body.bytes().to_vec());
        }
        self.client.auth.apply(builder)
    }

    /// Send the request, retrying when enabled, and return a 2xx response.
    async fn execute(&self) -> Result<Response> {
        let url = self.url();
        let headers = self.header_map()?;
        let method = self.method.as_str();
        let metrics = self.client.metrics.as_ref();
        let max_retries = self.client.retry.map_or(0, |policy| policy.max_retries);

        let mut attempt = 0;
        loop {
            debug!(
                operation = self.operation_id,
                method,
                url = %url,
                attempt = attempt + 1,
                "Sending OpenScale request"
            );
            if let Some(m) = metrics {
                m.record_request(self.operation_id, method);
            }

            let started = Instant::now();
            let outcome = match self.build(&url, &headers).send().await {
                Ok(response) if response.status().is_success() => Ok(response),
                Ok(response) => {
                    let retry_after = parse_retry_after(response.headers());
                    Err((api_error(response).await, retry_after))
                }
                Err(e) if e.is_timeout() => Err((ClientError::Timeout(self.client.timeout), None)),
                Err(e) => Err((ClientError::HttpError(e), None)),
            };

            if let Some(m) = metrics {
                let status = match &outcome {
                    Ok(response) => Some(response.status().as_u16()),
                    Err((error, _)) => error.status(),
                };
                m.record_request_duration(self.operation_id, method, started.elapsed(), status);
            }

            let (error, retry_after) = match outcome {
                Ok(response) => {
                    if attempt > 0 {
                        debug!(operation = self.operation_id, attempt = attempt + 1, "Request succeeded after retry");
                    }
                    return Ok(response);
                }
                Err(failure) => failure,
            };

            let Some(policy) = self.client.retry.filter(|_| error.is_retryable()) else {
                return Err(self.fail(error));
            };

            if attempt >= max_retries {
                debug!(
                    operation = self.operation_id,
                    attempts = attempt + 1,
                    "Max retries exhausted"
                );
                return Err(self.fail(ClientError::MaxRetriesExceeded(attempt + 1, Box::new(error))));
            }

            let delay = policy.backoff(attempt, retry_after);
            debug!(
                operation = self.operation_id,
                attempt = attempt + 1,
                max_retries,
                delay_ms = delay.as_millis() as u64,
                error = %error,
                "Retrying OpenScale request"
            );
            if let Some(m) = metrics {
                m.record_retry(self.operation_id, method, attempt + 1);
            }
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    fn fail(&self, error: ClientError) -> ClientError {
        if let Some(m) = &self.client.metrics {
            m.record_client_error(self.operation_id, self.method.as_str(), &error);
        }
        error
    }

    /// Send and decode the JSON body into `T`.
    pub(crate) async fn send_json<T: DeserializeOwned>(self) -> Result<DetailedResponse<T>> {
        let response = self.execute().await?;
        let (status, headers, bytes) = read_body(response).await?;
        let result = self.decode(&bytes)?;
        Ok(DetailedResponse {
            status,
            headers,
            result,
        })
    }

    /// Send and decode the JSON body into `T` when one is present.
    pub(crate) async fn send_optional_json<T: DeserializeOwned>(
        self,
    ) -> Result<DetailedResponse<Option<T>>> {
        let response = self.execute().await?;
        let (status, headers, bytes) = read_body(response).await?;
        let result = if bytes.iter().all(u8::is_ascii_whitespace) {
            None
        } else {
            Some(self.decode(&bytes)?)
        };
        Ok(DetailedResponse {
            status,
            headers,
            result,
        })
    }

    /// Send and discard any response body.
    pub(crate) async fn send_empty(self) -> Result<DetailedResponse<()>> {
        let response = self.execute().await?;
        Ok(DetailedResponse {
            status: response.status().as_u16(),
            headers: response.headers().clone(),
            result: (),
        })
    }

    /// Send and return the raw response bytes.
    pub(crate) async fn send_bytes(self) -> Result<DetailedResponse<Vec<u8>>> {
        let response = self.execute().await?;
        let (status, headers, bytes) = read_body(response).await?;
        Ok(DetailedResponse {
            status,
            headers,
            result: bytes,
        })
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        serde_json::from_slice(bytes).map_err(|e| {
            if let Some(m) = &self.client.metrics {
                m.record_deserialization_failure(self.operation_id, std::any::type_name::<T>());
            }
            self.fail(ClientError::InvalidResponse(format!(
                "failed to decode {} response: {e}",
                self.operation_id
            )))
        })
    }
}

/// `User-Agent` sent with every request.
pub(crate) fn sdk_user_agent() -> String {
    format!("openscale-sdk-rust/{}", env!("CARGO_PKG_VERSION"))
}

fn insert_header(map: &mut HeaderMap, name: &str, value: &str) -> Result<()> {
    let name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| ClientError::Validation(format!("invalid header name: {name}")))?;
    map.insert(name, header_value(value)?);
    Ok(())
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| ClientError::Validation("header value contains invalid characters".to_string()))
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

async fn read_body(response: Response) -> Result<(u16, HeaderMap, Vec<u8>)> {
    let status = response.status().as_u16();
    let headers = response.headers().clone();
    let bytes = response.bytes().await?;
    Ok((status, headers, bytes.to_vec()))
}

/// Build an [`ClientError::ApiError`] from a non-2xx response.
async fn api_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let url = response.url().to_string();
    let header_trace = response
        .headers()
        .get(TRANSACTION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let reason = response.status().canonical_reason().unwrap_or("Unknown status");
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    match serde_json::from_str::<GenericErrorResponse>(&body) {
        Ok(parsed) if !parsed.errors.is_empty() => {
            let first = &parsed.errors[0];
            ClientError::ApiError {
                status,
                url,
                message: first.message.clone(),
                code: Some(first.code.clone()).filter(|c| !c.is_empty()),
                trace: parsed.trace.clone().or(header_trace),
                errors: parsed.errors,
            }
        }
        _ => ClientError::ApiError {
            status,
            url,
            message: if body.trim().is_empty() {
                reason.to_string()
            } else {
                body
            },
            code: None,
            trace: header_trace,
            errors: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_is_exponential_and_capped() {
        let policy = RetryPolicy::new(5, Duration::from_secs(5));
        assert_eq!(policy.backoff(0, None), Duration::from_secs(1));
        assert_eq!(policy.backoff(1, None), Duration::from_secs(2));
        assert_eq!(policy.backoff(2, None), Duration::from_secs(4));
        assert_eq!(policy.backoff(3, None), Duration::from_secs(5));
        assert_eq!(policy.backoff(60, None), Duration::from_secs(5));
    }

    #[test]
    fn test_backoff_honours_retry_after_under_cap() {
        let policy = RetryPolicy::new(3, Duration::from_secs(30));
        assert_eq!(
            policy.backoff(0, Some(Duration::from_secs(7))),
            Duration::from_secs(7)
        );
        assert_eq!(
            policy.backoff(0, Some(Duration::from_secs(120))),
            Duration::from_secs(30)
        );
    }

    #[test]
    fn test_parse_retry_after() {
        let mut headers = HeaderMap::new();
        assert_eq!(parse_retry_after(&headers), None);
        headers.insert(RETRY_AFTER, HeaderValue::from_static("3"));
        assert_eq!(parse_retry_after(&headers), Some(Duration::from_secs(3)));
        headers.insert(RETRY_AFTER, HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"));
        assert_eq!(parse_retry_after(&headers), None);
    }

    #[test]
    fn test_raw_body_content_type_is_optional() {
        let raw = RequestBody::Raw {
            bytes: b"a,b".to_vec(),
            content_type: None,
        };
        assert_eq!(raw.content_type(), None);
        assert_eq!(RequestBody::JsonPatch(vec![]).content_type(), Some(APPLICATION_JSON_PATCH));
    }

    #[test]
    fn test_user_agent_names_sdk() {
        assert!(sdk_user_agent().starts_with("openscale-sdk-rust/"));
    }
}
