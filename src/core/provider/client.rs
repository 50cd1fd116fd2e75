//! HTTP client for the provider's query endpoint.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::FetchError;
use crate::core::config::ProviderConfig;

/// Query parameter carrying the provider API key.
pub const API_KEY_PARAM: &str = "apikey";

/// Query parameter selecting the provider operation.
pub const FUNCTION_PARAM: &str = "function";

/// A single outbound request to the provider.
///
/// Built per call by the dispatch gateway and dropped once the response has
/// been classified.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderRequest {
    /// Query endpoint (without query string).
    pub endpoint: String,

    /// Ordered query pairs, including `function` and `apikey`.
    pub query: Vec<(String, String)>,
}

impl ProviderRequest {
    /// Start a request for the given provider function.
    pub fn new(endpoint: impl Into<String>, function: &str) -> Self {
        Self {
            endpoint: endpoint.into(),
            query: vec![(FUNCTION_PARAM.to_string(), function.to_string())],
        }
    }

    /// Append a query parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Look up a query parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Full URL with the query string encoded.
    pub fn url(&self) -> Result<String, FetchError> {
        let query = serde_urlencoded::to_string(&self.query)
            .map_err(|e| FetchError::request(format!("Failed to encode query: {e}")))?;

        let endpoint = self.endpoint.trim_end_matches(['?', '&']);
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        Ok(format!("{}{}{}", endpoint, separator, query))
    }
}

/// Custom Debug implementation to redact the API key from logs.
impl std::fmt::Debug for ProviderRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let query: Vec<(&str, &str)> = self
            .query
            .iter()
            .map(|(k, v)| {
                if k == API_KEY_PARAM {
                    (k.as_str(), "[REDACTED]")
                } else {
                    (k.as_str(), v.as_str())
                }
            })
            .collect();

        f.debug_struct("ProviderRequest")
            .field("endpoint", &self.endpoint)
            .field("query", &query)
            .finish()
    }
}

/// A parsed provider answer.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    /// HTTP status code (always 2xx; other statuses are a [`FetchError`]).
    pub status: u16,

    /// JSON-parsed body.
    pub body: serde_json::Value,
}

/// Executes provider requests.
///
/// The gateway only depends on this trait, so tests can substitute an
/// in-process provider.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// Perform one request. No retries.
    async fn fetch(&self, request: &ProviderRequest) -> Result<ProviderResponse, FetchError>;
}

/// [`ProviderClient`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpProviderClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpProviderClient {
    /// Create a client honoring the configured timeout.
    pub fn new(config: &ProviderConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| FetchError::request(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    /// Map a reqwest failure, dropping the URL: it carries the API key.
    fn map_send_error(&self, e: reqwest::Error) -> FetchError {
        let e = e.without_url();
        if e.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else if e.is_connect() {
            FetchError::Connect(error_chain(&e))
        } else if e.is_decode() {
            FetchError::Decode(error_chain(&e))
        } else {
            FetchError::Request(error_chain(&e))
        }
    }
}

/// `error: source: source...`, so the root cause survives without the URL.
fn error_chain(e: &(dyn std::error::Error + 'static)) -> String {
    let mut text = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

#[async_trait]
impl ProviderClient for HttpProviderClient {
    #[instrument(skip(self), fields(function = request.param(FUNCTION_PARAM)))]
    async fn fetch(&self, request: &ProviderRequest) -> Result<ProviderResponse, FetchError> {
        let url = request.url()?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        debug!("Provider responded {}", status);

        if !status.is_success() {
            warn!("Provider returned non-success status {}", status);
            let text = response.text().await.map_err(|e| self.map_send_error(e))?;
            return Err(FetchError::status(status.as_u16(), &text));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| self.map_send_error(e))?;

        Ok(ProviderResponse {
            status: status.as_u16(),
            body,
        })
    }
}
