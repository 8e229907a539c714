//! HTTP transport layer for the RootData SDK.

use crate::config::ClientConfig;
use crate::error::{RootDataError, RootDataResult};
use crate::result::{UpstreamResult, BAD_GATEWAY_STATUS, GATEWAY_TIMEOUT_STATUS};
use reqwest::{header, Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// HTTP transport for making API requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> RootDataResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(RootDataError::Config("API key must not be empty".to_string()));
        }

        let mut headers = header::HeaderMap::new();

        let mut api_key = header::HeaderValue::from_str(&config.api_key)
            .map_err(|_| RootDataError::Config("Invalid API key format".to_string()))?;
        api_key.set_sensitive(true);
        headers.insert(header::HeaderName::from_static("apikey"), api_key);

        headers.insert(
            header::HeaderName::from_static("language"),
            header::HeaderValue::from_static(config.language.as_str()),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a URL for the given endpoint.
    fn build_url(&self, endpoint: &str) -> RootDataResult<url::Url> {
        self.config
            .base_url
            .join(endpoint)
            .map_err(RootDataError::InvalidUrl)
    }

    /// POST a JSON body to an endpoint.
    ///
    /// Never fails: a 200 yields the parsed body, anything else yields an
    /// error payload carrying the status.
    pub async fn post<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> UpstreamResult {
        let url = match self.build_url(endpoint) {
            Ok(url) => url,
            Err(e) => return UpstreamResult::error(BAD_GATEWAY_STATUS, format!("Error: {}", e)),
        };
        debug!(url = %url, endpoint, "POST request");

        let response = match self.client.post(url).json(body).send().await {
            Ok(response) => response,
            Err(e) => return transport_failure(endpoint, e),
        };

        let status = response.status();
        if status == StatusCode::OK {
            return match response.json::<Value>().await {
                Ok(body) => UpstreamResult::Body(body),
                Err(e) => transport_failure(endpoint, e),
            };
        }

        let text = response.text().await.unwrap_or_default();
        warn!(endpoint, status = status.as_u16(), "Upstream returned non-200 status");
        UpstreamResult::upstream_error(status.as_u16(), &text)
    }
}

fn transport_failure(endpoint: &str, err: reqwest::Error) -> UpstreamResult {
    let status = if err.is_timeout() {
        GATEWAY_TIMEOUT_STATUS
    } else {
        BAD_GATEWAY_STATUS
    };
    warn!(endpoint, status, error = %err, "Upstream request failed");
    UpstreamResult::error(status, format!("Error: {}", err))
}
