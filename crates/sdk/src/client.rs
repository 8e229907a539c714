//! Main client for the RootData SDK.

use crate::config::{normalize_base_url, ClientConfig, Language, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::error::{RootDataError, RootDataResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;

/// Main client for interacting with the RootData open API.
#[derive(Debug, Clone)]
pub struct RootDataClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl RootDataClient {
    /// Create a new client builder.
    pub fn builder() -> RootDataClientBuilder {
        RootDataClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn new(config: ClientConfig) -> RootDataResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// Builder for creating a RootDataClient.
pub struct RootDataClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    language: Language,
    timeout: Duration,
}

impl RootDataClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            language: Language::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the API key sent with every request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the upstream base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the response language.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> RootDataResult<RootDataClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| RootDataError::Config("api_key is required".to_string()))?;

        let base_url = normalize_base_url(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        let config = ClientConfig {
            api_key,
            language: self.language,
            base_url,
            timeout: self.timeout,
        };

        RootDataClient::new(config)
    }
}

impl Default for RootDataClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let result = RootDataClient::builder().build();
        assert!(matches!(result, Err(RootDataError::Config(_))));
    }

    #[test]
    fn test_builder_defaults() {
        let client = RootDataClient::builder().api_key("key").build().unwrap();

        assert_eq!(client.config().base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(client.config().language, Language::En);
        assert_eq!(client.config().timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_builder_overrides() {
        let client = RootDataClient::builder()
            .api_key("key")
            .base_url("http://localhost:9999/open")
            .language(Language::Cn)
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(client.config().base_url.as_str(), "http://localhost:9999/open/");
        assert_eq!(client.config().language, Language::Cn);
        assert_eq!(client.config().timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_builder_rejects_bad_url() {
        let result = RootDataClient::builder()
            .api_key("key")
            .base_url("::not-a-url::")
            .build();
        assert!(matches!(result, Err(RootDataError::InvalidUrl(_))));
    }
}
