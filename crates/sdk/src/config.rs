//! Configuration types for the RootData SDK.

use crate::error::{RootDataError, RootDataResult};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Base URL of the public RootData open API.
pub const DEFAULT_BASE_URL: &str = "https://api.rootdata.com/open/";

/// Default timeout applied to every upstream call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Response language requested from the upstream API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Cn,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Cn => "cn",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = RootDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "cn" => Ok(Self::Cn),
            other => Err(RootDataError::Config(format!(
                "Unsupported language '{}', expected 'en' or 'cn'",
                other
            ))),
        }
    }
}

/// Configuration for the RootData client.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key sent in the `apikey` header.
    pub api_key: String,
    /// Language sent in the `language` header.
    pub language: Language,
    /// Base URL every endpoint is joined onto. Always ends with `/`.
    pub base_url: Url,
    /// Upper bound for a single upstream call.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration for the public API with the given key.
    pub fn new(api_key: impl Into<String>) -> RootDataResult<Self> {
        Ok(Self {
            api_key: api_key.into(),
            language: Language::default(),
            base_url: normalize_base_url(DEFAULT_BASE_URL)?,
            timeout: DEFAULT_TIMEOUT,
        })
    }
}

/// Parse a base URL, appending a trailing slash so endpoint joins keep the
/// last path segment.
pub fn normalize_base_url(raw: &str) -> RootDataResult<Url> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::new("key").unwrap();

        assert_eq!(config.api_key, "key");
        assert_eq!(config.language, Language::En);
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("CN".parse::<Language>().unwrap(), Language::Cn);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_header_value() {
        assert_eq!(Language::En.to_string(), "en");
        assert_eq!(Language::Cn.as_str(), "cn");
    }

    #[test]
    fn test_normalize_base_url_adds_trailing_slash() {
        let url = normalize_base_url("https://api.rootdata.com/open").unwrap();
        assert_eq!(url.as_str(), "https://api.rootdata.com/open/");
        assert_eq!(
            url.join("ser_inv").unwrap().as_str(),
            "https://api.rootdata.com/open/ser_inv"
        );
    }

    #[test]
    fn test_normalize_base_url_keeps_existing_slash() {
        let url = normalize_base_url("http://127.0.0.1:9000/").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/");
    }

    #[test]
    fn test_normalize_base_url_rejects_garbage() {
        assert!(matches!(
            normalize_base_url("not a url"),
            Err(RootDataError::InvalidUrl(_))
        ));
    }
}
