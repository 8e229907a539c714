//! Error types for the RootData SDK.
//!
//! Only client construction can fail. Once built, every API call reports
//! failures as an [`UpstreamResult`](crate::UpstreamResult) payload.

/// Result type for SDK operations.
pub type RootDataResult<T> = Result<T, RootDataError>;

/// Error types that can occur when building a RootData client.
#[derive(Debug, thiserror::Error)]
pub enum RootDataError {
    /// HTTP client could not be created.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
