//! Transport layer for the RootData SDK.

pub mod http;

pub use http::HttpTransport;
