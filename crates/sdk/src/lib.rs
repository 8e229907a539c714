//! # RootData SDK
//!
//! Async client for the RootData open API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rootdata_sdk::{ProjectLookup, RootDataClient, RootDataResult};
//!
//! #[tokio::main]
//! async fn main() -> RootDataResult<()> {
//!     let client = RootDataClient::builder()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let hits = client.search("ETH").await;
//!     println!("{}", serde_json::to_string_pretty(&hits).unwrap());
//!
//!     let project = client.get_project(ProjectLookup::by_id(12).include_team(true)).await;
//!     if project.is_error() {
//!         eprintln!("lookup failed with {}", project.result_code());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! API calls never return `Err`. Upstream failures come back as an
//! [`UpstreamResult::Error`] payload shaped `{data: {}, result, message}`.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod result;
pub mod transport;

pub use api::{OrganizationLookup, ProjectLookup};
pub use client::{RootDataClient, RootDataClientBuilder};
pub use config::{ClientConfig, Language};
pub use error::{RootDataError, RootDataResult};
pub use result::{ErrorPayload, UpstreamResult};
