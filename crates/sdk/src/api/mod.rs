//! RootData API endpoints.
//!
//! Each submodule owns one upstream endpoint: its request body type and the
//! client method that posts it.

mod organizations;
mod projects;
mod search;

pub use organizations::{OrganizationLookup, OrganizationRequest, GET_ORG_ENDPOINT};
pub use projects::{
    ProjectLookup, ProjectRequest, ProjectSelector, GET_ITEM_ENDPOINT, MISSING_PROJECT_IDENTIFIER,
};
pub use search::{SearchRequest, SEARCH_ENDPOINT};
