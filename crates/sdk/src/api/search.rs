//! Search endpoint (`ser_inv`).

use crate::client::RootDataClient;
use crate::result::UpstreamResult;
use serde::Serialize;

pub const SEARCH_ENDPOINT: &str = "ser_inv";

/// Body of a search request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
}

impl RootDataClient {
    /// Search for brief Project/VC/People information by keyword.
    pub async fn search(&self, query: &str) -> UpstreamResult {
        self.http.post(SEARCH_ENDPOINT, &SearchRequest { query }).await
    }
}
