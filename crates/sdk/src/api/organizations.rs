//! Organization (VC) details endpoint (`get_org`).

use crate::client::RootDataClient;
use crate::result::UpstreamResult;
use serde::Serialize;

pub const GET_ORG_ENDPOINT: &str = "get_org";

/// Which organization to look up, and what to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrganizationLookup {
    pub org_id: i64,
    pub include_team: bool,
    pub include_investments: bool,
}

impl OrganizationLookup {
    pub fn new(org_id: i64) -> Self {
        Self {
            org_id,
            include_team: false,
            include_investments: false,
        }
    }

    pub fn include_team(mut self, include: bool) -> Self {
        self.include_team = include;
        self
    }

    pub fn include_investments(mut self, include: bool) -> Self {
        self.include_investments = include;
        self
    }

    pub fn to_request(&self) -> OrganizationRequest {
        OrganizationRequest {
            org_id: self.org_id,
            include_team: self.include_team,
            include_investments: self.include_investments,
        }
    }
}

/// Body of an organization details request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationRequest {
    pub org_id: i64,
    pub include_team: bool,
    pub include_investments: bool,
}

impl RootDataClient {
    /// Obtain VC details by organization ID.
    pub async fn get_organization(&self, lookup: OrganizationLookup) -> UpstreamResult {
        self.http.post(GET_ORG_ENDPOINT, &lookup.to_request()).await
    }
}
