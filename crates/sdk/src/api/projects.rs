//! Project details endpoint (`get_item`).

use crate::client::RootDataClient;
use crate::result::{UpstreamResult, LOCAL_REJECTION_STATUS};
use serde::Serialize;
use tracing::debug;

pub const GET_ITEM_ENDPOINT: &str = "get_item";

pub const MISSING_PROJECT_IDENTIFIER: &str =
    "Either project_id or contract_address must be provided";

/// Which project to look up, and what to include.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectLookup {
    pub project_id: Option<i64>,
    pub contract_address: Option<String>,
    pub include_team: bool,
    pub include_investors: bool,
}

impl ProjectLookup {
    pub fn by_id(project_id: i64) -> Self {
        Self {
            project_id: Some(project_id),
            ..Default::default()
        }
    }

    pub fn by_contract_address(address: impl Into<String>) -> Self {
        Self {
            contract_address: Some(address.into()),
            ..Default::default()
        }
    }

    pub fn include_team(mut self, include: bool) -> Self {
        self.include_team = include;
        self
    }

    pub fn include_investors(mut self, include: bool) -> Self {
        self.include_investors = include;
        self
    }

    /// Build the request body. `None` when no identifier was given.
    ///
    /// `project_id` wins when both identifiers are set.
    pub fn to_request(&self) -> Option<ProjectRequest> {
        let selector = match (self.project_id, &self.contract_address) {
            (Some(id), _) => ProjectSelector::ProjectId(id),
            (None, Some(address)) => ProjectSelector::ContractAddress(address.clone()),
            (None, None) => return None,
        };

        Some(ProjectRequest {
            include_team: self.include_team,
            include_investors: self.include_investors,
            selector,
        })
    }
}

/// Body of a project details request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRequest {
    pub include_team: bool,
    pub include_investors: bool,
    #[serde(flatten)]
    pub selector: ProjectSelector,
}

/// The single identifying field of a project request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectSelector {
    ProjectId(i64),
    ContractAddress(String),
}

impl RootDataClient {
    /// Obtain project details by project ID or contract address.
    pub async fn get_project(&self, lookup: ProjectLookup) -> UpstreamResult {
        match lookup.to_request() {
            Some(request) => self.http.post(GET_ITEM_ENDPOINT, &request).await,
            None => {
                debug!("Project lookup without identifier rejected locally");
                UpstreamResult::error(LOCAL_REJECTION_STATUS, MISSING_PROJECT_IDENTIFIER)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::client_for;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_request_by_id() {
        let request = ProjectLookup::by_id(7).include_team(true).to_request().unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"include_team": true, "include_investors": false, "project_id": 7})
        );
    }

    #[test]
    fn test_request_by_contract_address() {
        let request = ProjectLookup::by_contract_address("0xabc")
            .include_investors(true)
            .to_request()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"include_team": false, "include_investors": true, "contract_address": "0xabc"})
        );
    }

    // Observed behavior, kept as-is pending confirmation from the API owner:
    // project_id silently wins over contract_address.
    #[test]
    fn test_project_id_takes_precedence_over_contract_address() {
        let lookup = ProjectLookup {
            project_id: Some(3),
            contract_address: Some("0xdef".to_string()),
            ..Default::default()
        };

        let body = serde_json::to_value(lookup.to_request().unwrap()).unwrap();
        assert_eq!(body["project_id"], 3);
        assert!(body.get("contract_address").is_none());
    }

    #[test]
    fn test_request_without_identifier() {
        assert!(ProjectLookup::default().to_request().is_none());
    }

    #[tokio::test]
    async fn test_get_project_posts_to_get_item() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/get_item"))
            .and(body_json(json!({
                "include_team": false,
                "include_investors": true,
                "project_id": 11
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"project_id": 11, "project_name": "Ethereum"},
                "result": 200
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .get_project(ProjectLookup::by_id(11).include_investors(true))
            .await;
        assert_eq!(result.into_value()["data"]["project_name"], "Ethereum");
    }

    #[tokio::test]
    async fn test_get_project_without_identifier_skips_upstream() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .get_project(ProjectLookup::default().include_team(true))
            .await;
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"data": {}, "result": 400, "message": MISSING_PROJECT_IDENTIFIER})
        );
    }
}
