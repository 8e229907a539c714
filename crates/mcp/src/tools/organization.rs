// VC / organization details lookup

use crate::error::GatewayError;
use crate::protocol::ToolDescriptor;
use crate::tools::{
    json_schema_boolean, json_schema_integer, json_schema_object, parse_arguments, Tool,
};
use rootdata_sdk::{OrganizationLookup, RootDataClient, UpstreamResult};
use serde::Deserialize;
use std::sync::Arc;

pub const GET_ORGANIZATION_TOOL: &str = "get_organization";

pub struct GetOrganizationTool {
    client: Arc<RootDataClient>,
}

impl GetOrganizationTool {
    pub fn new(client: Arc<RootDataClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct GetOrganizationArgs {
    org_id: i64,
    #[serde(default)]
    include_team: bool,
    #[serde(default)]
    include_investments: bool,
}

#[async_trait::async_trait]
impl Tool for GetOrganizationTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: GET_ORGANIZATION_TOOL.to_string(),
            description: "Obtain VC details according to VC ID".to_string(),
            input_schema: json_schema_object(
                "GetOrganizationArguments",
                serde_json::json!({
                    "org_id": json_schema_integer("Organization ID", "Organization ID"),
                    "include_team": json_schema_boolean(
                        "Include Team",
                        "Whether to include team information",
                        false
                    ),
                    "include_investments": json_schema_boolean(
                        "Include Investments",
                        "Whether to include investment information",
                        false
                    )
                }),
                vec!["org_id"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<UpstreamResult, GatewayError> {
        let args: GetOrganizationArgs = parse_arguments(GET_ORGANIZATION_TOOL, arguments)?;

        let lookup = OrganizationLookup::new(args.org_id)
            .include_team(args.include_team)
            .include_investments(args.include_investments);

        Ok(self.client.get_organization(lookup).await)
    }
}
