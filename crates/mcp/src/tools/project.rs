// Project details lookup

use crate::error::GatewayError;
use crate::protocol::ToolDescriptor;
use crate::tools::{
    json_schema_boolean, json_schema_integer, json_schema_object, parse_arguments, Tool,
};
use rootdata_sdk::{ProjectLookup, RootDataClient, UpstreamResult};
use serde::Deserialize;
use std::sync::Arc;

pub const GET_PROJECT_TOOL: &str = "get_project";

pub struct GetProjectTool {
    client: Arc<RootDataClient>,
}

impl GetProjectTool {
    pub fn new(client: Arc<RootDataClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct GetProjectArgs {
    project_id: i64,
    #[serde(default)]
    include_team: bool,
    #[serde(default)]
    include_investors: bool,
}

#[async_trait::async_trait]
impl Tool for GetProjectTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: GET_PROJECT_TOOL.to_string(),
            description: "Obtain project details according to the project ID".to_string(),
            input_schema: json_schema_object(
                "GetProjectArguments",
                serde_json::json!({
                    "project_id": json_schema_integer("Project ID", "Project ID"),
                    "include_team": json_schema_boolean(
                        "Include Team",
                        "Whether to include team information",
                        false
                    ),
                    "include_investors": json_schema_boolean(
                        "Include Investors",
                        "Whether to include investor information",
                        false
                    )
                }),
                vec!["project_id"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<UpstreamResult, GatewayError> {
        let args: GetProjectArgs = parse_arguments(GET_PROJECT_TOOL, arguments)?;

        let lookup = ProjectLookup::by_id(args.project_id)
            .include_team(args.include_team)
            .include_investors(args.include_investors);

        Ok(self.client.get_project(lookup).await)
    }
}
