// Keyword search over projects, VCs and people

use crate::error::GatewayError;
use crate::protocol::ToolDescriptor;
use crate::tools::{json_schema_object, json_schema_string, parse_arguments, Tool};
use rootdata_sdk::{RootDataClient, UpstreamResult};
use serde::Deserialize;
use std::sync::Arc;

pub const SEARCH_TOOL: &str = "search";

pub struct SearchTool {
    client: Arc<RootDataClient>,
}

impl SearchTool {
    pub fn new(client: Arc<RootDataClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct SearchArgs {
    query: String,
}

#[async_trait::async_trait]
impl Tool for SearchTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: SEARCH_TOOL.to_string(),
            description: "Search for Project/VC/People brief information according to keywords"
                .to_string(),
            input_schema: json_schema_object(
                "SearchArguments",
                serde_json::json!({
                    "query": json_schema_string("Query", "Search keywords")
                }),
                vec!["query"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<UpstreamResult, GatewayError> {
        let args: SearchArgs = parse_arguments(SEARCH_TOOL, arguments)?;

        if args.query.is_empty() {
            return Err(GatewayError::invalid_arguments(
                SEARCH_TOOL,
                "query must not be empty",
            ));
        }

        Ok(self.client.search(&args.query).await)
    }
}
