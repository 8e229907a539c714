// Tool invocation protocol types (JSON over HTTP)

use serde::{Deserialize, Serialize};

/// Server identifier callers must address.
pub const SERVER_NAME: &str = "rootdata";
pub const SERVER_VERSION: &str = "1.0.0";
pub const SCHEMA_VERSION: &str = "v1";
pub const SERVER_DESCRIPTION: &str = "RootData API integration for MCP";

/// One inbound tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
    pub server_name: String,
    pub tool_name: String,
    #[serde(default)]
    pub arguments: serde_json::Map<String, serde_json::Value>,
}

impl ToolInvocation {
    pub fn new(tool_name: impl Into<String>, arguments: serde_json::Value) -> Self {
        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        Self {
            server_name: SERVER_NAME.to_string(),
            tool_name: tool_name.into(),
            arguments,
        }
    }
}

/// Tool definition as listed in the manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// Discovery document served at `/manifest.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub schema_version: String,
    pub server_name: String,
    pub server_version: String,
    pub description: String,
    pub tools: Vec<ToolDescriptor>,
}
