// Tool trait and the registry the gateway dispatches through

use crate::error::GatewayError;
use crate::protocol::ToolDescriptor;
use crate::tools::{GetOrganizationTool, GetProjectTool, SearchTool};
use rootdata_sdk::{RootDataClient, UpstreamResult};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool descriptor for the manifest
    fn descriptor(&self) -> ToolDescriptor;

    /// Validate arguments and run the upstream call.
    ///
    /// `Err` only for argument violations; upstream failures are data.
    async fn execute(&self, arguments: serde_json::Value) -> Result<UpstreamResult, GatewayError>;
}

/// Tool registry, kept in registration order so the manifest is stable
pub struct ToolRegistry {
    tools: Vec<(String, Arc<dyn Tool>)>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.descriptor().name;
        match self.tools.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = tool,
            None => self.tools.push((name, tool)),
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, tool)| tool.clone())
    }

    /// List all tool descriptors
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools.iter().map(|(_, t)| t.descriptor()).collect()
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.tools.iter().any(|(existing, _)| existing == name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry with the three RootData tools in manifest order.
pub fn default_registry(client: Arc<RootDataClient>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(SearchTool::new(client.clone())));
    registry.register(Arc::new(GetProjectTool::new(client.clone())));
    registry.register(Arc::new(GetOrganizationTool::new(client)));
    registry
}

/// Decode tool arguments into their typed shape.
pub fn parse_arguments<T: DeserializeOwned>(
    tool: &str,
    arguments: serde_json::Value,
) -> Result<T, GatewayError> {
    serde_json::from_value(arguments).map_err(|e| GatewayError::invalid_arguments(tool, e))
}

// Helper functions for creating tool schemas

pub fn json_schema_object(
    title: &str,
    properties: serde_json::Value,
    required: Vec<&str>,
) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(title: &str, description: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": description,
        "type": "string"
    })
}

pub fn json_schema_integer(title: &str, description: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": description,
        "type": "integer"
    })
}

pub fn json_schema_boolean(title: &str, description: &str, default: bool) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": description,
        "type": "boolean",
        "default": default
    })
}
