// Gateway-level client errors. None of these ever reach the upstream API.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("Unknown server name: {0}")]
    UnknownServer(String),

    #[error("Unknown tool name: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for tool '{tool}': {reason}")]
    InvalidArguments { tool: String, reason: String },
}

impl GatewayError {
    pub fn invalid_arguments(tool: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            reason: reason.to_string(),
        }
    }
}
