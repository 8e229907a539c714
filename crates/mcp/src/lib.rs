// Tool gateway for the RootData open API.
// Validates tool invocations and forwards them to the upstream client.

pub mod error;
pub mod protocol;
pub mod server;
pub mod tools;

pub use error::GatewayError;
pub use protocol::{Manifest, ToolDescriptor, ToolInvocation};
pub use server::McpServer;
