pub mod organization;
pub mod project;
pub mod search;
mod registry;

pub use organization::GetOrganizationTool;
pub use project::GetProjectTool;
pub use search::SearchTool;
pub use registry::{
    default_registry, json_schema_boolean, json_schema_integer, json_schema_object,
    json_schema_string, parse_arguments, Tool, ToolRegistry,
};
