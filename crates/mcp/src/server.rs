// Tool gateway: server-name check, tool dispatch and the static manifest

use crate::error::GatewayError;
use crate::protocol::{
    Manifest, ToolInvocation, SCHEMA_VERSION, SERVER_DESCRIPTION, SERVER_NAME, SERVER_VERSION,
};
use crate::tools::{default_registry, ToolRegistry};
use rootdata_sdk::{RootDataClient, UpstreamResult};
use std::sync::Arc;

pub struct McpServer {
    server_name: String,
    registry: ToolRegistry,
    manifest: Manifest,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        let manifest = Manifest {
            schema_version: SCHEMA_VERSION.to_string(),
            server_name: SERVER_NAME.to_string(),
            server_version: SERVER_VERSION.to_string(),
            description: SERVER_DESCRIPTION.to_string(),
            tools: registry.descriptors(),
        };

        Self {
            server_name: SERVER_NAME.to_string(),
            registry,
            manifest,
        }
    }

    /// Gateway serving the three RootData tools through `client`.
    pub fn with_client(client: Arc<RootDataClient>) -> Self {
        Self::new(default_registry(client))
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Handle one invocation.
    ///
    /// `Err` means the request was rejected locally. Upstream failures come
    /// back as `Ok` with an error payload.
    pub async fn invoke(&self, invocation: ToolInvocation) -> Result<UpstreamResult, GatewayError> {
        if invocation.server_name != self.server_name {
            tracing::warn!(server_name = %invocation.server_name, "Rejected invocation for unknown server");
            return Err(GatewayError::UnknownServer(invocation.server_name));
        }

        let tool = match self.registry.get(&invocation.tool_name) {
            Some(tool) => tool,
            None => {
                tracing::warn!(tool = %invocation.tool_name, "Rejected invocation for unknown tool");
                return Err(GatewayError::UnknownTool(invocation.tool_name));
            }
        };

        tracing::info!(tool = %invocation.tool_name, "Invoking tool");
        let result = tool
            .execute(serde_json::Value::Object(invocation.arguments))
            .await;

        match &result {
            Ok(outcome) if outcome.is_error() => tracing::warn!(
                tool = %invocation.tool_name,
                result = outcome.result_code(),
                "Tool returned upstream error"
            ),
            Err(e) => tracing::warn!(tool = %invocation.tool_name, error = %e, "Invalid tool arguments"),
            Ok(_) => {}
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway_for(upstream: &MockServer) -> McpServer {
        let client = RootDataClient::builder()
            .api_key("test-key")
            .base_url(upstream.uri())
            .build()
            .unwrap();
        McpServer::with_client(Arc::new(client))
    }

    fn ok_body() -> serde_json::Value {
        json!({"data": {"id": 1}, "result": 200})
    }

    #[tokio::test]
    async fn test_search_dispatch() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ser_inv"))
            .and(body_json(json!({"query": "Arbitrum"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
            .expect(1)
            .mount(&upstream)
            .await;

        let result = gateway_for(&upstream)
            .invoke(ToolInvocation::new("search", json!({"query": "Arbitrum"})))
            .await
            .unwrap();
        assert_eq!(result.into_value(), ok_body());
    }

    #[tokio::test]
    async fn test_get_project_dispatch_applies_defaults() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/get_item"))
            .and(body_json(json!({
                "include_team": false,
                "include_investors": false,
                "project_id": 12
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
            .expect(1)
            .mount(&upstream)
            .await;

        let result = gateway_for(&upstream)
            .invoke(ToolInvocation::new("get_project", json!({"project_id": 12})))
            .await
            .unwrap();
        assert_eq!(result.into_value(), ok_body());
    }

    #[tokio::test]
    async fn test_get_organization_dispatch() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/get_org"))
            .and(body_json(json!({
                "org_id": 219,
                "include_team": false,
                "include_investments": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
            .expect(1)
            .mount(&upstream)
            .await;

        let result = gateway_for(&upstream)
            .invoke(ToolInvocation::new(
                "get_organization",
                json!({"org_id": 219, "include_investments": true}),
            ))
            .await
            .unwrap();
        assert_eq!(result.into_value(), ok_body());
    }

    #[tokio::test]
    async fn test_unknown_server_rejected_without_upstream_call() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&upstream)
            .await;

        let mut invocation = ToolInvocation::new("search", json!({"query": "x"}));
        invocation.server_name = "coingecko".to_string();

        let err = gateway_for(&upstream).invoke(invocation).await.unwrap_err();
        assert_eq!(err, GatewayError::UnknownServer("coingecko".to_string()));
        assert_eq!(err.to_string(), "Unknown server name: coingecko");
    }

    #[tokio::test]
    async fn test_unknown_tool_rejected() {
        let upstream = MockServer::start().await;

        let err = gateway_for(&upstream)
            .invoke(ToolInvocation::new("get_people", json!({})))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown tool name: get_people");
    }

    #[tokio::test]
    async fn test_invalid_arguments_never_reach_upstream() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&upstream)
            .await;

        let err = gateway_for(&upstream)
            .invoke(ToolInvocation::new("get_organization", json!({"include_team": true})))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::InvalidArguments { .. }));
    }

    #[tokio::test]
    async fn test_upstream_error_is_returned_as_data() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ser_inv"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&upstream)
            .await;

        let result = gateway_for(&upstream)
            .invoke(ToolInvocation::new("search", json!({"query": "x"})))
            .await
            .unwrap();
        assert_eq!(
            result.into_value(),
            json!({"data": {}, "result": 500, "message": "Error: boom"})
        );
    }

    #[tokio::test]
    async fn test_repeated_invocation_is_idempotent() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/get_item"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
            .expect(2)
            .mount(&upstream)
            .await;

        let gateway = gateway_for(&upstream);
        let invocation = ToolInvocation::new("get_project", json!({"project_id": 5}));

        let first = gateway.invoke(invocation.clone()).await.unwrap();
        let second = gateway.invoke(invocation).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_manifest_lists_three_tools() {
        let upstream = MockServer::start().await;
        let gateway = gateway_for(&upstream);
        let manifest = gateway.manifest();

        assert_eq!(manifest.schema_version, "v1");
        assert_eq!(manifest.server_name, "rootdata");
        assert_eq!(manifest.server_version, "1.0.0");

        let required: Vec<(String, serde_json::Value)> = manifest
            .tools
            .iter()
            .map(|t| (t.name.clone(), t.input_schema["required"].clone()))
            .collect();
        assert_eq!(
            required,
            vec![
                ("search".to_string(), json!(["query"])),
                ("get_project".to_string(), json!(["project_id"])),
                ("get_organization".to_string(), json!(["org_id"])),
            ]
        );
    }
}
