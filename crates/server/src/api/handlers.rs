use super::ApiResult;
use crate::config::AppState;
use axum::{extract::State, Json};
use rootdata_mcp::{Manifest, ToolInvocation};
use rootdata_sdk::UpstreamResult;
use std::sync::Arc;

/// Dispatch one tool invocation.
///
/// Always 200 once dispatched; callers inspect the embedded `result`.
pub async fn handle_mcp_request(
    State(state): State<Arc<AppState>>,
    Json(invocation): Json<ToolInvocation>,
) -> ApiResult<Json<UpstreamResult>> {
    let result = state.mcp.invoke(invocation).await?;
    Ok(Json(result))
}

/// Static tool manifest
pub async fn get_manifest(State(state): State<Arc<AppState>>) -> Json<Manifest> {
    Json(state.mcp.manifest().clone())
}
