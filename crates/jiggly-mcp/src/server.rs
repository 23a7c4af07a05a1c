// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
//!
//! [`JigglyMcpServer`] — the rmcp [`ServerHandler`] implementation.
//!
//! This struct wraps a [`ToolRegistry`] and implements the MCP `tools/list`
//! and `tools/call` protocol methods.  All other MCP lifecycle methods
//! (initialize, shutdown, ping) are handled by the default rmcp
//! implementations.
//!
//! The server itself is stateless; the single piece of state — the worker
//! handle — lives in the [`jiggly_core::JigglerController`] the tools
//! share, which serializes concurrent control calls behind its own lock.

use std::sync::Arc;

use jiggly_tools::{ToolCall, ToolRegistry};
use rmcp::{
    handler::server::ServerHandler,
    model::{
        CallToolRequestParams, CallToolResult, ListToolsResult, PaginatedRequestParams,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    ErrorData as McpError,
};
use tracing::debug;
use uuid::Uuid;

use crate::bridge::{output_to_call_result, schema_to_mcp_tool};

/// Jiggly MCP server — wraps a [`ToolRegistry`] and speaks the MCP protocol.
///
/// Create with [`JigglyMcpServer::new`] and then call
/// [`rmcp::ServiceExt::serve`] to start serving on a transport.
#[derive(Clone)]
pub struct JigglyMcpServer {
    registry: Arc<ToolRegistry>,
}

impl JigglyMcpServer {
    /// Create a new server backed by the given [`ToolRegistry`].
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }
}

impl ServerHandler for JigglyMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "jigglypuff keeps the workstation awake while you work. \
                 Call enable_jiggling_before_tasks before starting long \
                 operations and disable_jiggling_after_tasks when done. \
                 See jigglypuff_rules for the full usage rules."
                    .to_string(),
            ),
            ..ServerInfo::default()
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        let registry = self.registry.clone();
        async move {
            let tools = registry
                .schemas()
                .into_iter()
                .map(schema_to_mcp_tool)
                .collect();
            Ok(ListToolsResult {
                tools,
                next_cursor: None,
                meta: None,
            })
        }
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args = request
            .arguments
            .map(|m| serde_json::Value::Object(m.into_iter().collect()))
            .unwrap_or(serde_json::Value::Object(serde_json::Map::new()));

        let call = ToolCall {
            id: Uuid::new_v4().to_string(),
            name: request.name.to_string(),
            args,
        };
        debug!(tool = %call.name, "tools/call");

        let output = self.registry.execute(&call).await;
        Ok(output_to_call_result(output))
    }
}

// ─── Unit tests ───────────────────────────────────────────────────────────────
//
// These tests cover the parts of JigglyMcpServer that can be tested without
// an active transport or RequestContext.  The full list_tools / call_tool
// round-trips are covered by the integration tests in tests/integration.rs.

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_server() -> JigglyMcpServer {
        JigglyMcpServer::new(Arc::new(ToolRegistry::new()))
    }

    #[test]
    fn get_info_enables_tools_capability() {
        let info = empty_server().get_info();
        assert!(
            info.capabilities.tools.is_some(),
            "tools capability must be enabled"
        );
    }

    #[test]
    fn get_info_has_no_resources_capability() {
        let info = empty_server().get_info();
        // jiggly only exposes tools; resources and prompts are not supported.
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn get_info_carries_usage_instructions() {
        let info = empty_server().get_info();
        let instructions = info.instructions.expect("instructions must be set");
        assert!(instructions.contains("enable_jiggling_before_tasks"));
    }

    #[test]
    fn server_is_cloneable() {
        let server = empty_server();
        let _clone = server.clone();
    }
}
