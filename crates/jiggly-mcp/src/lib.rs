// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
//!
//! `jiggly-mcp` — MCP (Model Context Protocol) server for jiggly.
//!
//! Exposes the jigglypuff control tools to any MCP-compatible host (Cursor,
//! Claude Desktop, etc.) over **stdio** transport using line-delimited
//! JSON-RPC.
//!
//! # Quick start
//!
//! ```text
//! jiggly mcp serve
//! ```
//!
//! # MCP client configuration (`mcp.json`)
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "jigglypuff": {
//!       "command": "jiggly",
//!       "args": ["mcp", "serve"]
//!     }
//!   }
//! }
//! ```
//!
//! ## Custom tool subset
//!
//! ```text
//! jiggly mcp serve --tools wake_up_jiggly,put_jiggly_to_sleep
//! ```
//!
//! # Architecture
//!
//! ```text
//! MCP client (Cursor, Claude Desktop, …)
//!       │  stdin/stdout (line-delimited JSON-RPC)
//!       ▼
//! JigglyMcpServer (rmcp ServerHandler)
//!       │
//!       ▼
//! ToolRegistry  ──►  Tool::execute()  ──►  JigglerController
//! ```

pub mod bridge;
pub mod registry;
pub mod server;

pub use registry::{build_mcp_registry, DEFAULT_TOOL_NAMES};
pub use server::JigglyMcpServer;

use std::sync::Arc;

use anyhow::Result;
use jiggly_tools::ToolRegistry;
use rmcp::ServiceExt;

/// Start an MCP stdio server, serving the tools in `registry` on
/// `stdin` / `stdout`.
///
/// This function blocks until the client disconnects (stdin EOF) or the
/// process is terminated.  It is designed to be called as the sole
/// operation of the `jiggly mcp serve` subcommand.  Log output must go to
/// stderr — stdout carries the protocol.
///
/// # Errors
///
/// Returns an error if the rmcp transport fails to initialize or if the
/// server encounters a fatal I/O error.
pub async fn serve_stdio(registry: Arc<ToolRegistry>) -> Result<()> {
    let server = JigglyMcpServer::new(registry);
    let running = server
        .serve((tokio::io::stdin(), tokio::io::stdout()))
        .await
        .map_err(|e| anyhow::anyhow!("MCP server init error: {e}"))?;
    running
        .waiting()
        .await
        .map_err(|e| anyhow::anyhow!("MCP server error: {e}"))?;
    Ok(())
}
