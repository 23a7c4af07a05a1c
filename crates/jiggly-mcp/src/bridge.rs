// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
//!
//! Type conversions between jiggly's tool types and rmcp's MCP model types.
//!
//! These are pure, stateless functions.  The bridge sits at the seam
//! between the [`jiggly_tools`] crate and the MCP wire protocol so neither
//! side needs to know about the other.

use std::sync::Arc;

use jiggly_tools::{ToolOutput, ToolSchema};
use rmcp::model::{CallToolResult, Content, JsonObject, Tool as McpTool};

/// Convert a [`ToolSchema`] into an rmcp [`Tool`] descriptor.
///
/// The JSON Schema stored in [`ToolSchema::parameters`] is already valid
/// JSON Schema produced by each tool's
/// [`jiggly_tools::Tool::parameters_schema`] implementation, so it passes
/// through as the `input_schema` unprocessed.
pub fn schema_to_mcp_tool(schema: ToolSchema) -> McpTool {
    let input_schema: JsonObject = value_to_object(schema.parameters);
    McpTool::new(
        std::borrow::Cow::Owned(schema.name),
        std::borrow::Cow::Owned(schema.description),
        Arc::new(input_schema),
    )
}

/// Build a [`JsonObject`] (serde_json::Map) from a raw JSON Schema value.
///
/// MCP requires the schema to be a JSON object; if the provided value is
/// already an object it is used directly, otherwise it is wrapped in a
/// minimal `{"type":"object"}` envelope.
fn value_to_object(v: serde_json::Value) -> JsonObject {
    use serde_json::{Map, Value};
    match v {
        Value::Object(m) => m,
        other => {
            let mut m = Map::new();
            m.insert("type".to_string(), Value::String("object".to_string()));
            m.insert("value".to_string(), other);
            m
        }
    }
}

/// Convert a jiggly [`ToolOutput`] into an rmcp [`CallToolResult`].
///
/// The plain-text content becomes a single [`Content::text`] item; the MCP
/// `is_error` flag mirrors [`ToolOutput::is_error`].
pub fn output_to_call_result(output: ToolOutput) -> CallToolResult {
    let content = vec![Content::text(output.content)];
    if output.is_error {
        CallToolResult {
            content,
            is_error: Some(true),
            structured_content: None,
            meta: None,
        }
    } else {
        CallToolResult::success(content)
    }
}

// ─── Unit tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn schema(name: &str, params: serde_json::Value) -> ToolSchema {
        ToolSchema {
            name: name.to_string(),
            description: "a test tool".to_string(),
            parameters: params,
        }
    }

    #[test]
    fn object_schema_passes_through() {
        let tool = schema_to_mcp_tool(schema(
            "wake_up_jiggly",
            json!({
                "type": "object",
                "properties": { "interval": { "type": "integer" } }
            }),
        ));
        assert_eq!(tool.name, "wake_up_jiggly");
        assert_eq!(tool.input_schema["type"], "object");
        assert!(tool.input_schema["properties"]["interval"].is_object());
    }

    #[test]
    fn non_object_schema_is_wrapped() {
        let tool = schema_to_mcp_tool(schema("odd", json!("not a schema")));
        assert_eq!(tool.input_schema["type"], "object");
        assert_eq!(tool.input_schema["value"], "not a schema");
    }

    #[test]
    fn ok_output_maps_to_success_result() {
        let result = output_to_call_result(ToolOutput::ok("c1", "jigglypuff is jiggling"));
        assert_ne!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 1);
    }

    #[test]
    fn err_output_sets_is_error() {
        let result = output_to_call_result(ToolOutput::err("c1", "spawn failed"));
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 1);
    }
}
