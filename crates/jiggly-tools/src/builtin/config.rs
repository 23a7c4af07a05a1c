// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use jiggly_core::JigglerController;

use crate::tool::{Tool, ToolCall, ToolOutput};

/// Read-only configuration/state export: current worker state, the fixed
/// parameter bounds and defaults, and platform dependency names.  Pretty
/// JSON, no control semantics.
pub struct JigglypuffConfigTool {
    controller: Arc<JigglerController>,
}

impl JigglypuffConfigTool {
    pub fn new(controller: Arc<JigglerController>) -> Self {
        Self { controller }
    }
}

#[async_trait]
impl Tool for JigglypuffConfigTool {
    fn name(&self) -> &str {
        "jigglypuff_config"
    }

    fn description(&self) -> &str {
        "Get the current jigglypuff configuration and status as JSON: \
         worker state, interval/offset bounds and defaults, and platform \
         dependencies. Read-only."
    }

    fn parameters_schema(&self) -> Value {
        json!({ "type": "object", "properties": {}, "additionalProperties": false })
    }

    async fn execute(&self, call: &ToolCall) -> ToolOutput {
        let snapshot = self.controller.snapshot().await;
        match serde_json::to_string_pretty(&snapshot) {
            Ok(text) => ToolOutput::ok(&call.id, text),
            Err(e) => ToolOutput::err(&call.id, format!("Error serializing config: {e}")),
        }
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
