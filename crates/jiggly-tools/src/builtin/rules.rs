// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//!
//! Parameter-free aliases giving automation agents a stable begin/end
//! vocabulary for protected work sessions, plus the static rules document
//! that names them.  The aliases carry no state or validation of their
//! own — enable is `start` with defaults, disable is `stop`.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;

use jiggly_core::JigglerController;

use crate::builtin::{start_message, stop_message};
use crate::tool::{Tool, ToolCall, ToolOutput};

/// `start` with the default parameters (30 s interval, 1 px offset).
pub struct EnableJigglingBeforeTasksTool {
    controller: Arc<JigglerController>,
}

impl EnableJigglingBeforeTasksTool {
    pub fn new(controller: Arc<JigglerController>) -> Self {
        Self { controller }
    }
}

#[async_trait]
impl Tool for EnableJigglingBeforeTasksTool {
    fn name(&self) -> &str {
        "enable_jiggling_before_tasks"
    }

    fn description(&self) -> &str {
        "Enable jiggling before beginning a task. Equivalent to \
         wake_up_jiggly with the default 30 s interval and 1 px offset."
    }

    fn parameters_schema(&self) -> Value {
        json!({ "type": "object", "properties": {}, "additionalProperties": false })
    }

    async fn execute(&self, call: &ToolCall) -> ToolOutput {
        info!("enabling jiggling before task");
        match self.controller.enable().await {
            Ok(outcome) => ToolOutput::ok(&call.id, start_message(&outcome)),
            Err(e) => ToolOutput::err(&call.id, format!("Error waking up jigglypuff: {e}")),
        }
    }
}

/// `stop`, under a task-completion name.
pub struct DisableJigglingAfterTasksTool {
    controller: Arc<JigglerController>,
}

impl DisableJigglingAfterTasksTool {
    pub fn new(controller: Arc<JigglerController>) -> Self {
        Self { controller }
    }
}

#[async_trait]
impl Tool for DisableJigglingAfterTasksTool {
    fn name(&self) -> &str {
        "disable_jiggling_after_tasks"
    }

    fn description(&self) -> &str {
        "Disable jiggling when the task is complete. Equivalent to \
         put_jiggly_to_sleep."
    }

    fn parameters_schema(&self) -> Value {
        json!({ "type": "object", "properties": {}, "additionalProperties": false })
    }

    async fn execute(&self, call: &ToolCall) -> ToolOutput {
        info!("disabling jiggling after task");
        match self.controller.disable().await {
            Ok(outcome) => ToolOutput::ok(&call.id, stop_message(&outcome)),
            Err(e) => ToolOutput::err(&call.id, format!("Error putting jigglypuff to sleep: {e}")),
        }
    }
}

/// Read-only usage rules and best practices for agents driving
/// jigglypuff.  Static JSON: the payload never depends on worker state,
/// so the tool holds no controller.
pub struct JigglypuffRulesTool;

impl JigglypuffRulesTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JigglypuffRulesTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for JigglypuffRulesTool {
    fn name(&self) -> &str {
        "jigglypuff_rules"
    }

    fn description(&self) -> &str {
        "Get the jigglypuff usage rules and best practices as JSON. \
         Read-only."
    }

    fn parameters_schema(&self) -> Value {
        json!({ "type": "object", "properties": {}, "additionalProperties": false })
    }

    async fn execute(&self, call: &ToolCall) -> ToolOutput {
        let rules = json!({
            "primary_rules": [
                "ALWAYS use jigglypuff MCP to enable jiggling before beginning tasks",
                "ALWAYS disable jiggling when task complete",
            ],
            "secondary_rules": [
                "Check jiggly status before starting new tasks",
                "Use appropriate interval settings for task duration",
            ],
            "best_practices": [
                "Start with default settings (30s interval, 1px offset)",
                "Monitor system performance with custom intervals",
                "Use rule-compliant tools for automated workflows",
                "Check status regularly during long-running tasks",
            ],
            "compliance_tools": [
                "enable_jiggling_before_tasks()",
                "disable_jiggling_after_tasks()",
            ],
        });
        match serde_json::to_string_pretty(&rules) {
            Ok(text) => ToolOutput::ok(&call.id, text),
            Err(e) => ToolOutput::err(&call.id, format!("Error serializing rules: {e}")),
        }
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
