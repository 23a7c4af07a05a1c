// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use jiggly_core::{JigglerController, DEFAULT_INTERVAL_SECS, DEFAULT_OFFSET_PX};

use crate::builtin::start_message;
use crate::tool::{Tool, ToolCall, ToolOutput};

/// Start the jiggling worker with caller-supplied (clamped) parameters.
pub struct WakeUpJigglyTool {
    controller: Arc<JigglerController>,
}

impl WakeUpJigglyTool {
    pub fn new(controller: Arc<JigglerController>) -> Self {
        Self { controller }
    }
}

#[async_trait]
impl Tool for WakeUpJigglyTool {
    fn name(&self) -> &str {
        "wake_up_jiggly"
    }

    fn description(&self) -> &str {
        "Wake up jigglypuff to start jiggling the cursor. Keeps the \
         workstation awake by moving the pointer every `interval` seconds \
         by `offset` pixels. Out-of-range values are silently clamped \
         (interval 5-300 s, offset 1-10 px). A no-op while a worker is \
         already jiggling."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "interval": {
                    "type": "integer",
                    "description": "Time between jiggles in seconds (default: 30, min: 5, max: 300)"
                },
                "offset": {
                    "type": "integer",
                    "description": "Mouse movement offset in pixels (default: 1, min: 1, max: 10)"
                }
            },
            "additionalProperties": false
        })
    }

    async fn execute(&self, call: &ToolCall) -> ToolOutput {
        let interval = call
            .args
            .get("interval")
            .and_then(Value::as_i64)
            .unwrap_or(DEFAULT_INTERVAL_SECS);
        let offset = call
            .args
            .get("offset")
            .and_then(Value::as_i64)
            .unwrap_or(DEFAULT_OFFSET_PX);
        debug!(interval, offset, "wake_up_jiggly tool");

        match self.controller.start(interval, offset).await {
            Ok(outcome) => ToolOutput::ok(&call.id, start_message(&outcome)),
            Err(e) => ToolOutput::err(&call.id, format!("Error waking up jigglypuff: {e}")),
        }
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::builtin::testutil::{assert_ok, broken_controller, call, script_controller};

    #[tokio::test]
    async fn reports_pid_and_clamped_parameters() {
        let (_dir, controller) = script_controller("sleep 60");
        let tool = WakeUpJigglyTool::new(controller.clone());

        let out = tool
            .execute(&call("wake_up_jiggly", json!({ "interval": 1, "offset": 1 })))
            .await;
        assert_ok(&out);
        assert!(out.content.contains("started jiggling successfully"));
        assert!(out.content.contains("interval=5s"), "below-minimum interval must clamp to 5: {}", out.content);
        assert!(out.content.contains("offset=1px"));

        controller.stop().await.unwrap();
    }

    #[tokio::test]
    async fn missing_arguments_fall_back_to_defaults() {
        let (_dir, controller) = script_controller("sleep 60");
        let tool = WakeUpJigglyTool::new(controller.clone());

        let out = tool.execute(&call("wake_up_jiggly", json!({}))).await;
        assert_ok(&out);
        assert!(out.content.contains("interval=30s"));
        assert!(out.content.contains("offset=1px"));

        controller.stop().await.unwrap();
    }

    #[tokio::test]
    async fn second_call_reports_already_jiggling_with_same_pid() {
        let (_dir, controller) = script_controller("sleep 60");
        let tool = WakeUpJigglyTool::new(controller.clone());

        let first = tool.execute(&call("wake_up_jiggly", json!({}))).await;
        assert_ok(&first);
        let pid: String = first
            .content
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();

        let second = tool.execute(&call("wake_up_jiggly", json!({}))).await;
        assert_ok(&second);
        assert!(second.content.contains("already jiggling"));
        assert!(second.content.contains(&pid), "same pid must be reported");

        controller.stop().await.unwrap();
    }

    #[tokio::test]
    async fn spawn_failure_surfaces_as_tool_error() {
        let tool = WakeUpJigglyTool::new(broken_controller());
        let out = tool.execute(&call("wake_up_jiggly", json!({}))).await;
        assert!(out.is_error);
        assert!(out.content.starts_with("Error waking up jigglypuff:"));
    }
}
