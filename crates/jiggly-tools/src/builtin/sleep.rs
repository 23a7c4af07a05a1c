// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use jiggly_core::JigglerController;

use crate::builtin::stop_message;
use crate::tool::{Tool, ToolCall, ToolOutput};

/// Stop the jiggling worker, escalating to a forced kill if it ignores the
/// graceful termination request.
pub struct PutJigglyToSleepTool {
    controller: Arc<JigglerController>,
}

impl PutJigglyToSleepTool {
    pub fn new(controller: Arc<JigglerController>) -> Self {
        Self { controller }
    }
}

#[async_trait]
impl Tool for PutJigglyToSleepTool {
    fn name(&self) -> &str {
        "put_jiggly_to_sleep"
    }

    fn description(&self) -> &str {
        "Put jigglypuff to sleep to stop jiggling the cursor. Graceful \
         termination first; an unresponsive worker is force-killed after a \
         bounded wait and the result says so. Idempotent when nothing is \
         jiggling."
    }

    fn parameters_schema(&self) -> Value {
        json!({ "type": "object", "properties": {}, "additionalProperties": false })
    }

    async fn execute(&self, call: &ToolCall) -> ToolOutput {
        match self.controller.stop().await {
            Ok(outcome) => ToolOutput::ok(&call.id, stop_message(&outcome)),
            Err(e) => ToolOutput::err(&call.id, format!("Error putting jigglypuff to sleep: {e}")),
        }
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::builtin::testutil::{assert_ok, call, script_controller};

    #[tokio::test]
    async fn reports_already_sleeping_without_a_worker() {
        let (_dir, controller) = script_controller("sleep 60");
        let tool = PutJigglyToSleepTool::new(controller);

        let out = tool.execute(&call("put_jiggly_to_sleep", json!({}))).await;
        assert_ok(&out);
        assert_eq!(out.content, "jigglypuff is already sleeping");

        // Still a clean no-op the second time.
        let again = tool.execute(&call("put_jiggly_to_sleep", json!({}))).await;
        assert_ok(&again);
        assert_eq!(again.content, "jigglypuff is already sleeping");
    }

    #[tokio::test]
    async fn graceful_stop_names_the_pid() {
        let (_dir, controller) = script_controller("sleep 60");
        controller.start(30, 1).await.unwrap();

        let tool = PutJigglyToSleepTool::new(controller);
        let out = tool.execute(&call("put_jiggly_to_sleep", json!({}))).await;
        assert_ok(&out);
        assert!(out.content.contains("put to sleep successfully"));
        assert!(out.content.contains("PID"));
    }

    #[tokio::test]
    async fn unresponsive_worker_is_reported_as_forced() {
        let (_dir, controller) =
            script_controller("trap '' TERM\nwhile true; do sleep 1; done");
        controller.start(30, 1).await.unwrap();

        let tool = PutJigglyToSleepTool::new(controller);
        let out = tool.execute(&call("put_jiggly_to_sleep", json!({}))).await;
        assert_ok(&out);
        assert!(
            out.content.contains("force put to sleep"),
            "forced termination must be observable: {}",
            out.content
        );
    }
}
