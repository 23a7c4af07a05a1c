// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use jiggly_core::{JigglerController, WorkerStatus};

use crate::tool::{Tool, ToolCall, ToolOutput};

/// Report the current worker state.  Observational only — never fails, but
/// it does reap a worker that exited on its own so the exit code shows up
/// without an explicit stop.
pub struct CheckJigglyStatusTool {
    controller: Arc<JigglerController>,
}

impl CheckJigglyStatusTool {
    pub fn new(controller: Arc<JigglerController>) -> Self {
        Self { controller }
    }
}

#[async_trait]
impl Tool for CheckJigglyStatusTool {
    fn name(&self) -> &str {
        "check_jiggly_status"
    }

    fn description(&self) -> &str {
        "Check the current status of jigglypuff: sleeping (no process), \
         jiggling with a PID, or sleeping with the exit code of a worker \
         that stopped on its own."
    }

    fn parameters_schema(&self) -> Value {
        json!({ "type": "object", "properties": {}, "additionalProperties": false })
    }

    async fn execute(&self, call: &ToolCall) -> ToolOutput {
        let msg = match self.controller.status().await {
            WorkerStatus::Sleeping => "jigglypuff is sleeping (no process)".to_string(),
            WorkerStatus::Jiggling { pid } => {
                format!("jigglypuff is jiggling with PID {pid}")
            }
            WorkerStatus::Exited { code: Some(code), .. } => {
                format!("jigglypuff is sleeping (process exited with code {code})")
            }
            WorkerStatus::Exited { code: None, .. } => {
                "jigglypuff is sleeping (process exited)".to_string()
            }
        };
        ToolOutput::ok(&call.id, msg)
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;
    use crate::builtin::testutil::{assert_ok, call, script_controller};

    #[tokio::test]
    async fn reports_sleeping_before_any_start() {
        let (_dir, controller) = script_controller("sleep 60");
        let tool = CheckJigglyStatusTool::new(controller);
        let out = tool.execute(&call("check_jiggly_status", json!({}))).await;
        assert_ok(&out);
        assert_eq!(out.content, "jigglypuff is sleeping (no process)");
    }

    #[tokio::test]
    async fn reports_jiggling_while_the_worker_is_live() {
        let (_dir, controller) = script_controller("sleep 60");
        controller.start(30, 1).await.unwrap();

        let tool = CheckJigglyStatusTool::new(controller.clone());
        let out = tool.execute(&call("check_jiggly_status", json!({}))).await;
        assert_ok(&out);
        assert!(out.content.contains("jiggling with PID"));

        controller.stop().await.unwrap();
    }

    #[tokio::test]
    async fn reports_exit_code_after_worker_crash() {
        let (_dir, controller) = script_controller("exit 3");
        controller.start(30, 1).await.unwrap();
        tokio::time::sleep(Duration::from_millis(200)).await;

        let tool = CheckJigglyStatusTool::new(controller);
        let out = tool.execute(&call("check_jiggly_status", json!({}))).await;
        assert_ok(&out);
        assert_eq!(
            out.content,
            "jigglypuff is sleeping (process exited with code 3)"
        );
    }
}
