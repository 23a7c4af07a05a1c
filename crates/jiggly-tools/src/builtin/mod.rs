// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//!
//! The built-in control tools.  Each one wraps the shared
//! [`jiggly_core::JigglerController`] and renders its outcome as the exact
//! status phrases callers script against ("jigglypuff is already
//! jiggling...", "put to sleep successfully", ...).

mod config;
mod rules;
mod sleep;
mod status;
mod wake;

pub use config::JigglypuffConfigTool;
pub use rules::{DisableJigglingAfterTasksTool, EnableJigglingBeforeTasksTool, JigglypuffRulesTool};
pub use sleep::PutJigglyToSleepTool;
pub use status::CheckJigglyStatusTool;
pub use wake::WakeUpJigglyTool;

use jiggly_core::{StartOutcome, StopOutcome};

/// Shared rendering for `start`-shaped outcomes (used by `wake_up_jiggly`
/// and the enable alias).
pub(crate) fn start_message(outcome: &StartOutcome) -> String {
    match outcome {
        StartOutcome::Started { pid, params } => format!(
            "jigglypuff started jiggling successfully with PID {pid}, \
             interval={}s, offset={}px",
            params.interval_secs, params.offset_px
        ),
        StartOutcome::AlreadyJiggling { pid } => {
            format!("jigglypuff is already jiggling with PID {pid}")
        }
    }
}

/// Shared rendering for `stop`-shaped outcomes (used by
/// `put_jiggly_to_sleep` and the disable alias).
pub(crate) fn stop_message(outcome: &StopOutcome) -> String {
    match outcome {
        StopOutcome::Stopped { pid } => {
            format!("jigglypuff with PID {pid} put to sleep successfully")
        }
        StopOutcome::ForceStopped { pid } => {
            format!("jigglypuff with PID {pid} force put to sleep")
        }
        StopOutcome::AlreadyAsleep => "jigglypuff is already sleeping".to_string(),
    }
}

// ─── Test fixtures ───────────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod testutil {
    use std::sync::Arc;
    use std::time::Duration;

    use jiggly_core::{JigglerController, WorkerConfig};

    use crate::{ToolCall, ToolOutput};

    /// Controller backed by a real throwaway worker script.  The returned
    /// TempDir must be kept alive for the controller's lifetime.
    pub fn script_controller(body: &str) -> (tempfile::TempDir, Arc<JigglerController>) {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("worker.sh");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();

        let controller = Arc::new(JigglerController::new(WorkerConfig {
            command: path.to_string_lossy().into_owned(),
            args: Vec::new(),
            stop_timeout: Duration::from_millis(300),
        }));
        (dir, controller)
    }

    /// Controller whose worker executable does not exist, for spawn-failure
    /// paths.
    pub fn broken_controller() -> Arc<JigglerController> {
        Arc::new(JigglerController::new(WorkerConfig {
            command: "/nonexistent/jiggly-worker".to_string(),
            ..WorkerConfig::default()
        }))
    }

    pub fn call(name: &str, args: serde_json::Value) -> ToolCall {
        ToolCall {
            id: "test-call".to_string(),
            name: name.to_string(),
            args,
        }
    }

    pub fn assert_ok(out: &ToolOutput) {
        assert!(!out.is_error, "unexpected tool error: {}", out.content);
    }
}
