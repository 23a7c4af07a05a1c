// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
//!
//! Read-only description of the controller: current worker state, the fixed
//! parameter bounds, and the platform-level pieces the worker relies on.
//! Purely informational — nothing in here can be used to mutate state.

use serde::Serialize;

use crate::controller::{WorkerConfig, WorkerStatus};
use crate::params;

#[cfg(target_os = "macos")]
const PLATFORM: &str = "macos";
#[cfg(target_os = "linux")]
const PLATFORM: &str = "linux";
#[cfg(not(any(target_os = "macos", target_os = "linux")))]
const PLATFORM: &str = "other";

/// External tools the stock worker script shells out to.
#[cfg(target_os = "macos")]
const DEPENDENCIES: &[&str] = &["cliclick", "bash", "osascript"];
#[cfg(target_os = "linux")]
const DEPENDENCIES: &[&str] = &["xdotool", "sh"];
#[cfg(not(any(target_os = "macos", target_os = "linux")))]
const DEPENDENCIES: &[&str] = &[];

/// Descriptive snapshot exported to callers (the `jigglypuff_config` tool
/// and `jiggly info`).
#[derive(Debug, Clone, Serialize)]
pub struct ControllerSnapshot {
    pub server_name: &'static str,
    pub version: &'static str,
    /// "sleeping" | "jiggling" | "stopped" (tracked process has exited).
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    pub worker_command: String,
    pub default_interval: i64,
    pub default_offset: i64,
    pub min_interval: i64,
    pub max_interval: i64,
    pub min_offset: i64,
    pub max_offset: i64,
    pub platform: &'static str,
    pub dependencies: &'static [&'static str],
}

impl ControllerSnapshot {
    pub(crate) fn describe(config: &WorkerConfig, status: WorkerStatus) -> Self {
        let (status, process_id, exit_code) = match status {
            WorkerStatus::Sleeping => ("sleeping", None, None),
            WorkerStatus::Jiggling { pid } => ("jiggling", Some(pid), None),
            WorkerStatus::Exited { pid, code } => ("stopped", Some(pid), code),
        };
        Self {
            server_name: "jigglypuff",
            version: env!("CARGO_PKG_VERSION"),
            status,
            process_id,
            exit_code,
            worker_command: config.command.clone(),
            default_interval: params::DEFAULT_INTERVAL_SECS,
            default_offset: params::DEFAULT_OFFSET_PX,
            min_interval: params::MIN_INTERVAL_SECS,
            max_interval: params::MAX_INTERVAL_SECS,
            min_offset: params::MIN_OFFSET_PX,
            max_offset: params::MAX_OFFSET_PX,
            platform: PLATFORM,
            dependencies: DEPENDENCIES,
        }
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleeping_snapshot_carries_bounds_but_no_pid() {
        let snap = ControllerSnapshot::describe(&WorkerConfig::default(), WorkerStatus::Sleeping);
        assert_eq!(snap.status, "sleeping");
        assert_eq!(snap.process_id, None);
        assert_eq!(snap.min_interval, 5);
        assert_eq!(snap.max_interval, 300);
        assert_eq!(snap.min_offset, 1);
        assert_eq!(snap.max_offset, 10);
    }

    #[test]
    fn jiggling_snapshot_names_the_pid() {
        let snap = ControllerSnapshot::describe(
            &WorkerConfig::default(),
            WorkerStatus::Jiggling { pid: 4242 },
        );
        assert_eq!(snap.status, "jiggling");
        assert_eq!(snap.process_id, Some(4242));
        assert_eq!(snap.exit_code, None);
    }

    #[test]
    fn exited_snapshot_exposes_the_exit_code() {
        let snap = ControllerSnapshot::describe(
            &WorkerConfig::default(),
            WorkerStatus::Exited { pid: 4242, code: Some(1) },
        );
        assert_eq!(snap.status, "stopped");
        assert_eq!(snap.exit_code, Some(1));
    }

    #[test]
    fn snapshot_serializes_without_null_noise() {
        let snap = ControllerSnapshot::describe(&WorkerConfig::default(), WorkerStatus::Sleeping);
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["server_name"], "jigglypuff");
        assert!(json.get("process_id").is_none());
        assert!(json.get("exit_code").is_none());
        assert_eq!(json["default_interval"], 30);
    }
}
