// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub worker: WorkerSection,
}

/// How the external jiggling worker is launched and shut down.
///
/// The interval/offset bounds and defaults are fixed system properties and
/// deliberately not configurable — only the worker executable and the
/// graceful-stop window live here.
///
/// ```toml
/// [worker]
/// command = "/usr/local/libexec/jiggly-worker"
/// args = []
/// stop_timeout_secs = 5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerSection {
    /// Worker executable.  Receives the clamped interval and offset as two
    /// trailing positional arguments and must loop until signaled.
    #[serde(default = "default_command")]
    pub command: String,
    /// Fixed arguments inserted before the interval/offset pair.
    #[serde(default)]
    pub args: Vec<String>,
    /// Seconds to wait for a graceful exit before force-killing the worker.
    #[serde(default = "default_stop_timeout_secs")]
    pub stop_timeout_secs: u64,
}

fn default_command() -> String {
    "jiggly-worker".to_string()
}

fn default_stop_timeout_secs() -> u64 {
    5
}

impl Default for WorkerSection {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: Vec::new(),
            stop_timeout_secs: default_stop_timeout_secs(),
        }
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
