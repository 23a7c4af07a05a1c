// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//!
//! Default tool registry for the jiggly MCP server.
//!
//! All tools share one [`JigglerController`], so the single-worker guard
//! holds across every transport-exposed operation: two clients racing a
//! `wake_up_jiggly` call still end up with exactly one worker process.

use std::sync::Arc;

use jiggly_core::JigglerController;
use jiggly_tools::{
    CheckJigglyStatusTool, DisableJigglingAfterTasksTool, EnableJigglingBeforeTasksTool,
    JigglypuffConfigTool, JigglypuffRulesTool, PutJigglyToSleepTool, ToolRegistry, WakeUpJigglyTool,
};

/// Tool names included in the default set.
///
/// These names correspond exactly to the values returned by each tool's
/// `Tool::name()` implementation.  Clients can use this list to discover
/// what `jiggly mcp serve` exposes by default.
pub const DEFAULT_TOOL_NAMES: &[&str] = &[
    "check_jiggly_status",
    "disable_jiggling_after_tasks",
    "enable_jiggling_before_tasks",
    "jigglypuff_config",
    "jigglypuff_rules",
    "put_jiggly_to_sleep",
    "wake_up_jiggly",
];

/// Build a [`ToolRegistry`] with the jigglypuff control tools, all backed
/// by the given controller.
///
/// `allowed_names` is an optional comma-separated list of tool names to
/// include.  Pass `"all"` (or `None`) to include everything.  Any name not
/// in [`DEFAULT_TOOL_NAMES`] is silently ignored.
pub fn build_mcp_registry(
    controller: Arc<JigglerController>,
    allowed_names: Option<&str>,
) -> ToolRegistry {
    let filter: Option<std::collections::HashSet<&str>> = match allowed_names {
        None | Some("all") => None,
        Some(list) => Some(list.split(',').map(|s| s.trim()).collect()),
    };

    let allow = |name: &str| -> bool {
        match &filter {
            None => true,
            Some(set) => set.contains(name),
        }
    };

    let mut reg = ToolRegistry::new();

    if allow("wake_up_jiggly") {
        reg.register(WakeUpJigglyTool::new(controller.clone()));
    }
    if allow("put_jiggly_to_sleep") {
        reg.register(PutJigglyToSleepTool::new(controller.clone()));
    }
    if allow("check_jiggly_status") {
        reg.register(CheckJigglyStatusTool::new(controller.clone()));
    }
    if allow("enable_jiggling_before_tasks") {
        reg.register(EnableJigglingBeforeTasksTool::new(controller.clone()));
    }
    if allow("disable_jiggling_after_tasks") {
        reg.register(DisableJigglingAfterTasksTool::new(controller.clone()));
    }
    if allow("jigglypuff_config") {
        reg.register(JigglypuffConfigTool::new(controller));
    }
    if allow("jigglypuff_rules") {
        reg.register(JigglypuffRulesTool::new());
    }

    reg
}

// ─── Unit tests ───────────────────────────────────────────────────────────────
