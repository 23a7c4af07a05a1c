// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
mod builtin;
mod registry;
mod tool;

pub use builtin::{
    CheckJigglyStatusTool, DisableJigglingAfterTasksTool, EnableJigglingBeforeTasksTool,
    JigglypuffConfigTool, JigglypuffRulesTool, PutJigglyToSleepTool, WakeUpJigglyTool,
};
pub use registry::{ToolRegistry, ToolSchema};
pub use tool::{Tool, ToolCall, ToolOutput};
