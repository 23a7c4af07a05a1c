// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
//!
//! Jiggle parameters and the clamping policy applied to caller input.
//!
//! Callers (MCP clients, CLI flags) supply arbitrary integers; out-of-range
//! values are silently corrected into the closed ranges below rather than
//! rejected.  The ranges and defaults are fixed properties of the system,
//! not configuration.

use serde::Serialize;

/// Shortest allowed pause between two pointer movements.
pub const MIN_INTERVAL_SECS: i64 = 5;
/// Longest allowed pause between two pointer movements.
pub const MAX_INTERVAL_SECS: i64 = 300;
/// Smallest allowed movement magnitude.
pub const MIN_OFFSET_PX: i64 = 1;
/// Largest allowed movement magnitude.
pub const MAX_OFFSET_PX: i64 = 10;

/// Interval used when the caller supplies none.
pub const DEFAULT_INTERVAL_SECS: i64 = 30;
/// Offset used when the caller supplies none.
pub const DEFAULT_OFFSET_PX: i64 = 1;

/// Effective (post-clamp) worker parameters.
///
/// Can only be constructed through [`JiggleParams::clamped`], so a value of
/// this type is always within bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JiggleParams {
    /// Seconds between movements, within `[5, 300]`.
    pub interval_secs: i64,
    /// Movement magnitude in pixels, within `[1, 10]`.
    pub offset_px: i64,
}

impl JiggleParams {
    /// Clamp arbitrary caller input into the valid ranges.
    pub fn clamped(interval: i64, offset: i64) -> Self {
        Self {
            interval_secs: interval.clamp(MIN_INTERVAL_SECS, MAX_INTERVAL_SECS),
            offset_px: offset.clamp(MIN_OFFSET_PX, MAX_OFFSET_PX),
        }
    }
}

impl Default for JiggleParams {
    fn default() -> Self {
        Self::clamped(DEFAULT_INTERVAL_SECS, DEFAULT_OFFSET_PX)
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
