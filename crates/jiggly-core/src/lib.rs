// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
mod controller;
mod error;
mod params;
mod snapshot;

pub use controller::{JigglerController, StartOutcome, StopOutcome, WorkerConfig, WorkerStatus};
pub use error::ControllerError;
pub use params::{
    JiggleParams, DEFAULT_INTERVAL_SECS, DEFAULT_OFFSET_PX, MAX_INTERVAL_SECS, MAX_OFFSET_PX,
    MIN_INTERVAL_SECS, MIN_OFFSET_PX,
};
pub use snapshot::ControllerSnapshot;
