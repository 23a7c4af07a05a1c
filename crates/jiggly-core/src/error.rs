// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

/// Faults the controller can hit while managing the worker process.
///
/// "Already jiggling" and "already sleeping" are not faults — they are
/// ordinary outcomes carried by [`crate::StartOutcome`] /
/// [`crate::StopOutcome`].  The graceful-wait timeout is not an error
/// either; it triggers the forced-kill escalation inside `stop`.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// The worker executable could not be launched (missing binary,
    /// permissions, resource exhaustion).  No handle is recorded.
    #[error("failed to spawn worker `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Delivering a termination signal to the worker failed.
    #[error("failed to signal worker process {pid}: {source}")]
    Signal {
        pid: u32,
        #[source]
        source: std::io::Error,
    },

    /// Waiting on the worker's exit status failed.
    #[error("failed while waiting for worker process {pid}: {source}")]
    Wait {
        pid: u32,
        #[source]
        source: std::io::Error,
    },
}
