// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
//!
//! The worker process lifecycle controller.
//!
//! [`JigglerController`] owns the zero-or-one external jiggling worker and
//! funnels every operation through one async mutex, so concurrent control
//! calls can never double-spawn a worker or double-clear the handle.  The
//! worker itself is an independent OS process: the controller only spawns
//! it, polls it for liveness with a non-blocking `try_wait`, and terminates
//! it — SIGTERM first, SIGKILL if the graceful wait times out.

use std::process::ExitStatus;
use std::time::Duration;

use tokio::process::{Child, Command};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::ControllerError;
use crate::params::JiggleParams;
use crate::snapshot::ControllerSnapshot;

/// How the external worker is launched and shut down.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Executable implementing the worker launch contract: it receives the
    /// clamped interval and offset as two trailing positional arguments and
    /// runs a movement loop until signaled.
    pub command: String,
    /// Fixed arguments inserted before the interval/offset pair.
    pub args: Vec<String>,
    /// Bound on the graceful-termination wait before escalating to SIGKILL.
    pub stop_timeout: Duration,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            command: "jiggly-worker".to_string(),
            args: Vec::new(),
            stop_timeout: Duration::from_secs(5),
        }
    }
}

/// Result of a [`JigglerController::start`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new worker was spawned with the effective (post-clamp) parameters.
    Started { pid: u32, params: JiggleParams },
    /// A live worker already exists; nothing was done.
    AlreadyJiggling { pid: u32 },
}

/// Result of a [`JigglerController::stop`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopOutcome {
    /// The worker exited within the graceful-termination window.
    Stopped { pid: u32 },
    /// The worker ignored SIGTERM and had to be SIGKILLed.
    ForceStopped { pid: u32 },
    /// No live worker was being tracked; nothing to do.
    AlreadyAsleep,
}

/// Snapshot of the worker state as seen by [`JigglerController::status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerStatus {
    /// No worker handle is tracked.
    Sleeping,
    /// The tracked worker is confirmed live.
    Jiggling { pid: u32 },
    /// The tracked worker has exited on its own; the handle remains until
    /// the next `start` replaces it.  Signal deaths are reported as
    /// negative codes (`-SIGTERM` = -15 and so on).
    Exited { pid: u32, code: Option<i32> },
}

/// Handle on the spawned worker.  Existence does not imply liveness: the
/// process may have exited on its own and the handle is stale until the
/// next poll reaps it.
struct WorkerHandle {
    child: Child,
    pid: u32,
    exit: Option<ExitStatus>,
}

impl WorkerHandle {
    /// Non-blocking liveness check.  Caches the exit status once observed
    /// so later polls (and `status` reads) keep reporting it.
    fn poll(&mut self) -> Option<ExitStatus> {
        if self.exit.is_none() {
            if let Ok(Some(status)) = self.child.try_wait() {
                self.exit = Some(status);
            }
        }
        self.exit
    }

    fn is_live(&mut self) -> bool {
        self.poll().is_none()
    }

    /// Request graceful termination.  A worker that is already gone is not
    /// an error; the subsequent wait resolves immediately.
    #[cfg(unix)]
    fn terminate(&self) -> Result<(), ControllerError> {
        let rc = unsafe { libc::kill(self.pid as libc::pid_t, libc::SIGTERM) };
        if rc == 0 {
            return Ok(());
        }
        let source = std::io::Error::last_os_error();
        if source.raw_os_error() == Some(libc::ESRCH) {
            return Ok(());
        }
        Err(ControllerError::Signal { pid: self.pid, source })
    }

    /// No catchable termination signal exists off unix; go straight to the
    /// unconditional kill.
    #[cfg(not(unix))]
    fn terminate(&mut self) -> Result<(), ControllerError> {
        self.child
            .start_kill()
            .map_err(|source| ControllerError::Signal { pid: self.pid, source })
    }
}

/// Extract a Python-`returncode`-style exit code: the real code for normal
/// exits, the negated signal number for signal deaths.
fn exit_code(status: ExitStatus) -> Option<i32> {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        status.code().or_else(|| status.signal().map(|s| -s))
    }
    #[cfg(not(unix))]
    {
        status.code()
    }
}

/// Process-wide controller for the jiggling worker.
///
/// Instantiate once and share as `Arc<JigglerController>` with whatever
/// exposes the command surface (tool registry, CLI).  All state lives in
/// memory for the lifetime of this process; a worker that outlives the
/// controller process is orphaned.
pub struct JigglerController {
    config: WorkerConfig,
    worker: Mutex<Option<WorkerHandle>>,
}

impl JigglerController {
    pub fn new(config: WorkerConfig) -> Self {
        Self {
            config,
            worker: Mutex::new(None),
        }
    }

    /// Spawn the worker with clamped parameters, unless one is already live.
    ///
    /// Out-of-range `interval`/`offset` values are silently corrected into
    /// `[5, 300]` s and `[1, 10]` px.  While a live worker exists this is a
    /// no-op reporting the existing pid, so repeated calls never stack up
    /// a second process.
    pub async fn start(
        &self,
        interval: i64,
        offset: i64,
    ) -> Result<StartOutcome, ControllerError> {
        let params = JiggleParams::clamped(interval, offset);
        let mut slot = self.worker.lock().await;

        if let Some(handle) = slot.as_mut() {
            if handle.is_live() {
                debug!(pid = handle.pid, "start ignored, worker already live");
                return Ok(StartOutcome::AlreadyJiggling { pid: handle.pid });
            }
        }

        let child = Command::new(&self.config.command)
            .args(&self.config.args)
            .arg(params.interval_secs.to_string())
            .arg(params.offset_px.to_string())
            .spawn()
            .map_err(|source| ControllerError::Spawn {
                command: self.config.command.clone(),
                source,
            })?;
        // A spawned child always has an id until it is reaped; a missing id
        // must never default to 0, which kill(2) reads as the process group.
        let pid = child.id().ok_or_else(|| ControllerError::Spawn {
            command: self.config.command.clone(),
            source: std::io::Error::other("spawned worker has no pid"),
        })?;
        info!(
            pid,
            interval = params.interval_secs,
            offset = params.offset_px,
            "worker started"
        );

        *slot = Some(WorkerHandle { child, pid, exit: None });
        Ok(StartOutcome::Started { pid, params })
    }

    /// Terminate the tracked worker, escalating from SIGTERM to SIGKILL if
    /// it does not exit within the configured graceful window.
    ///
    /// Idempotent: with no live worker this returns
    /// [`StopOutcome::AlreadyAsleep`].  An already-exited handle is left in
    /// place so `status` keeps reporting its exit code.
    pub async fn stop(&self) -> Result<StopOutcome, ControllerError> {
        let mut slot = self.worker.lock().await;
        let Some(mut handle) = slot.take() else {
            return Ok(StopOutcome::AlreadyAsleep);
        };
        if !handle.is_live() {
            *slot = Some(handle);
            return Ok(StopOutcome::AlreadyAsleep);
        }

        // The handle is out of the slot from here on: every path — success
        // or error — leaves the controller tracking nothing, so it can
        // never report a live process it failed to control.
        let pid = handle.pid;
        handle.terminate()?;

        match tokio::time::timeout(self.config.stop_timeout, handle.child.wait()).await {
            Ok(Ok(_status)) => {
                info!(pid, "worker put to sleep");
                Ok(StopOutcome::Stopped { pid })
            }
            Ok(Err(source)) => Err(ControllerError::Wait { pid, source }),
            Err(_elapsed) => {
                warn!(pid, "worker unresponsive, escalating to SIGKILL");
                handle
                    .child
                    .start_kill()
                    .map_err(|source| ControllerError::Signal { pid, source })?;
                handle
                    .child
                    .wait()
                    .await
                    .map_err(|source| ControllerError::Wait { pid, source })?;
                Ok(StopOutcome::ForceStopped { pid })
            }
        }
    }

    /// Purely observational state read.  Non-blocking: liveness comes from
    /// a `try_wait` poll, which also reaps a worker that exited on its own
    /// so its exit code becomes visible without an explicit `stop`.
    pub async fn status(&self) -> WorkerStatus {
        let mut slot = self.worker.lock().await;
        match slot.as_mut() {
            None => WorkerStatus::Sleeping,
            Some(handle) => match handle.poll() {
                None => WorkerStatus::Jiggling { pid: handle.pid },
                Some(status) => WorkerStatus::Exited {
                    pid: handle.pid,
                    code: exit_code(status),
                },
            },
        }
    }

    /// Fixed-parameter alias for "begin a protected work session".
    pub async fn enable(&self) -> Result<StartOutcome, ControllerError> {
        self.start(
            crate::params::DEFAULT_INTERVAL_SECS,
            crate::params::DEFAULT_OFFSET_PX,
        )
        .await
    }

    /// Alias for "end a protected work session".
    pub async fn disable(&self) -> Result<StopOutcome, ControllerError> {
        self.stop().await
    }

    /// Descriptive read-only snapshot of state, bounds, and platform
    /// dependencies.  Carries no control semantics.
    pub async fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot::describe(&self.config, self.status().await)
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
//
// These tests spawn real child processes built from throwaway shell
// scripts, so the full spawn / poll / signal / wait path is exercised
// rather than mocked.
