// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captured run data types.

use crate::duration_serde;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// A single recorded console run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CapturedRun {
    /// Sequence number
    pub seq: u64,

    /// Wall-clock timestamp
    pub timestamp: SystemTime,

    /// Elapsed time since the log was created, as milliseconds
    #[serde(with = "duration_serde")]
    pub elapsed: Duration,

    /// What was submitted
    pub input: CapturedInput,

    /// How the run resolved
    pub outcome: CapturedOutcome,
}

/// The submitted command plus the session it ran under
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CapturedInput {
    pub command: String,
    pub source: RunSource,
    pub session_id: String,
    pub delay_ms: u64,
}

/// Which surface submitted the run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunSource {
    Print,
    Interactive,
}

/// Captured outcome of a run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CapturedOutcome {
    /// The classifier produced a result
    Classified { severity: String, message: String },
    /// The chaos knob replaced the classification with a failure
    Injected { message: String },
    /// The console refused the run (gating)
    Skipped { reason: String },
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
