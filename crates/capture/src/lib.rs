// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run capture and recording for test assertions.
//!
//! This crate records simulated console runs so integration tests can
//! assert on what the simulator was asked to run and how each run
//! resolved, without scraping rendered output.

mod duration_serde;
mod log;
mod run;

pub use log::RunLog;
pub use run::{CapturedInput, CapturedOutcome, CapturedRun, RunSource};
