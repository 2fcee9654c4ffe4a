// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run log implementation.

use crate::run::{CapturedInput, CapturedOutcome, CapturedRun};
use parking_lot::Mutex;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;
use std::time::{Instant, SystemTime};

/// Run log for recording simulated console runs
pub struct RunLog {
    start: Instant,
    runs: Arc<Mutex<Vec<CapturedRun>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl RunLog {
    /// Create a new in-memory run log
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            runs: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
        }
    }

    /// Create a run log that also writes to a file (JSONL format)
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            start: Instant::now(),
            runs: Arc::new(Mutex::new(Vec::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Record a run
    pub fn record(&self, input: CapturedInput, outcome: CapturedOutcome) {
        let mut runs = self.runs.lock();
        let seq = runs.len() as u64;
        let run = CapturedRun {
            seq,
            timestamp: SystemTime::now(),
            elapsed: self.start.elapsed(),
            input,
            outcome,
        };

        runs.push(run.clone());

        // One serialized record per line, flushed so watchers see it
        if let Some(ref writer) = self.file_writer {
            use std::io::Write;
            let mut w = writer.lock();
            if let Ok(json) = serde_json::to_string(&run) {
                let _ = writeln!(w, "{}", json);
                let _ = w.flush();
            }
        }
    }

    /// Get all captured runs
    pub fn runs(&self) -> Vec<CapturedRun> {
        self.runs.lock().clone()
    }

    /// Get the last N runs
    pub fn last(&self, n: usize) -> Vec<CapturedRun> {
        let all = self.runs.lock();
        all.iter().rev().take(n).rev().cloned().collect()
    }

    /// Count runs matching a predicate
    pub fn count<F: Fn(&CapturedRun) -> bool>(&self, pred: F) -> usize {
        self.runs.lock().iter().filter(|r| pred(r)).count()
    }

    /// Find runs whose command contains a pattern
    pub fn find_by_command(&self, pattern: &str) -> Vec<CapturedRun> {
        self.runs
            .lock()
            .iter()
            .filter(|r| r.input.command.contains(pattern))
            .cloned()
            .collect()
    }

    /// Find runs the classifier resolved
    pub fn find_classified(&self) -> Vec<CapturedRun> {
        self.runs
            .lock()
            .iter()
            .filter(|r| matches!(r.outcome, CapturedOutcome::Classified { .. }))
            .cloned()
            .collect()
    }

    /// Find runs that resolved to an injected failure
    pub fn find_injected(&self) -> Vec<CapturedRun> {
        self.runs
            .lock()
            .iter()
            .filter(|r| matches!(r.outcome, CapturedOutcome::Injected { .. }))
            .cloned()
            .collect()
    }

    /// Get the total number of recorded runs
    pub fn len(&self) -> usize {
        self.runs.lock().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.runs.lock().is_empty()
    }

    /// Clear all recorded runs
    pub fn clear(&self) {
        self.runs.lock().clear();
    }
}

impl Default for RunLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RunLog {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            runs: Arc::clone(&self.runs),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
