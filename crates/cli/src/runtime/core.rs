// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core Runtime struct for executing simulated runs.

use crate::capture::{CapturedInput, CapturedOutcome, RunLog, RunSource};
use crate::classifier::{Classification, Classifier};
use crate::cli::Cli;
use crate::console::Console;
use crate::time::{Clock, ClockHandle};

use super::SessionContext;

/// Result of a single simulated run.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    /// The command that ran
    pub command: String,
    /// How it classified
    pub classification: Classification,
    /// Whether the chaos knob replaced the classification
    pub injected: bool,
    /// Wall-clock (or fake-clock) duration of the run
    pub duration_ms: u64,
}

/// Core runtime for executing runs.
///
/// Owns the composed subsystems: context, classifier, console state,
/// capture, and the clock. Provides a unified `execute` method driving
/// the Idle → Running → Resolved lifecycle.
pub struct Runtime {
    /// Merged session context from config + CLI.
    pub context: SessionContext,
    classifier: Classifier,
    console: Console,
    capture: Option<RunLog>,
    clock: ClockHandle,
    rng: fastrand::Rng,
    cli: Cli,
}

impl Runtime {
    /// Create a new Runtime with all dependencies.
    pub(crate) fn new(
        context: SessionContext,
        classifier: Classifier,
        console: Console,
        capture: Option<RunLog>,
        clock: ClockHandle,
        rng: fastrand::Rng,
        cli: Cli,
    ) -> Self {
        Self {
            context,
            classifier,
            console,
            capture,
            clock,
            rng,
            cli,
        }
    }

    /// Get the session ID.
    pub fn session_id(&self) -> String {
        self.context.session_id.to_string()
    }

    /// Check if this runtime should use interactive mode.
    pub fn should_use_interactive(&self) -> bool {
        self.cli.should_use_interactive()
    }

    /// Get the CLI reference.
    pub fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Get the console state.
    pub fn console(&self) -> &Console {
        &self.console
    }

    /// Get the console state for mutation.
    pub fn console_mut(&mut self) -> &mut Console {
        &mut self.console
    }

    /// Get the classifier.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Get a shared handle to the capture log, if capture is enabled.
    pub fn capture(&self) -> Option<RunLog> {
        self.capture.clone()
    }

    /// Replace the editor contents and execute one run.
    pub async fn submit(&mut self, input: &str, source: RunSource) -> Option<RunOutcome> {
        self.console.clear_input();
        self.console.type_input(input);
        self.execute(source).await
    }

    /// Execute one run through the console lifecycle: gate on the run
    /// action, hold the Running state for the configured delay, then
    /// resolve to the classification (or an injected failure) and record
    /// the run.
    pub async fn execute(&mut self, source: RunSource) -> Option<RunOutcome> {
        let started = self.clock.now_millis();

        let command = match self.console.begin_run() {
            Some(command) => command,
            None => {
                let reason = self.console.run_blocker().unwrap_or("run not permitted");
                self.record(
                    self.console.input().to_string(),
                    source,
                    CapturedOutcome::Skipped {
                        reason: reason.to_string(),
                    },
                );
                return None;
            }
        };

        self.clock.sleep(self.context.running_delay).await;

        let (classification, injected) = if self.roll_injected_failure() {
            (
                Classification::Error {
                    message: format!(
                        "Unexpected error while simulating `{}`. Please try again.",
                        command.trim()
                    ),
                },
                true,
            )
        } else {
            (self.classifier.classify(&command), false)
        };

        self.console.resolve(classification.clone());
        let duration_ms = self.clock.now_millis().saturating_sub(started);

        let outcome = RunOutcome {
            command: command.trim().to_string(),
            classification,
            injected,
            duration_ms,
        };

        let captured = if outcome.injected {
            CapturedOutcome::Injected {
                message: outcome.classification.message().to_string(),
            }
        } else {
            CapturedOutcome::Classified {
                severity: outcome.classification.severity().as_str().to_string(),
                message: outcome.classification.message().to_string(),
            }
        };
        self.record(outcome.command.clone(), source, captured);

        Some(outcome)
    }

    fn roll_injected_failure(&mut self) -> bool {
        let p = self.context.chances_of_error;
        p > 0.0 && self.rng.f64() < p
    }

    fn record(&self, command: String, source: RunSource, outcome: CapturedOutcome) {
        if let Some(ref log) = self.capture {
            log.record(
                CapturedInput {
                    command,
                    source,
                    session_id: self.session_id(),
                    delay_ms: self.context.running_delay.as_millis() as u64,
                },
                outcome,
            );
        }
    }
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
