// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! RuntimeBuilder for constructing Runtime with a fluent API.

use std::path::Path;

use thiserror::Error;

use crate::capture::RunLog;
use crate::classifier::Classifier;
use crate::cli::Cli;
use crate::commands::{default_commands, ConfigError, SimulatorConfig};
use crate::console::Console;
use crate::time::ClockHandle;

use super::core::Runtime;
use super::SessionContext;

/// Errors that can occur while building a Runtime
#[derive(Debug, Error)]
pub enum RuntimeBuildError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to open capture file: {0}")]
    Capture(std::io::Error),
}

/// Builder for constructing Runtime instances.
///
/// ```ignore
/// let runtime = RuntimeBuilder::new(cli)?
///     .with_config_from_cli()?
///     .build()?;
/// ```
pub struct RuntimeBuilder {
    cli: Cli,
    config: Option<SimulatorConfig>,
    capture: Option<RunLog>,
    clock: ClockHandle,
}

impl RuntimeBuilder {
    /// Create a new builder from CLI args.
    ///
    /// Validates CLI arguments during construction.
    pub fn new(cli: Cli) -> Result<Self, RuntimeBuildError> {
        if let Err(msg) = cli.validate() {
            return Err(RuntimeBuildError::Validation(msg));
        }

        Ok(Self {
            cli,
            config: None,
            capture: None,
            clock: ClockHandle::system(),
        })
    }

    /// Load a simulator config from a file path.
    pub fn with_config(mut self, path: &Path) -> Result<Self, RuntimeBuildError> {
        self.config = Some(SimulatorConfig::load(path)?);
        Ok(self)
    }

    /// Load a simulator config from CLI args if specified.
    pub fn with_config_from_cli(mut self) -> Result<Self, RuntimeBuildError> {
        if let Some(ref path) = self.cli.commands {
            self.config = Some(SimulatorConfig::load(Path::new(path))?);
        }
        Ok(self)
    }

    /// Attach an existing run log (tests share an in-memory log).
    pub fn with_capture(mut self, log: RunLog) -> Self {
        self.capture = Some(log);
        self
    }

    /// Replace the clock (tests use a fake clock to skip real delays).
    pub fn with_clock(mut self, clock: ClockHandle) -> Self {
        self.clock = clock;
        self
    }

    /// Construct the Runtime.
    pub fn build(self) -> Result<Runtime, RuntimeBuildError> {
        let context = SessionContext::build(self.config.as_ref(), &self.cli);

        let table = match self.config.as_ref() {
            Some(config) => config.command_table(),
            None => default_commands(),
        };
        let classifier = Classifier::new(table);

        let capture = match self.capture {
            Some(log) => Some(log),
            None => match self.cli.capture.as_deref() {
                Some(path) => {
                    Some(RunLog::with_file(Path::new(path)).map_err(RuntimeBuildError::Capture)?)
                }
                None => None,
            },
        };

        // One seeded stream: the console forks its RNG for captcha
        // operands, the runtime keeps the rest for error injection.
        let mut rng = context.rng();
        let console_rng = rng.fork();
        let console = Console::new(context.skip_captcha, context.cookie_consent, console_rng);

        Ok(Runtime::new(
            context, classifier, console, capture, self.clock, rng, self.cli,
        ))
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
