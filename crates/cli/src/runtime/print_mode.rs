// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Print mode execution for non-interactive CLI use.

use std::io::{self, Write};

use crate::capture::RunSource;
use crate::output::OutputWriter;

use super::Runtime;

impl Runtime {
    /// Execute print mode (non-interactive, single run).
    ///
    /// Runs the command from CLI args and writes the result to stdout.
    pub async fn execute_print_mode(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        // Require a command in print mode
        let command = match self.cli().command.clone() {
            Some(c) => c,
            None => {
                return Err(
                    "A command must be provided either as an argument or via --print".into(),
                );
            }
        };
        if command.trim().is_empty() {
            return Err("Cannot run an empty command".into());
        }

        // Print mode skips the page chrome: the session starts on the
        // console screen with consent settled, like the E2E presets.
        self.console_mut().authenticate();
        if self.console().banner_visible() {
            self.console_mut().accept_cookies();
        }

        let outcome = match self.submit(&command, RunSource::Print).await {
            Some(outcome) => outcome,
            None => return Err("The run was not permitted".into()),
        };

        let mut stdout = io::stdout();
        let session_id = self.session_id();
        let mut writer = OutputWriter::new(&mut stdout, self.cli().output_format.clone());
        writer.write_result(
            &outcome.command,
            &outcome.classification,
            &session_id,
            outcome.duration_ms,
        )?;
        stdout.flush()?;

        Ok(())
    }
}
