// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing for the simulator binary.

use clap::{Parser, ValueEnum};

use crate::commands::ConsentChoice;

/// Cypress Console Simulator
#[derive(Parser, Clone, Debug)]
#[command(name = "cypressless", version, about = "Cypress console simulator")]
pub struct Cli {
    /// The command to run (positional or via --print)
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// Print mode - non-interactive single run
    #[arg(short = 'p', long)]
    pub print: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Command-table config file (TOML, JSON, or JSON5)
    #[arg(long, env = "CYPRESSLESS_COMMANDS")]
    pub commands: Option<String>,

    /// Capture file for recording runs (JSONL)
    #[arg(long, env = "CYPRESSLESS_CAPTURE")]
    pub capture: Option<String>,

    /// Running-state delay in milliseconds
    #[arg(long, env = "CYPRESSLESS_DELAY_MS")]
    pub delay_ms: Option<u64>,

    /// Skip the captcha gate after login
    #[arg(long, env = "CYPRESSLESS_SKIP_CAPTCHA")]
    pub skip_captcha: bool,

    /// Preset cookie consent, as if previously stored
    #[arg(long, value_enum)]
    pub cookie_consent: Option<ConsentArg>,

    /// Probability in [0, 1] that a run resolves to an injected error
    #[arg(long, env = "CYPRESSLESS_CHANCES_OF_ERROR")]
    pub chances_of_error: Option<f64>,

    /// RNG seed for captcha operands and error injection
    #[arg(long, env = "CYPRESSLESS_SEED")]
    pub seed: Option<u64>,

    /// Use a specific session ID
    #[arg(long)]
    pub session_id: Option<String>,

    /// Enable interactive mode (line-oriented console session)
    #[arg(long, env = "CYPRESSLESS_INTERACTIVE")]
    pub interactive: bool,

    /// Force non-interactive mode even if stdin is a TTY
    #[arg(long)]
    pub no_interactive: bool,
}

/// CLI-friendly consent value
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConsentArg {
    Accepted,
    Declined,
}

impl From<ConsentArg> for ConsentChoice {
    fn from(arg: ConsentArg) -> Self {
        match arg {
            ConsentArg::Accepted => ConsentChoice::Accepted,
            ConsentArg::Declined => ConsentChoice::Declined,
        }
    }
}

/// Output format for run results
#[derive(Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,
    /// JSON result object
    Json,
}

impl Cli {
    /// Determine if interactive mode should be used
    pub fn should_use_interactive(&self) -> bool {
        if self.no_interactive {
            return false;
        }
        if self.interactive {
            return true;
        }
        // Auto-detect: interactive if stdin is a TTY and not in print mode
        use std::io::IsTerminal;
        !self.print && std::io::stdin().is_terminal()
    }

    /// Validate argument combinations clap cannot express
    pub fn validate(&self) -> Result<(), String> {
        if let Some(p) = self.chances_of_error {
            if !(0.0..=1.0).contains(&p) {
                return Err(format!(
                    "--chances-of-error must be between 0.0 and 1.0, got {}",
                    p
                ));
            }
        }
        if let Some(ref id) = self.session_id {
            if uuid::Uuid::parse_str(id).is_err() {
                return Err(format!("Invalid --session-id '{}': must be a valid UUID", id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
