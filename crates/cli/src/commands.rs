// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Simulator configuration: the command table and session knobs.
//!
//! The command set is data, not code. A config file (TOML, JSON, or
//! JSON5, picked by extension) can replace the built-in table and preset
//! the session, so tests can reshape the simulator without recompiling.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Documentation URL surfaced by the `help` command
pub const DOCS_URL: &str = "https://docs.cypress.io/api/table-of-contents";
/// Anchor label for the documentation link
pub const DOCS_LABEL: &str = "official Cypress API documentation";

/// Errors that can occur when loading a simulator config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse JSON5: {0}")]
    Json5(#[from] json5::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level simulator configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SimulatorConfig {
    /// Name for logging/debugging
    #[serde(default)]
    pub name: String,

    /// Command table; empty means the built-in default set
    #[serde(default)]
    pub commands: Vec<CommandSpec>,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub simulation: SimulationConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

/// A single entry in the command table
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CommandSpec {
    /// Name as typed after the `cy.` prefix
    pub name: String,

    /// Whether the simulator executes it; false renders the
    /// not-implemented warning
    #[serde(default)]
    pub implemented: bool,

    /// Success message template; `{arg}` renders the call argument
    #[serde(default)]
    pub effect: Option<String>,

    /// Example call shown in help output
    #[serde(default)]
    pub example: Option<String>,

    /// One-line description shown in help output
    #[serde(default)]
    pub description: Option<String>,
}

/// Timing knobs
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TimingConfig {
    /// Running-state delay before a result resolves (ms)
    #[serde(default)]
    pub running_delay_ms: u64,
}

/// Chaos knobs
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    /// Probability in [0, 1] that a run resolves to an injected error
    #[serde(default)]
    pub chances_of_error: f64,

    /// RNG seed for captcha operands and error injection
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Session presets, the analog of the page's query parameters and
/// stored consent
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Fixed session UUID for deterministic output (default: random)
    #[serde(default)]
    pub session_id: Option<String>,

    /// Skip the captcha gate after login
    #[serde(default)]
    pub skip_captcha: bool,

    /// Preset cookie consent, as if previously stored
    #[serde(default)]
    pub cookie_consent: Option<ConsentChoice>,
}

/// A stored cookie-consent choice
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentChoice {
    Accepted,
    Declined,
}

impl SimulatorConfig {
    /// Load a simulator config from a TOML, JSON, or JSON5 file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: SimulatorConfig = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("json5") => json5::from_str(&content)?,
            _ => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate field constraints the serde layer cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref id) = self.session.session_id {
            if uuid::Uuid::parse_str(id).is_err() {
                return Err(ConfigError::Validation(format!(
                    "Invalid session_id '{}': must be a valid UUID",
                    id
                )));
            }
        }

        let p = self.simulation.chances_of_error;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::Validation(format!(
                "chances_of_error must be between 0.0 and 1.0, got {}",
                p
            )));
        }

        let name_shape = Regex::new(r"^[a-z][A-Za-z0-9]*$")
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        let mut seen = HashSet::new();
        for command in &self.commands {
            if !name_shape.is_match(&command.name) {
                return Err(ConfigError::Validation(format!(
                    "Invalid command name '{}': must match [a-z][A-Za-z0-9]*",
                    command.name
                )));
            }
            if !seen.insert(command.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "Duplicate command name '{}'",
                    command.name
                )));
            }
        }

        Ok(())
    }

    /// The effective command table: the configured one, or the built-in
    /// default set when the config lists none
    pub fn command_table(&self) -> Vec<CommandSpec> {
        if self.commands.is_empty() {
            default_commands()
        } else {
            self.commands.clone()
        }
    }
}

/// The built-in command table, matching what the demo page simulates:
/// `log` actually runs; the rest are recognized but unimplemented.
pub fn default_commands() -> Vec<CommandSpec> {
    fn spec(
        name: &str,
        implemented: bool,
        effect: Option<&str>,
        example: Option<&str>,
        description: &str,
    ) -> CommandSpec {
        CommandSpec {
            name: name.to_string(),
            implemented,
            effect: effect.map(str::to_string),
            example: example.map(str::to_string),
            description: Some(description.to_string()),
        }
    }

    vec![
        spec(
            "log",
            true,
            Some("Logged message '{arg}'"),
            Some("cy.log('Hello, world!')"),
            "Prints a message to the output area",
        ),
        spec(
            "visit",
            false,
            None,
            Some("cy.visit('https://example.com')"),
            "Visits a URL",
        ),
        spec(
            "get",
            false,
            None,
            Some("cy.get('#elementId')"),
            "Selects an element",
        ),
        spec(
            "contains",
            false,
            None,
            Some("cy.contains('Text')"),
            "Selects an element containing text",
        ),
        spec("click", false, None, None, "Clicks an element"),
        spec("type", false, None, None, "Types into an element"),
        spec("check", false, None, None, "Checks a checkbox"),
        spec("select", false, None, None, "Selects an option"),
        spec(
            "request",
            false,
            None,
            Some("cy.request('GET', '/api/users')"),
            "Performs an HTTP request",
        ),
        spec("intercept", false, None, None, "Stubs a network request"),
        spec("should", false, None, None, "Makes an assertion"),
        spec("and", false, None, None, "Chains another assertion"),
        spec("its", false, None, None, "Reads a property"),
    ]
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
