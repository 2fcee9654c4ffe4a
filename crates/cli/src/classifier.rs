// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command classification: the console's core contract.
//!
//! Every input maps to exactly one [`Classification`]; `Error` is the
//! catch-all for anything unrecognized or malformed, so classification
//! never fails. Matching is case-sensitive and anchored to the exact
//! `cy.` prefix — `Cy.get()` is not a command.

use crate::commands::{CommandSpec, DOCS_LABEL, DOCS_URL};
use crate::help;
use regex::Regex;

/// Severity of a classification, used for rendering and capture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Help,
}

impl Severity {
    /// Lowercase identifier, used as the JSON subtype and in capture
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Help => "help",
        }
    }

    /// Display label, as shown in the output area
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Success => "Success",
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Help => "Help",
        }
    }
}

/// A link carried by a help result
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HelpLink {
    pub label: String,
    pub href: String,
}

/// Outcome of classifying one typed command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    /// Command recognized and "executed" (simulated)
    Success { message: String },
    /// Command malformed, unknown, or otherwise rejected
    Error { message: String },
    /// Command recognized but intentionally unimplemented
    Warning { message: String },
    /// Literal request for usage information
    Help {
        message: String,
        links: Vec<HelpLink>,
    },
}

impl Classification {
    pub fn severity(&self) -> Severity {
        match self {
            Classification::Success { .. } => Severity::Success,
            Classification::Error { .. } => Severity::Error,
            Classification::Warning { .. } => Severity::Warning,
            Classification::Help { .. } => Severity::Help,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Classification::Success { message }
            | Classification::Error { message }
            | Classification::Warning { message } => message,
            Classification::Help { message, .. } => message,
        }
    }

    pub fn links(&self) -> &[HelpLink] {
        match self {
            Classification::Help { links, .. } => links,
            _ => &[],
        }
    }
}

/// Classifies typed commands against a configured command table.
///
/// The call shape (`cy.<name>(<args>)`) is fixed; which names exist and
/// what they do is configuration data.
#[derive(Debug)]
pub struct Classifier {
    commands: Vec<CommandSpec>,
    call_shape: Regex,
    bare_shape: Regex,
}

impl Classifier {
    pub fn new(commands: Vec<CommandSpec>) -> Self {
        // Static patterns; only the command table is data.
        #[allow(clippy::expect_used)]
        let call_shape = Regex::new(r"^cy\.([a-z][A-Za-z0-9]*)\((.*)\)$")
            .expect("static call-shape pattern");
        #[allow(clippy::expect_used)]
        let bare_shape =
            Regex::new(r"^cy\.([a-z][A-Za-z0-9]*)$").expect("static bare-shape pattern");

        Self {
            commands,
            call_shape,
            bare_shape,
        }
    }

    /// Create a classifier over the built-in default command table
    pub fn with_defaults() -> Self {
        Self::new(crate::commands::default_commands())
    }

    /// The configured command table
    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    /// Classify one typed command. Total: every input yields exactly one
    /// result, and classifying is free of side effects.
    pub fn classify(&self, input: &str) -> Classification {
        let input = input.trim();

        if input == "help" {
            return Classification::Help {
                message: help::render(&self.commands),
                links: vec![HelpLink {
                    label: DOCS_LABEL.to_string(),
                    href: DOCS_URL.to_string(),
                }],
            };
        }

        if let Some(caps) = self.call_shape.captures(input) {
            let name = &caps[1];
            let args = &caps[2];
            return match self.lookup(name) {
                Some(command) if command.implemented => Classification::Success {
                    message: format!("{} // {}", input, render_effect(command, args)),
                },
                Some(command) => Classification::Warning {
                    message: format!(
                        "The `cy.{}` command has not been implemented yet.",
                        command.name
                    ),
                },
                None => invalid(input),
            };
        }

        if let Some(caps) = self.bare_shape.captures(input) {
            if let Some(command) = self.lookup(&caps[1]) {
                return Classification::Error {
                    message: format!("Missing parentheses on `cy.{}` command", command.name),
                };
            }
        }

        invalid(input)
    }

    fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.name == name)
    }
}

fn invalid(input: &str) -> Classification {
    Classification::Error {
        message: format!("Invalid Cypress command: {}", input),
    }
}

/// Render the success effect, substituting the call argument into the
/// command's template.
fn render_effect(command: &CommandSpec, args: &str) -> String {
    let arg = extract_arg(args);
    match command.effect {
        Some(ref template) => template.replace("{arg}", &arg),
        None => format!("The `cy.{}` command ran successfully.", command.name),
    }
}

/// Pull the display form of the call argument: a single quoted string
/// loses its quotes, anything else passes through verbatim.
fn extract_arg(args: &str) -> String {
    let trimmed = args.trim();
    for quote in ['\'', '"'] {
        if let Some(inner) = trimmed
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            if !inner.contains(quote) {
                return inner.to_string();
            }
        }
    }
    trimmed.to_string()
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
