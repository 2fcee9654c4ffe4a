// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help output for the `help` command.
//!
//! Renders the command table as an aligned two-column listing, ending
//! with a pointer to the official documentation.

use crate::commands::{CommandSpec, DOCS_LABEL, DOCS_URL};

/// Heading line of the help output
pub const HELP_HEADING: &str = "Common Cypress commands and examples:";

/// Render the help text for a command table.
pub fn render(commands: &[CommandSpec]) -> String {
    let mut out = String::new();
    out.push_str(HELP_HEADING);
    out.push_str("\n\n");

    // Align descriptions past the longest entry: 2 + max(left) + 2
    let desc_col = 2 + commands.iter().map(|c| left_column(c).len()).max().unwrap_or(0) + 2;

    for command in commands {
        let left = left_column(command);
        out.push_str("  ");
        out.push_str(&left);
        if let Some(description) = describe(command) {
            for _ in left.len() + 2..desc_col {
                out.push(' ');
            }
            out.push_str(&description);
        }
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&format!(
        "For more commands and details, visit the {}.\n{}",
        DOCS_LABEL, DOCS_URL
    ));
    out
}

fn left_column(command: &CommandSpec) -> String {
    match command.example {
        Some(ref example) => example.clone(),
        None => format!("cy.{}()", command.name),
    }
}

fn describe(command: &CommandSpec) -> Option<String> {
    if let Some(ref description) = command.description {
        return Some(description.clone());
    }
    if !command.implemented {
        return Some("Not implemented yet".to_string());
    }
    None
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
