// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output rendering for text and JSON modes.

use crate::classifier::{Classification, Severity};
use crate::cli::OutputFormat;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Exit codes for the binary
pub mod exit_codes {
    /// Successful simulation, regardless of the simulated outcome
    pub const SUCCESS: i32 = 0;
    /// Usage or configuration error
    pub const ERROR: i32 = 1;
}

/// Render a classification the way the page's output area shows it:
/// a severity label line, then the message. Help output carries no
/// label.
pub fn render_text(classification: &Classification) -> String {
    match classification.severity() {
        Severity::Help => classification.message().to_string(),
        severity => format!("{}:\n{}", severity.label(), classification.message()),
    }
}

/// Result wrapper for `--output-format json`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResultOutput {
    #[serde(rename = "type")]
    pub output_type: String,
    pub subtype: String,
    pub is_error: bool,
    pub command: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkOutput>,
    pub session_id: String,
    pub duration_ms: u64,
}

/// A documentation link in a JSON result
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LinkOutput {
    pub label: String,
    pub href: String,
}

impl ResultOutput {
    pub fn new(
        command: &str,
        classification: &Classification,
        session_id: &str,
        duration_ms: u64,
    ) -> Self {
        Self {
            output_type: "result".to_string(),
            subtype: classification.severity().as_str().to_string(),
            is_error: classification.severity() == Severity::Error,
            command: command.to_string(),
            message: classification.message().to_string(),
            links: classification
                .links()
                .iter()
                .map(|link| LinkOutput {
                    label: link.label.clone(),
                    href: link.href.clone(),
                })
                .collect(),
            session_id: session_id.to_string(),
            duration_ms,
        }
    }
}

/// Writes run results in the configured output format
pub struct OutputWriter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> OutputWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    /// Write one run result
    pub fn write_result(
        &mut self,
        command: &str,
        classification: &Classification,
        session_id: &str,
        duration_ms: u64,
    ) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.writer, "{}", render_text(classification))
            }
            OutputFormat::Json => {
                let result = ResultOutput::new(command, classification, session_id, duration_ms);
                writeln!(self.writer, "{}", to_io_json(&result)?)
            }
        }
    }
}

/// Serialize to JSON, mapping serialization failures into io::Error
fn to_io_json<T: Serialize>(value: &T) -> io::Result<String> {
    serde_json::to_string(value).map_err(io::Error::other)
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
