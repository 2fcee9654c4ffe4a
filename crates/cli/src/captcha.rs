// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captcha gate shown between login and the console.
//!
//! An addition challenge with a typed answer field. Verify is only
//! available while the field is non-empty; a wrong answer records the
//! error text and resets the field to its initial state.

/// Error text shown after a wrong answer
pub const INCORRECT_ANSWER: &str = "Incorrect answer, please try again.";

/// One addition challenge plus its answer field
#[derive(Clone, Debug)]
pub struct Captcha {
    a: u32,
    b: u32,
    answer: String,
    error: Option<String>,
}

impl Captcha {
    /// Generate a challenge with single-digit operands
    pub fn generate(rng: &mut fastrand::Rng) -> Self {
        Self {
            a: rng.u32(1..=9),
            b: rng.u32(1..=9),
            answer: String::new(),
            error: None,
        }
    }

    /// The question shown to the user
    pub fn question(&self) -> String {
        format!("What is {} + {}?", self.a, self.b)
    }

    /// The expected answer. The simulator is a test double; exposing the
    /// solution lets harnesses drive the gate deterministically.
    pub fn solution(&self) -> u32 {
        self.a + self.b
    }

    /// Append text to the answer field
    pub fn type_answer(&mut self, text: &str) {
        self.answer.push_str(text);
    }

    /// Clear the answer field
    pub fn clear_answer(&mut self) {
        self.answer.clear();
    }

    /// Current answer field contents
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Verify is enabled only while the answer field is non-blank
    pub fn verify_enabled(&self) -> bool {
        !self.answer.trim().is_empty()
    }

    /// Error text from the last wrong answer, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Check the typed answer. Returns true when solved; a wrong answer
    /// records [`INCORRECT_ANSWER`] and clears the field.
    pub fn verify(&mut self) -> bool {
        if !self.verify_enabled() {
            return false;
        }

        let solved = self
            .answer
            .trim()
            .parse::<u64>()
            .map(|n| n == u64::from(self.solution()))
            .unwrap_or(false);

        if solved {
            self.error = None;
        } else {
            self.error = Some(INCORRECT_ANSWER.to_string());
            self.answer.clear();
        }
        solved
    }
}

#[cfg(test)]
#[path = "captcha_tests.rs"]
mod tests;
