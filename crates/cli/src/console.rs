// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Headless state machine for the simulated console page.
//!
//! Models the page state the original demo exposes: which screen is
//! showing, the editor buffer, the run lifecycle, cookie consent, and
//! the output collapse toggle. Rendering is the caller's concern; this
//! type only answers "what would the page show".

use crate::captcha::Captcha;
use crate::classifier::Classification;
use crate::commands::ConsentChoice;
use crate::output;

/// Which screen the session is on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Captcha,
    Console,
}

/// Cookie-consent state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Consent {
    Unset,
    Accepted,
    Declined,
}

/// Run lifecycle for the output area
#[derive(Clone, Debug, PartialEq)]
pub enum RunState {
    Idle,
    Running,
    Resolved(Classification),
}

/// Transient text shown while a run is in flight
pub const RUNNING_TEXT: &str = "Running... Please wait.";

/// The console page as a state machine
pub struct Console {
    screen: Screen,
    consent: Consent,
    editor: String,
    run_state: RunState,
    output_collapsed: bool,
    captcha: Option<Captcha>,
    skip_captcha: bool,
    rng: fastrand::Rng,
}

impl Console {
    pub fn new(skip_captcha: bool, consent: Option<ConsentChoice>, rng: fastrand::Rng) -> Self {
        Self {
            screen: Screen::Login,
            consent: match consent {
                Some(ConsentChoice::Accepted) => Consent::Accepted,
                Some(ConsentChoice::Declined) => Consent::Declined,
                None => Consent::Unset,
            },
            editor: String::new(),
            run_state: RunState::Idle,
            output_collapsed: false,
            captcha: None,
            skip_captcha,
            rng,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn consent(&self) -> Consent {
        self.consent
    }

    // ------------------------------------------------------------------
    // Login / logout
    // ------------------------------------------------------------------

    /// Log in from the login screen. A fresh session starts with an
    /// empty editor and no result, then faces the captcha gate unless
    /// it is skipped.
    pub fn login(&mut self) {
        if self.screen != Screen::Login {
            return;
        }
        self.editor.clear();
        self.run_state = RunState::Idle;
        if self.skip_captcha {
            self.screen = Screen::Console;
        } else {
            self.captcha = Some(Captcha::generate(&mut self.rng));
            self.screen = Screen::Captcha;
        }
    }

    /// Log out from any screen: back to login, editor and output
    /// cleared, run unavailable. Stored consent survives.
    pub fn logout(&mut self) {
        self.screen = Screen::Login;
        self.editor.clear();
        self.run_state = RunState::Idle;
        self.captcha = None;
    }

    /// Jump straight to the console screen, the harness shortcut the
    /// page exposes as `?skipCaptcha=true`.
    pub fn authenticate(&mut self) {
        self.screen = Screen::Console;
        self.captcha = None;
        self.editor.clear();
        self.run_state = RunState::Idle;
    }

    // ------------------------------------------------------------------
    // Captcha gate
    // ------------------------------------------------------------------

    pub fn captcha(&self) -> Option<&Captcha> {
        self.captcha.as_ref()
    }

    pub fn captcha_question(&self) -> Option<String> {
        self.captcha.as_ref().map(Captcha::question)
    }

    pub fn type_captcha_answer(&mut self, text: &str) {
        if let Some(ref mut captcha) = self.captcha {
            captcha.type_answer(text);
        }
    }

    pub fn captcha_verify_enabled(&self) -> bool {
        self.captcha
            .as_ref()
            .map(Captcha::verify_enabled)
            .unwrap_or(false)
    }

    pub fn captcha_error(&self) -> Option<&str> {
        self.captcha.as_ref().and_then(Captcha::error)
    }

    /// Verify the typed captcha answer; solving it enters the console.
    pub fn verify_captcha(&mut self) -> bool {
        let solved = match self.captcha {
            Some(ref mut captcha) => captcha.verify(),
            None => false,
        };
        if solved {
            self.captcha = None;
            self.screen = Screen::Console;
        }
        solved
    }

    // ------------------------------------------------------------------
    // Editor and run lifecycle
    // ------------------------------------------------------------------

    pub fn input(&self) -> &str {
        &self.editor
    }

    pub fn type_input(&mut self, text: &str) {
        self.editor.push_str(text);
    }

    pub fn clear_input(&mut self) {
        self.editor.clear();
    }

    /// Why the run action is unavailable, or None when it is enabled
    pub fn run_blocker(&self) -> Option<&'static str> {
        if self.screen != Screen::Console {
            Some("not logged in")
        } else if matches!(self.run_state, RunState::Running) {
            Some("run in flight")
        } else if self.editor.trim().is_empty() {
            Some("empty command")
        } else {
            None
        }
    }

    pub fn run_enabled(&self) -> bool {
        self.run_blocker().is_none()
    }

    /// Start a run: enters the Running state and hands back the command
    /// snapshot, or None when the run action is unavailable.
    pub fn begin_run(&mut self) -> Option<String> {
        if !self.run_enabled() {
            return None;
        }
        self.run_state = RunState::Running;
        Some(self.editor.clone())
    }

    /// Resolve the in-flight run. The result replaces any previous one;
    /// no history is retained.
    pub fn resolve(&mut self, classification: Classification) {
        self.run_state = RunState::Resolved(classification);
    }

    pub fn run_state(&self) -> &RunState {
        &self.run_state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.run_state, RunState::Running)
    }

    /// What the output area shows, or None when it is empty
    pub fn output_text(&self) -> Option<String> {
        match self.run_state {
            RunState::Idle => None,
            RunState::Running => Some(RUNNING_TEXT.to_string()),
            RunState::Resolved(ref classification) => Some(output::render_text(classification)),
        }
    }

    // ------------------------------------------------------------------
    // Cookie consent
    // ------------------------------------------------------------------

    /// The banner shows only on the console screen while no choice is
    /// stored; never on the login screen.
    pub fn banner_visible(&self) -> bool {
        self.screen == Screen::Console && self.consent == Consent::Unset
    }

    pub fn accept_cookies(&mut self) {
        self.consent = Consent::Accepted;
    }

    pub fn decline_cookies(&mut self) {
        self.consent = Consent::Declined;
    }

    // ------------------------------------------------------------------
    // Output collapse
    // ------------------------------------------------------------------

    pub fn output_collapsed(&self) -> bool {
        self.output_collapsed
    }

    /// Toggle the result display; the stored result is untouched.
    pub fn toggle_output(&mut self) {
        self.output_collapsed = !self.output_collapsed;
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
