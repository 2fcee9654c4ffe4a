// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session context merging the config file with CLI args.

use crate::cli::Cli;
use crate::commands::{ConsentChoice, SimulatorConfig};
use std::time::Duration;
use uuid::Uuid;

/// Merged session knobs, with defaults applied.
///
/// Precedence rules:
/// - CLI args override config file
/// - Config file overrides defaults
#[derive(Clone, Debug)]
pub struct SessionContext {
    /// Session UUID reported in output and capture
    pub session_id: Uuid,
    /// Running-state delay before a result resolves
    pub running_delay: Duration,
    /// Probability in [0, 1] of an injected run failure
    pub chances_of_error: f64,
    /// RNG seed; None means a random session
    pub seed: Option<u64>,
    /// Whether login bypasses the captcha gate
    pub skip_captcha: bool,
    /// Preset cookie consent, as if previously stored
    pub cookie_consent: Option<ConsentChoice>,
}

impl SessionContext {
    /// Build context from config and CLI, applying precedence rules:
    /// CLI args > config file > defaults
    pub fn build(config: Option<&SimulatorConfig>, cli: &Cli) -> Self {
        let session_id = cli
            .session_id
            .as_ref()
            .and_then(|s| Uuid::parse_str(s).ok())
            .or_else(|| {
                config
                    .and_then(|c| c.session.session_id.as_ref())
                    .and_then(|s| Uuid::parse_str(s).ok())
            })
            .unwrap_or_else(Uuid::new_v4);

        let delay_ms = cli
            .delay_ms
            .unwrap_or_else(|| config.map(|c| c.timing.running_delay_ms).unwrap_or(0));

        let chances_of_error = cli
            .chances_of_error
            .unwrap_or_else(|| config.map(|c| c.simulation.chances_of_error).unwrap_or(0.0));

        let seed = cli.seed.or_else(|| config.and_then(|c| c.simulation.seed));

        // Boolean presets combine: either side may opt in
        let skip_captcha = cli.skip_captcha || config.map(|c| c.session.skip_captcha).unwrap_or(false);

        let cookie_consent = cli
            .cookie_consent
            .map(ConsentChoice::from)
            .or_else(|| config.and_then(|c| c.session.cookie_consent));

        Self {
            session_id,
            running_delay: Duration::from_millis(delay_ms),
            chances_of_error,
            seed,
            skip_captcha,
            cookie_consent,
        }
    }

    /// The session RNG: seeded when a seed was given, random otherwise
    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
