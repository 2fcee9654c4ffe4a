// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Interactive mode through the binary with piped stdin.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

fn cypressless_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_cypressless"))
}

fn run_session(args: &[&str], script: &str) -> (String, String, Option<i32>) {
    let mut child = Command::new(cypressless_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn cypressless");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(script.as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code(),
    )
}

#[test]
fn walks_login_banner_and_command_loop() {
    let (stdout, stderr, code) = run_session(
        &["--interactive", "--skip-captcha"],
        "\naccept\ncy.log('Yay!')\n:exit\n",
    );

    assert_eq!(code, Some(0), "stderr: {}", stderr);
    assert!(stdout.contains("Cypress Simulator"));
    assert!(stdout.contains("Press Enter to log in"));
    assert!(stdout.contains("This site uses cookies"));
    assert!(stdout.contains("Running... Please wait."));
    assert!(stdout.contains("cy.log('Yay!') // Logged message 'Yay!'"));
}

#[test]
fn preset_consent_skips_the_banner() {
    let (stdout, _stderr, code) = run_session(
        &[
            "--interactive",
            "--skip-captcha",
            "--cookie-consent",
            "accepted",
        ],
        "\nhelp\n:exit\n",
    );

    assert_eq!(code, Some(0));
    assert!(!stdout.contains("This site uses cookies"));
    assert!(stdout.contains("Common Cypress commands and examples:"));
}

#[test]
fn logout_restarts_the_login_flow() {
    let (stdout, _stderr, code) = run_session(
        &[
            "--interactive",
            "--skip-captcha",
            "--cookie-consent",
            "accepted",
        ],
        "\ncy.visit\n:logout\n\ncy.run()\n:exit\n",
    );

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Missing parentheses on `cy.visit` command"));
    assert!(stdout.contains("Logged out."));
    assert_eq!(stdout.matches("Press Enter to log in").count(), 2);
    assert!(stdout.contains("Invalid Cypress command: cy.run()"));
}

#[test]
fn eof_ends_the_session() {
    let (stdout, _stderr, code) = run_session(&["--interactive", "--skip-captcha"], "");

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Press Enter to log in"));
}

#[test]
fn captured_interactive_runs_are_tagged_with_their_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("runs.jsonl");

    let (_stdout, _stderr, code) = run_session(
        &[
            "--interactive",
            "--skip-captcha",
            "--cookie-consent",
            "accepted",
            "--capture",
            path.to_str().unwrap(),
        ],
        "\ncy.log('Yay!')\n:exit\n",
    );

    assert_eq!(code, Some(0));
    let content = std::fs::read_to_string(&path).unwrap();
    let record: serde_json::Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
    assert_eq!(record["input"]["source"], "interactive");
}
