#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use clap::Parser;

fn parse(args: &[&str]) -> Cli {
    let mut full = vec!["cypressless"];
    full.extend_from_slice(args);
    Cli::parse_from(full)
}

#[test]
fn parses_positional_command_with_print() {
    let cli = parse(&["-p", "cy.log('Yay!')"]);
    assert!(cli.print);
    assert_eq!(cli.command.as_deref(), Some("cy.log('Yay!')"));
    assert_eq!(cli.output_format, OutputFormat::Text);
}

#[test]
fn parses_simulator_flags() {
    let cli = parse(&[
        "--commands",
        "table.toml",
        "--capture",
        "runs.jsonl",
        "--delay-ms",
        "250",
        "--skip-captcha",
        "--cookie-consent",
        "declined",
        "--chances-of-error",
        "0.5",
        "--seed",
        "7",
        "-p",
        "help",
    ]);

    assert_eq!(cli.commands.as_deref(), Some("table.toml"));
    assert_eq!(cli.capture.as_deref(), Some("runs.jsonl"));
    assert_eq!(cli.delay_ms, Some(250));
    assert!(cli.skip_captcha);
    assert_eq!(cli.cookie_consent, Some(ConsentArg::Declined));
    assert_eq!(cli.chances_of_error, Some(0.5));
    assert_eq!(cli.seed, Some(7));
}

#[test]
fn parses_json_output_format() {
    let cli = parse(&["--output-format", "json", "-p", "help"]);
    assert_eq!(cli.output_format, OutputFormat::Json);
}

#[test]
fn validate_accepts_defaults() {
    assert!(parse(&["-p", "help"]).validate().is_ok());
}

#[test]
fn validate_rejects_out_of_range_error_chance() {
    let cli = parse(&["--chances-of-error", "1.5", "-p", "help"]);
    let err = cli.validate().unwrap_err();
    assert!(err.contains("--chances-of-error must be between 0.0 and 1.0"));
}

#[test]
fn validate_rejects_malformed_session_id() {
    let cli = parse(&["--session-id", "not-a-uuid", "-p", "help"]);
    let err = cli.validate().unwrap_err();
    assert!(err.contains("must be a valid UUID"));
}

#[test]
fn interactive_flag_forces_interactive_mode() {
    let cli = parse(&["--interactive"]);
    assert!(cli.should_use_interactive());
}

#[test]
fn no_interactive_wins_over_interactive() {
    let cli = parse(&["--interactive", "--no-interactive"]);
    assert!(!cli.should_use_interactive());
}

#[test]
fn print_mode_is_never_interactive_by_default() {
    let cli = parse(&["-p", "help"]);
    assert!(!cli.should_use_interactive());
}

#[test]
fn consent_arg_maps_to_consent_choice() {
    use crate::commands::ConsentChoice;
    assert_eq!(ConsentChoice::from(ConsentArg::Accepted), ConsentChoice::Accepted);
    assert_eq!(ConsentChoice::from(ConsentArg::Declined), ConsentChoice::Declined);
}
