#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::classifier::{Classification, HelpLink};

fn success() -> Classification {
    Classification::Success {
        message: "cy.log('Yay!') // Logged message 'Yay!'".to_string(),
    }
}

fn help() -> Classification {
    Classification::Help {
        message: "Common Cypress commands and examples:".to_string(),
        links: vec![HelpLink {
            label: "official Cypress API documentation".to_string(),
            href: "https://docs.cypress.io/api/table-of-contents".to_string(),
        }],
    }
}

#[test]
fn text_rendering_labels_by_severity() {
    assert_eq!(
        render_text(&success()),
        "Success:\ncy.log('Yay!') // Logged message 'Yay!'"
    );
    assert_eq!(
        render_text(&Classification::Error {
            message: "Invalid Cypress command: cy.run()".to_string()
        }),
        "Error:\nInvalid Cypress command: cy.run()"
    );
    assert_eq!(
        render_text(&Classification::Warning {
            message: "The `cy.contains` command has not been implemented yet.".to_string()
        }),
        "Warning:\nThe `cy.contains` command has not been implemented yet."
    );
}

#[test]
fn help_text_carries_no_label() {
    let rendered = render_text(&help());
    assert!(rendered.starts_with("Common Cypress commands"));
    assert!(!rendered.contains("Help:"));
}

#[test]
fn json_result_wrapper_shape() {
    let result = ResultOutput::new(
        "cy.log('Yay!')",
        &success(),
        "11111111-2222-4333-8444-555555555555",
        1000,
    );
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["type"], "result");
    assert_eq!(json["subtype"], "success");
    assert_eq!(json["is_error"], false);
    assert_eq!(json["command"], "cy.log('Yay!')");
    assert_eq!(json["message"], "cy.log('Yay!') // Logged message 'Yay!'");
    assert_eq!(json["session_id"], "11111111-2222-4333-8444-555555555555");
    assert_eq!(json["duration_ms"], 1000);
    // No links on a non-help result
    assert!(json.get("links").is_none());
}

#[test]
fn json_error_results_set_is_error() {
    let result = ResultOutput::new(
        "cy.run()",
        &Classification::Error {
            message: "Invalid Cypress command: cy.run()".to_string(),
        },
        "s",
        0,
    );
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["subtype"], "error");
    assert_eq!(json["is_error"], true);
}

#[test]
fn json_warnings_are_not_errors() {
    let result = ResultOutput::new(
        "cy.contains('Login')",
        &Classification::Warning {
            message: "The `cy.contains` command has not been implemented yet.".to_string(),
        },
        "s",
        0,
    );
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["subtype"], "warning");
    assert_eq!(json["is_error"], false);
}

#[test]
fn json_help_results_carry_links() {
    let result = ResultOutput::new("help", &help(), "s", 0);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["subtype"], "help");
    assert_eq!(json["links"][0]["label"], "official Cypress API documentation");
    assert_eq!(
        json["links"][0]["href"],
        "https://docs.cypress.io/api/table-of-contents"
    );
}

#[test]
fn writer_emits_text_format() {
    let mut buffer = Vec::new();
    let mut writer = OutputWriter::new(&mut buffer, OutputFormat::Text);
    writer.write_result("cy.log('Yay!')", &success(), "s", 0).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    assert!(text.starts_with("Success:\n"));
}

#[test]
fn writer_emits_one_json_line() {
    let mut buffer = Vec::new();
    let mut writer = OutputWriter::new(&mut buffer, OutputFormat::Json);
    writer.write_result("help", &help(), "s", 10).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    assert_eq!(text.lines().count(), 1);
    let parsed: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
    assert_eq!(parsed["type"], "result");
}
