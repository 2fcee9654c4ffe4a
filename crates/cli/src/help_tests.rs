#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::commands::default_commands;

#[test]
fn starts_with_the_heading() {
    let text = render(&default_commands());
    assert!(text.starts_with("Common Cypress commands and examples:"));
}

#[test]
fn ends_with_the_docs_pointer() {
    let text = render(&default_commands());
    assert!(text.contains(
        "For more commands and details, visit the official Cypress API documentation."
    ));
    assert!(text.ends_with(DOCS_URL));
}

#[test]
fn lists_examples_for_the_default_table() {
    let text = render(&default_commands());
    assert!(text.contains("cy.log('Hello, world!')"));
    assert!(text.contains("cy.visit('https://example.com')"));
    // Commands without an example fall back to the bare call form
    assert!(text.contains("cy.click()"));
}

#[test]
fn descriptions_start_in_the_same_column() {
    let commands = default_commands();
    let text = render(&commands);

    let mut columns = Vec::new();
    for command in &commands {
        let description = command.description.as_deref().unwrap();
        let line = text
            .lines()
            .find(|l| l.trim_end().ends_with(description))
            .unwrap();
        columns.push(line.len() - description.len());
    }

    assert!(!columns.is_empty());
    assert!(columns.iter().all(|&c| c == columns[0]));
}

#[test]
fn unimplemented_commands_without_description_say_so() {
    let commands = vec![crate::commands::CommandSpec {
        name: "wait".to_string(),
        implemented: false,
        effect: None,
        example: None,
        description: None,
    }];

    let text = render(&commands);
    assert!(text.contains("cy.wait()"));
    assert!(text.contains("Not implemented yet"));
}
