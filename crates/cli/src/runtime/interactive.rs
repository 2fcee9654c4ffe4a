// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive line-oriented console session.
//!
//! Walks the same screens the page shows: login, the captcha gate, the
//! cookie banner, then a read-run-print loop with the transient Running
//! line. `:logout` returns to the login screen and `:exit` (or EOF)
//! ends the session.

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::capture::RunSource;
use crate::console::{Screen, RUNNING_TEXT};
use crate::output::render_text;

use super::Runtime;

impl Runtime {
    /// Run an interactive session on stdin/stdout.
    pub async fn run_interactive(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let reader = BufReader::new(tokio::io::stdin());
        let mut stdout = io::stdout();
        self.interactive_session(reader, &mut stdout).await
    }

    /// Drive an interactive session over arbitrary streams (tests feed
    /// scripted input through this).
    pub async fn interactive_session<R, W>(
        &mut self,
        mut reader: R,
        out: &mut W,
    ) -> Result<(), Box<dyn std::error::Error>>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        writeln!(out, "Cypress Simulator")?;

        'session: loop {
            // Login screen
            writeln!(out, "Press Enter to log in (Ctrl-D quits).")?;
            if read_line(&mut reader).await?.is_none() {
                break;
            }
            self.console_mut().login();

            // Captcha gate
            while self.console().screen() == Screen::Captcha {
                if let Some(question) = self.console().captcha_question() {
                    writeln!(out, "{}", question)?;
                }
                write!(out, "Answer: ")?;
                out.flush()?;
                let answer = match read_line(&mut reader).await? {
                    Some(line) => line.trim().to_string(),
                    None => break 'session,
                };
                if answer.is_empty() {
                    // Verify stays disabled until something is typed
                    continue;
                }
                self.console_mut().type_captcha_answer(&answer);
                if !self.console_mut().verify_captcha() {
                    if let Some(error) = self.console().captcha_error() {
                        writeln!(out, "{}", error)?;
                    }
                }
            }

            // Cookie banner
            if self.console().banner_visible() {
                writeln!(out, "This site uses cookies. Type accept or decline.")?;
                loop {
                    let choice = match read_line(&mut reader).await? {
                        Some(line) => line.trim().to_string(),
                        None => break 'session,
                    };
                    match choice.as_str() {
                        "accept" => {
                            self.console_mut().accept_cookies();
                            break;
                        }
                        "decline" => {
                            self.console_mut().decline_cookies();
                            break;
                        }
                        _ => writeln!(out, "Type accept or decline.")?,
                    }
                }
            }

            // Command loop
            loop {
                write!(out, "> ")?;
                out.flush()?;
                let line = match read_line(&mut reader).await? {
                    Some(line) => line,
                    None => break 'session,
                };
                match line.trim() {
                    "" => continue,
                    ":exit" => break 'session,
                    ":logout" => {
                        self.console_mut().logout();
                        writeln!(out, "Logged out.")?;
                        continue 'session;
                    }
                    command => {
                        writeln!(out, "{}", RUNNING_TEXT)?;
                        out.flush()?;
                        if let Some(outcome) = self.submit(command, RunSource::Interactive).await {
                            writeln!(out, "{}", render_text(&outcome.classification))?;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

async fn read_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    let n = reader.read_line(&mut line).await?;
    if n == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

#[cfg(test)]
#[path = "interactive_tests.rs"]
mod tests;
