// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cypress Console Simulator binary entry point.

use clap::Parser;

use cypressless::cli::Cli;
use cypressless::output::exit_codes;
use cypressless::output_diagnostic::print_error;
use cypressless::runtime::RuntimeBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let runtime = RuntimeBuilder::new(cli)
        .and_then(|builder| builder.with_config_from_cli())
        .and_then(|builder| builder.build());
    let mut runtime = match runtime {
        Ok(runtime) => runtime,
        Err(e) => {
            print_error(e);
            std::process::exit(exit_codes::ERROR);
        }
    };

    let result = if runtime.should_use_interactive() {
        runtime.run_interactive().await
    } else {
        runtime.execute_print_mode().await
    };

    if let Err(e) = result {
        print_error(e);
        std::process::exit(exit_codes::ERROR);
    }
    Ok(())
}
