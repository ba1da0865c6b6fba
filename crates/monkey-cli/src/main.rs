// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Monkey command-line interface.
//!
//! This is the main entry point for the `monkey` command.

use clap::{Parser, Subcommand};
use miette::Result;

mod commands;
mod diagnostic;

/// Monkey: the front end of an interpreter for the Monkey language
#[derive(Debug, Parser)]
#[command(name = "monkey")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start an interactive REPL that prints the tokens of each line
    Repl,
}

fn main() -> Result<()> {
    // Initialize tracing subscriber only if RUST_LOG is explicitly set.
    // This keeps stdout/stderr clean for interactive REPL use.
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .try_init();
    }

    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    // The REPL is the default when no subcommand is given.
    let result = match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => commands::repl::run(),
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            // miette already provides nice error formatting, just display it
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}
