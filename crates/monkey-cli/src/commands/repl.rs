// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Interactive REPL for Monkey.
//!
//! This module implements the `monkey repl` command. Each line of input is
//! lexed fresh and every recognized token is printed on its own line in a
//! key-value record form, kind first, literal second:
//!
//! ```text
//! 🐒💻>> let x = 5;
//! {kind: LET, literal: "let"}
//! {kind: IDENT, literal: "x"}
//! {kind: =, literal: "="}
//! {kind: INT, literal: "5"}
//! {kind: ;, literal: ";"}
//! ```
//!
//! A few colon-commands sit alongside the token echo: `:parse` runs the
//! parser over its argument and prints the rendered program (or its
//! diagnostics), `:help` lists the commands, and `:exit` leaves. The loop
//! also exits on end-of-file (Ctrl-D).
//!
//! History is kept in memory for the session; nothing is persisted.

use miette::{IntoDiagnostic, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use monkey_core::source_analysis::{Lexer, parse};

use crate::diagnostic::ReplDiagnostic;

/// The REPL prompt.
const PROMPT: &str = "🐒💻>> ";

/// Runs the read-lex-print loop until end-of-file or `:exit`.
pub fn run() -> Result<()> {
    let mut rl = DefaultEditor::new().into_diagnostic()?;

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                match line.trim() {
                    ":exit" | ":quit" | ":q" => {
                        println!("Goodbye!");
                        break;
                    }
                    ":help" | ":h" | ":?" => print_help(),
                    command if command.starts_with(":parse") => {
                        let source = command.strip_prefix(":parse").unwrap_or("").trim();
                        if source.is_empty() {
                            println!("Usage: :parse <source>");
                        } else {
                            print_program(source);
                        }
                    }
                    _ => {
                        for rendered in render_tokens(&line) {
                            println!("{rendered}");
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C — drop the current line, keep the session
                println!();
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D — exit
                println!("Goodbye!");
                break;
            }
            Err(e) => {
                eprintln!("Readline error: {e}");
                break;
            }
        }
    }

    Ok(())
}

/// Lexes a line and renders each token (EOF excluded), one entry per line.
fn render_tokens(line: &str) -> Vec<String> {
    debug!(line, "lexing repl input");
    Lexer::new(line).map(|token| token.to_string()).collect()
}

/// Parses a source snippet and prints either the rendered program or its
/// diagnostics.
fn print_program(source: &str) {
    debug!(source, "parsing repl input");
    let (program, errors) = parse(source);
    if errors.is_empty() {
        println!("{program}");
        return;
    }
    for error in &errors {
        let report = miette::Report::new(ReplDiagnostic::new(error, source));
        eprintln!("{report:?}");
    }
}

fn print_help() {
    println!("Commands:");
    println!("  :parse <source>  parse the source and print the rendered program");
    println!("  :help            show this help");
    println!("  :exit            leave the REPL (also Ctrl-D)");
    println!();
    println!("Any other input is lexed and its tokens printed one per line.");
}
