// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Beautiful error diagnostics using miette.
//!
//! Converts monkey-core parse errors into miette-formatted reports with
//! source code context and an arrow pointing at the offending token.

use miette::{Diagnostic, SourceSpan};
use monkey_core::source_analysis::ParseError;

/// A parse diagnostic with rich formatting.
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic(code(monkey::parse))]
pub struct ReplDiagnostic {
    /// Human-readable error message.
    pub message: String,
    /// Source code for context.
    #[source_code]
    pub src: miette::NamedSource<String>,
    /// Location of the error.
    #[label("here")]
    pub span: SourceSpan,
}

impl ReplDiagnostic {
    /// Creates a diagnostic from a core parse error and its source text.
    pub fn new(error: &ParseError, source: &str) -> Self {
        Self {
            message: error.message.to_string(),
            src: miette::NamedSource::new("repl", source.to_string()),
            span: error.span.into(),
        }
    }
}
