// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Error types for the Monkey front end.
//!
//! Parse errors carry source locations ([`Span`]) for precise diagnostics.
//! They integrate with [`miette`] for beautiful error reporting.
//!
//! The lexer itself has no error type: unrecognized characters become
//! [`TokenKind::Illegal`](super::TokenKind::Illegal) tokens and surface
//! here when the parser trips over them.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use ecow::{EcoString, eco_format};
use miette::Diagnostic;
use thiserror::Error;

use super::{Span, TokenKind};

/// A syntax error recorded during parsing.
///
/// The parser accumulates these instead of stopping: after reporting, it
/// skips to the next statement boundary and keeps going, so one pass can
/// surface every error in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic()]
pub struct ParseError {
    /// The human-readable error message.
    pub message: EcoString,
    /// The source location of the offending token.
    #[label("here")]
    pub span: Span,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(message: impl Into<EcoString>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    /// Creates the error for a failed peek-token expectation.
    #[must_use]
    pub fn unexpected_token(expected: TokenKind, actual: TokenKind, span: Span) -> Self {
        Self::new(
            eco_format!("expected next token to be {expected}, got {actual} instead"),
            span,
        )
    }

    /// Creates the error for an expression position with no prefix handler.
    #[must_use]
    pub fn no_prefix_parse_fn(kind: TokenKind, span: Span) -> Self {
        Self::new(
            eco_format!("no prefix parse function for {kind} found"),
            span,
        )
    }

    /// Creates the error for an integer literal that overflows `i64`.
    #[must_use]
    pub fn bad_integer_literal(literal: &str, span: Span) -> Self {
        Self::new(
            eco_format!("could not parse {literal:?} as integer"),
            span,
        )
    }
}
