// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Parsing infrastructure for Monkey source code.
//!
//! This module contains the lexer, parser, and parse error definitions;
//! the AST lives in [`crate::ast`].
//!
//! # Lexical Analysis
//!
//! The [`Lexer`] converts source text into a stream of [`Token`]s. Each
//! token carries its verbatim source slice and its location via [`Span`].
//!
//! ```
//! use monkey_core::source_analysis::{Lexer, TokenKind};
//!
//! let tokens: Vec<_> = Lexer::new("x + 1").collect();
//! assert_eq!(tokens.len(), 3); // x, +, 1
//! ```
//!
//! See [`TokenKind`] for all supported syntactic elements.
//!
//! # Parsing
//!
//! The [`parse`] function converts source text into a
//! [`Program`](crate::ast::Program) AST. Binary operator precedence uses
//! Pratt parsing for correct associativity.
//!
//! # Error Handling
//!
//! The lexer uses error recovery: unrecognized characters become
//! [`TokenKind::Illegal`] tokens rather than stopping the scan. The parser
//! accumulates [`ParseError`]s and resynchronizes at statement boundaries;
//! it never fails outright.

mod error;
mod lexer;
mod parser;
mod span;
mod token;

// Property-based tests for the lexer and parser
#[cfg(test)]
mod lexer_property_tests;

pub use error::ParseError;
pub use lexer::{Lexer, lex, lex_with_eof};
pub use parser::{Parser, parse};
pub use span::Span;
pub use token::{Token, TokenKind, lookup_ident};
