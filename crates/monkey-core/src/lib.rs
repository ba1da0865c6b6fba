// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Monkey language front end.
//!
//! This crate contains the front half of a Monkey interpreter:
//! - Lexical analysis (tokenization)
//! - Parsing (AST construction via Pratt operator precedence)
//!
//! Evaluation is out of scope: the product of this crate is a
//! [`Program`](ast::Program) plus any syntax errors recorded along the
//! way. Both the lexer and the parser recover from malformed input, so a
//! single pass reports every error it can find.

pub mod ast;
pub mod source_analysis;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::ast::{Expression, Identifier, Program, Statement};
    pub use crate::source_analysis::{Lexer, ParseError, Parser, Span, Token, TokenKind, parse};
}
