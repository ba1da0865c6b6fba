// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for Monkey source code.
//!
//! This module converts source text into a stream of [`Token`]s. The lexer
//! is hand-written: a single pass with one character of lookahead, which is
//! all the two-character operators (`==`, `!=`) require.
//!
//! # Design Principles
//!
//! - **Error recovery**: Never fail on malformed input; emit
//!   [`TokenKind::Illegal`] and keep scanning
//! - **Literal fidelity**: Every token carries the verbatim source slice it
//!   matched, plus its exact [`Span`](super::Span)
//! - **ASCII only**: Identifiers are `A–Z a–z _` runs, integers are `0–9`
//!   runs; anything else outside the operator set is `Illegal`
//!
//! # Example
//!
//! ```
//! use monkey_core::source_analysis::{Lexer, TokenKind};
//!
//! let tokens: Vec<_> = Lexer::new("x + 1").collect();
//! assert_eq!(tokens.len(), 3); // x, +, 1 (EOF excluded from iterator)
//! ```

use std::iter::Peekable;
use std::str::CharIndices;

use ecow::EcoString;

use super::{Span, Token, TokenKind, lookup_ident};

/// A lexer that tokenizes Monkey source code.
///
/// The lexer produces tokens with their source spans and literals. It
/// implements [`Iterator`] for easy consumption; past end of input,
/// [`Lexer::next_token`] keeps returning [`TokenKind::Eof`].
pub struct Lexer<'src> {
    /// The source text being lexed.
    source: &'src str,
    /// Character iterator with byte positions.
    chars: Peekable<CharIndices<'src>>,
    /// Current byte position in source.
    position: usize,
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("position", &self.position)
            .field("remaining", &self.source.get(self.position..).unwrap_or(""))
            .finish()
    }
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            position: 0,
        }
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Consumes the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.position = pos + c.len_utf8();
        Some(c)
    }

    /// Consumes characters while the predicate is true.
    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Returns the current byte position.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "source files over 4GB are not supported"
    )]
    fn current_position(&self) -> u32 {
        self.position as u32
    }

    /// Creates a span from start to current position.
    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.current_position())
    }

    /// Extracts source text for a span.
    fn text_for(&self, span: Span) -> &'src str {
        &self.source[span.as_range()]
    }

    /// Skips whitespace (space, tab, carriage return, newline).
    fn skip_whitespace(&mut self) {
        self.advance_while(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
    }

    /// Lexes the next token.
    ///
    /// Once the input is exhausted this returns an EOF token with an empty
    /// literal, and keeps doing so on every subsequent call.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.current_position();
        let Some(c) = self.peek_char() else {
            return Token::new(TokenKind::Eof, EcoString::new(), self.span_from(start));
        };

        let kind = self.lex_token_kind(c);
        let span = self.span_from(start);
        Token::new(kind, self.text_for(span), span)
    }

    /// Lexes a token kind based on the first character.
    fn lex_token_kind(&mut self, c: char) -> TokenKind {
        match c {
            // Identifiers and keywords
            c if is_letter(c) => self.lex_identifier_or_keyword(),

            // Integer literals
            c if is_digit(c) => self.lex_number(),

            // Assignment or equality
            '=' => {
                self.advance();
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::Eq
                } else {
                    TokenKind::Assign
                }
            }

            // Logical not or inequality
            '!' => {
                self.advance();
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::NotEq
                } else {
                    TokenKind::Bang
                }
            }

            // Single-character operators
            '+' => {
                self.advance();
                TokenKind::Plus
            }
            '-' => {
                self.advance();
                TokenKind::Minus
            }
            '*' => {
                self.advance();
                TokenKind::Asterisk
            }
            '/' => {
                self.advance();
                TokenKind::Slash
            }
            '<' => {
                self.advance();
                TokenKind::Lt
            }
            '>' => {
                self.advance();
                TokenKind::Gt
            }

            // Delimiters
            ',' => {
                self.advance();
                TokenKind::Comma
            }
            ';' => {
                self.advance();
                TokenKind::Semicolon
            }
            '(' => {
                self.advance();
                TokenKind::LParen
            }
            ')' => {
                self.advance();
                TokenKind::RParen
            }
            '{' => {
                self.advance();
                TokenKind::LBrace
            }
            '}' => {
                self.advance();
                TokenKind::RBrace
            }

            // Unknown character - error recovery
            _ => {
                self.advance();
                TokenKind::Illegal
            }
        }
    }

    /// Lexes an identifier run, then classifies it against the keyword table.
    fn lex_identifier_or_keyword(&mut self) -> TokenKind {
        let start = self.current_position();
        self.advance_while(is_letter);
        lookup_ident(self.text_for(self.span_from(start)))
    }

    /// Lexes a maximal run of decimal digits.
    fn lex_number(&mut self) -> TokenKind {
        self.advance_while(is_digit);
        TokenKind::Int
    }
}

/// Returns true if the character can appear in an identifier.
///
/// Digits are deliberately excluded: `x1` lexes as the identifier `x`
/// followed by the integer `1`.
const fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if the character is a decimal digit.
const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind().is_eof() { None } else { Some(token) }
    }
}

/// Convenience function to lex source into a vector of tokens (excluding EOF).
///
/// For most use cases, prefer using the `Lexer` iterator directly.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Convenience function to lex source into a vector of tokens including EOF.
#[must_use]
pub fn lex_with_eof(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let is_eof = token.kind().is_eof();
        tokens.push(token);
        if is_eof {
            break;
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to lex and extract just the token kinds.
    fn lex_kinds(source: &str) -> Vec<TokenKind> {
        lex(source).into_iter().map(|t| t.kind()).collect()
    }

    /// Helper asserting the full (kind, literal) sequence including EOF.
    fn assert_tokens(source: &str, expected: &[(TokenKind, &str)]) {
        let tokens = lex_with_eof(source);
        assert_eq!(
            tokens.len(),
            expected.len(),
            "token count mismatch for {source:?}: {tokens:?}"
        );
        for (i, (token, (kind, literal))) in tokens.iter().zip(expected).enumerate() {
            assert_eq!(token.kind(), *kind, "kind mismatch at index {i}");
            assert_eq!(token.literal(), *literal, "literal mismatch at index {i}");
        }
    }

    #[test]
    fn lex_empty() {
        assert!(lex("").is_empty());
        assert!(lex("   \t\r\n  ").is_empty());
        assert_tokens("", &[(TokenKind::Eof, "")]);
    }

    #[test]
    fn lex_operators_and_delimiters() {
        assert_tokens(
            "=+(){},;",
            &[
                (TokenKind::Assign, "="),
                (TokenKind::Plus, "+"),
                (TokenKind::LParen, "("),
                (TokenKind::RParen, ")"),
                (TokenKind::LBrace, "{"),
                (TokenKind::RBrace, "}"),
                (TokenKind::Comma, ","),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn lex_let_bindings() {
        let source = "let five = 5;\n\
                      let ten = 10;\n\
                      let add = fn(x, y) { x + y; };\n\
                      let result = add(five, ten);";
        assert_tokens(
            source,
            &[
                (TokenKind::Let, "let"),
                (TokenKind::Ident, "five"),
                (TokenKind::Assign, "="),
                (TokenKind::Int, "5"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Let, "let"),
                (TokenKind::Ident, "ten"),
                (TokenKind::Assign, "="),
                (TokenKind::Int, "10"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Let, "let"),
                (TokenKind::Ident, "add"),
                (TokenKind::Assign, "="),
                (TokenKind::Function, "fn"),
                (TokenKind::LParen, "("),
                (TokenKind::Ident, "x"),
                (TokenKind::Comma, ","),
                (TokenKind::Ident, "y"),
                (TokenKind::RParen, ")"),
                (TokenKind::LBrace, "{"),
                (TokenKind::Ident, "x"),
                (TokenKind::Plus, "+"),
                (TokenKind::Ident, "y"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::RBrace, "}"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Let, "let"),
                (TokenKind::Ident, "result"),
                (TokenKind::Assign, "="),
                (TokenKind::Ident, "add"),
                (TokenKind::LParen, "("),
                (TokenKind::Ident, "five"),
                (TokenKind::Comma, ","),
                (TokenKind::Ident, "ten"),
                (TokenKind::RParen, ")"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn lex_comparison_operators() {
        assert_tokens(
            "5 < 10 > 5",
            &[
                (TokenKind::Int, "5"),
                (TokenKind::Lt, "<"),
                (TokenKind::Int, "10"),
                (TokenKind::Gt, ">"),
                (TokenKind::Int, "5"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn lex_two_character_operators() {
        assert_tokens(
            "10 == 10; 10 != 9;",
            &[
                (TokenKind::Int, "10"),
                (TokenKind::Eq, "=="),
                (TokenKind::Int, "10"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Int, "10"),
                (TokenKind::NotEq, "!="),
                (TokenKind::Int, "9"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Eof, ""),
            ],
        );

        // `=` directly followed by a non-`=` stays a lone assignment
        assert_eq!(
            lex_kinds("=!"),
            vec![TokenKind::Assign, TokenKind::Bang],
        );
        // `===` is `==` then `=`
        assert_eq!(
            lex_kinds("==="),
            vec![TokenKind::Eq, TokenKind::Assign],
        );
    }

    #[test]
    fn lex_keywords() {
        assert_eq!(
            lex_kinds("fn let true false if else return"),
            vec![
                TokenKind::Function,
                TokenKind::Let,
                TokenKind::True,
                TokenKind::False,
                TokenKind::If,
                TokenKind::Else,
                TokenKind::Return,
            ]
        );
    }

    #[test]
    fn lex_identifiers() {
        assert_eq!(
            lex_kinds("foo bar _private letter fnord"),
            vec![TokenKind::Ident; 5]
        );
    }

    #[test]
    fn lex_identifiers_exclude_digits() {
        // Identifier runs stop at the first digit.
        assert_tokens(
            "x1",
            &[
                (TokenKind::Ident, "x"),
                (TokenKind::Int, "1"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn lex_illegal_characters() {
        assert_tokens(
            "@#$",
            &[
                (TokenKind::Illegal, "@"),
                (TokenKind::Illegal, "#"),
                (TokenKind::Illegal, "$"),
                (TokenKind::Eof, ""),
            ],
        );
    }

    #[test]
    fn lex_illegal_multibyte_character() {
        let tokens = lex("§x");
        assert_eq!(tokens[0].kind(), TokenKind::Illegal);
        assert_eq!(tokens[0].literal(), "§");
        assert_eq!(tokens[1].kind(), TokenKind::Ident);
        assert_eq!(tokens[1].literal(), "x");
    }

    #[test]
    fn eof_is_repeatable() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().kind(), TokenKind::Ident);
        for _ in 0..3 {
            let token = lexer.next_token();
            assert_eq!(token.kind(), TokenKind::Eof);
            assert_eq!(token.literal(), "");
        }
    }

    #[test]
    fn literals_match_spans() {
        let source = "let ten = 10 != 9;";
        for token in lex(source) {
            assert_eq!(
                token.literal(),
                &source[token.span().as_range()],
                "literal should be the exact source slice"
            );
        }
    }
}
