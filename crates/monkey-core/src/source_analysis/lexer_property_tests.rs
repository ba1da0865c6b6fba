// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for the Monkey lexer.
//!
//! These tests use `proptest` to verify lexer invariants over generated inputs:
//!
//! 1. **Lexer never panics** — arbitrary string input always produces tokens
//! 2. **Token spans within input** — all token spans satisfy `end <= input.len()`
//! 3. **Token spans are non-overlapping** — token spans don't overlap
//! 4. **Literal fidelity** — every literal is the exact source slice of its span
//! 5. **EOF is always last** — `lex_with_eof` always ends with EOF
//! 6. **Lexer is deterministic** — same input always produces same tokens
//! 7. **Valid fragments produce no errors** — known-valid inputs lex cleanly

use proptest::prelude::*;

use super::lexer::{lex, lex_with_eof};

// ============================================================================
// Generators
// ============================================================================

/// Known-valid single-token fragments that should lex without `Illegal`s.
const VALID_SINGLE_TOKENS: &[&str] = &[
    "42",
    "0",
    "x",
    "foobar",
    "_private",
    "fn",
    "let",
    "true",
    "false",
    "if",
    "else",
    "return",
    "=",
    "==",
    "!",
    "!=",
    "+",
    "-",
    "*",
    "/",
    "<",
    ">",
    ",",
    ";",
    "(",
    ")",
    "{",
    "}",
];

/// Multi-token valid inputs that should lex cleanly.
const VALID_EXPRESSIONS: &[&str] = &[
    "x + 1",
    "let five = 5;",
    "fn(x, y) { x + y; }",
    "(3 + 4) * 5",
    "!true == false",
    "if (x < y) { x } else { y }",
    "return 10 != 9;",
];

fn valid_single_token() -> impl Strategy<Value = String> {
    prop::sample::select(VALID_SINGLE_TOKENS).prop_map(std::string::ToString::to_string)
}

fn valid_expression() -> impl Strategy<Value = String> {
    prop::sample::select(VALID_EXPRESSIONS).prop_map(std::string::ToString::to_string)
}

// ============================================================================
// Property tests
// ============================================================================

/// Default is 512 cases; override via `PROPTEST_CASES` env var for nightly runs.
fn proptest_config() -> ProptestConfig {
    let default = ProptestConfig::default();
    ProptestConfig {
        cases: default.cases.max(512),
        ..default
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Property 1: Lexer never panics on arbitrary string input.
    #[test]
    fn lexer_never_panics(input in "\\PC{0,500}") {
        let _tokens = lex(&input);
    }

    /// Property 1b: Lexer never panics with lex_with_eof on arbitrary input.
    #[test]
    fn lexer_with_eof_never_panics(input in "\\PC{0,500}") {
        let _tokens = lex_with_eof(&input);
    }

    /// Property 2: All token spans are within input bounds.
    #[test]
    fn token_spans_within_input(input in "\\PC{0,500}") {
        let tokens = lex_with_eof(&input);
        let input_len = u32::try_from(input.len()).unwrap_or(u32::MAX);
        for token in &tokens {
            let span = token.span();
            prop_assert!(
                span.end() <= input_len,
                "Token {:?} span end {} exceeds input length {} for input {:?}",
                token.kind(),
                span.end(),
                input_len,
                input,
            );
            prop_assert!(
                span.start() <= span.end(),
                "Token {:?} span start {} > end {} for input {:?}",
                token.kind(),
                span.start(),
                span.end(),
                input,
            );
        }
    }

    /// Property 3: Token spans are non-overlapping and ordered.
    #[test]
    fn token_spans_non_overlapping(input in "\\PC{0,500}") {
        let tokens = lex(&input);
        for window in tokens.windows(2) {
            let prev = &window[0];
            let next = &window[1];
            prop_assert!(
                next.span().start() >= prev.span().end(),
                "Overlapping spans: {:?} at {:?} and {:?} at {:?} for input {:?}",
                prev.kind(),
                prev.span(),
                next.kind(),
                next.span(),
                input,
            );
        }
    }

    /// Property 4: Every literal is the exact source slice of its span.
    #[test]
    fn literals_are_source_slices(input in "\\PC{0,500}") {
        let tokens = lex_with_eof(&input);
        for token in &tokens {
            prop_assert_eq!(
                token.literal(),
                &input[token.span().as_range()],
                "Literal of {:?} diverges from its span for input {:?}",
                token.kind(),
                input,
            );
        }
    }

    /// Property 5: lex_with_eof always ends with EOF.
    #[test]
    fn eof_always_last(input in "\\PC{0,500}") {
        let tokens = lex_with_eof(&input);
        prop_assert!(!tokens.is_empty(), "lex_with_eof should never return empty");
        prop_assert!(
            tokens.last().unwrap().kind().is_eof(),
            "Last token should be EOF, got {:?} for input {:?}",
            tokens.last().unwrap().kind(),
            input,
        );
    }

    /// Property 6: Lexer is deterministic — same input, same tokens.
    #[test]
    fn lexer_deterministic(input in "\\PC{0,200}") {
        let tokens1 = lex_with_eof(&input);
        let tokens2 = lex_with_eof(&input);
        prop_assert_eq!(&tokens1, &tokens2, "Tokens differ for input {:?}", input);
    }

    /// Property 7: Known-valid single tokens produce no Illegal tokens.
    #[test]
    fn valid_tokens_no_illegals(input in valid_single_token()) {
        let tokens = lex(&input);
        prop_assert_eq!(tokens.len(), 1, "Expected one token for {:?}", input);
        prop_assert!(
            !tokens[0].kind().is_illegal(),
            "Valid input {:?} produced an Illegal token",
            input,
        );
    }

    /// Property 8: Known-valid expressions produce no Illegal tokens.
    #[test]
    fn valid_expressions_no_illegals(input in valid_expression()) {
        for token in lex(&input) {
            prop_assert!(
                !token.kind().is_illegal(),
                "Valid expression {:?} produced Illegal token at {:?}",
                input,
                token.span(),
            );
        }
    }

    /// Property 9: Non-whitespace input produces at least one token.
    #[test]
    fn nonempty_input_produces_tokens(input in "[^ \t\n\r]{1,100}") {
        let tokens = lex(&input);
        prop_assert!(
            !tokens.is_empty(),
            "Non-whitespace input {:?} produced zero tokens (excluding EOF)",
            input,
        );
    }
}
