// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Recursive descent parser for Monkey source code.
//!
//! This parser pulls tokens lazily from a [`Lexer`] and builds a
//! [`Program`] AST. Statements are parsed by dispatch on the current
//! token kind; expressions go through a Pratt core (top-down operator
//! precedence parsing).
//!
//! # Design Philosophy
//!
//! - **Error recovery is mandatory** - parsing MUST always produce a
//!   [`Program`]
//! - **Multiple errors** - report all errors, don't stop at the first
//! - **Precise spans** - every diagnostic points at the offending token
//! - **Synchronization points** - recover at statement boundaries
//!   (`;` or end of input)
//!
//! # Operator Precedence
//!
//! Expression parsing climbs the precedence ladder below. The comparison
//! against the peek token's precedence is strict (`<`), which makes every
//! operator left-associative.
//!
//! | Level       | Tokens     |
//! |-------------|------------|
//! | Equals      | `==` `!=`  |
//! | LessGreater | `<` `>`    |
//! | Sum         | `+` `-`    |
//! | Product     | `*` `/`    |
//! | Prefix      | `!x` `-x`  |
//!
//! Dispatch is a `match` on the token kind discriminant rather than
//! registered handler tables: the token set is closed, so the match is
//! total, simpler, and faster.
//!
//! # Usage
//!
//! ```
//! use monkey_core::source_analysis::parse;
//!
//! let (program, errors) = parse("1 + 2 * 3;");
//! assert!(errors.is_empty());
//! assert_eq!(program.to_string(), "(1 + (2 * 3))");
//! ```

use crate::ast::{
    BlockStatement, BooleanLiteral, Expression, ExpressionStatement, Identifier, IfExpression,
    InfixExpression, IntegerLiteral, LetStatement, PrefixExpression, Program, ReturnStatement,
    Statement,
};
use ecow::EcoString;

use super::{Lexer, ParseError, Token, TokenKind};

/// Operator precedence, lowest to highest.
///
/// Token kinds not in the [`precedence_of`] table sit at `Lowest`, which
/// stops the expression loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    /// Default for non-operator tokens.
    Lowest = 1,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and binary `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Operand of a prefix operator.
    Prefix,
    /// Call expressions `add(x, y)` are not parsed yet.
    #[allow(dead_code)]
    Call,
}

/// Returns the infix precedence for a token kind.
fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
        TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
        _ => Precedence::Lowest,
    }
}

/// Parses source text into a program.
///
/// This is the main entry point for parsing. It always returns a
/// [`Program`], even when the input has syntax errors; check the returned
/// error list before trusting the AST.
///
/// # Examples
///
/// ```
/// use monkey_core::source_analysis::parse;
///
/// let (program, errors) = parse("let x = 5;");
/// assert!(errors.is_empty());
/// assert_eq!(program.statements.len(), 1);
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (program, parser.errors)
}

/// The parser state: a lexer plus a two-token lookahead buffer.
pub struct Parser<'src> {
    /// The token source.
    lexer: Lexer<'src>,
    /// The token under consideration.
    current: Token,
    /// One token of lookahead.
    peek: Token,
    /// Accumulated syntax errors.
    errors: Vec<ParseError>,
}

impl<'src> Parser<'src> {
    /// Creates a parser over the given lexer.
    ///
    /// Pulls two tokens immediately so both `current` and `peek` are
    /// populated.
    #[must_use]
    pub fn new(mut lexer: Lexer<'src>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Self {
            lexer,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    /// Returns the syntax errors recorded so far.
    ///
    /// Empty for well-formed input; entries are only ever appended.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    /// Advances the lookahead buffer by one token.
    fn advance(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    /// Checks if the current token has the given kind.
    fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind() == kind
    }

    /// Checks if the peek token has the given kind.
    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind() == kind
    }

    /// Expects the peek token to have the given kind, advancing onto it if
    /// it does.
    ///
    /// Otherwise records an error at the peek token and recovers by
    /// skipping to the next statement boundary, leaving the caller free to
    /// abandon the current statement.
    fn expect_peek(&mut self, expected: TokenKind) -> bool {
        if self.peek_is(expected) {
            self.advance();
            return true;
        }
        self.errors.push(ParseError::unexpected_token(
            expected,
            self.peek.kind(),
            self.peek.span(),
        ));
        self.skip_to_statement_end();
        false
    }

    /// Synchronizes to a statement boundary: advances until the current
    /// token is `;` or EOF.
    fn skip_to_statement_end(&mut self) {
        while !self.current_is(TokenKind::Semicolon) && !self.current_is(TokenKind::Eof) {
            self.advance();
        }
    }

    /// Returns the precedence of the current token.
    fn current_precedence(&self) -> Precedence {
        precedence_of(self.current.kind())
    }

    /// Returns the precedence of the peek token.
    fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek.kind())
    }

    // ========================================================================
    // Statement Parsing
    // ========================================================================

    /// Parses the whole token stream into a program.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();
        while !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.advance();
        }
        Program::new(statements)
    }

    /// Parses one statement, dispatching on the current token kind.
    ///
    /// Returns `None` only when recovery discarded the statement; the
    /// corresponding error has already been recorded.
    fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind() {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => Some(self.parse_return_statement()),
            _ => Some(self.parse_expression_statement()),
        }
    }

    /// Parses `let <name> = ...;`.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier::new(self.current.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        // TODO: parse the value with parse_expression once let statements
        // take expressions; until then skip to the statement boundary.
        self.skip_to_statement_end();

        Some(Statement::Let(LetStatement::new(token, name, None)))
    }

    /// Parses `return ...;`.
    fn parse_return_statement(&mut self) -> Statement {
        let token = self.current.clone();

        // TODO: parse the value with parse_expression once return statements
        // take expressions; until then skip to the statement boundary.
        self.skip_to_statement_end();

        Statement::Return(ReturnStatement::new(token, None))
    }

    /// Parses a bare expression in statement position, with an optional
    /// trailing semicolon.
    ///
    /// The statement is kept even when the expression fails to parse, so
    /// callers can see where a statement was attempted.
    fn parse_expression_statement(&mut self) -> Statement {
        let token = self.current.clone();
        let expression = self.parse_expression(Precedence::Lowest);

        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Statement::Expression(ExpressionStatement::new(token, expression))
    }

    /// Parses a brace-delimited block.
    ///
    /// The current token on entry is `{`; on return the current token is
    /// the closing `}` (or EOF for an unterminated block) and the caller
    /// advances past it.
    fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.current.clone();
        let mut statements = Vec::new();

        self.advance();
        while !self.current_is(TokenKind::RBrace) && !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.advance();
        }

        BlockStatement::new(token, statements)
    }

    // ========================================================================
    // Expression Parsing (Pratt core)
    // ========================================================================

    /// Parses an expression at the given minimum precedence.
    ///
    /// Climbs while the peek token binds tighter than `precedence`; the
    /// strict comparison makes equal-precedence operators group to the
    /// left.
    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            self.advance();
            left = self.parse_infix_expression(left)?;
        }

        Some(left)
    }

    /// Parses the prefix position: literals, names, prefix operators,
    /// grouping, and conditionals.
    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.current.kind() {
            TokenKind::Ident => Some(Expression::Identifier(Identifier::new(
                self.current.clone(),
            ))),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::True | TokenKind::False => Some(Expression::Boolean(BooleanLiteral::new(
                self.current.clone(),
            ))),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            kind => {
                self.errors
                    .push(ParseError::no_prefix_parse_fn(kind, self.current.span()));
                None
            }
        }
    }

    /// Parses an `INT` token into an integer literal.
    ///
    /// The lexer guarantees a digit run, so the only failure mode is
    /// overflow past `i64::MAX`.
    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        match token.literal().parse::<i64>() {
            Ok(value) => Some(Expression::Integer(IntegerLiteral::new(token, value))),
            Err(_) => {
                self.errors
                    .push(ParseError::bad_integer_literal(token.literal(), token.span()));
                None
            }
        }
    }

    /// Parses `!<operand>` or `-<operand>`.
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let operator = EcoString::from(token.literal());

        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix(PrefixExpression::new(
            token, operator, right,
        )))
    }

    /// Parses the right-hand side of a binary operator.
    ///
    /// The current token is the operator; its precedence is captured
    /// before advancing so the recursive call climbs correctly.
    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let operator = EcoString::from(token.literal());
        let precedence = self.current_precedence();

        self.advance();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix(InfixExpression::new(
            token, left, operator, right,
        )))
    }

    /// Parses `( <expression> )`, returning the inner expression.
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.advance();
        let expression = self.parse_expression(Precedence::Lowest);

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        expression
    }

    /// Parses `if (<condition>) { ... }` with an optional `else { ... }`.
    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest);

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.advance();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        let condition = condition?;
        Some(Expression::If(IfExpression::new(
            token,
            condition,
            consequence,
            alternative,
        )))
    }
}
