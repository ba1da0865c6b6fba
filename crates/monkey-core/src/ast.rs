// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Abstract Syntax Tree (AST) definitions for Monkey.
//!
//! The AST represents the structure of a Monkey program after parsing.
//! Statements and expressions are modelled as tagged unions ([`Statement`],
//! [`Expression`]) of owned node structs; the tree has straightforward
//! unique parent-to-child ownership and no back-references.
//!
//! Every node carries the [`Token`] that introduced it, so
//! [`token_literal`](Statement::token_literal) can always recover the
//! originating source word. Nodes are never mutated after construction.
//!
//! # Rendering
//!
//! Every node implements [`std::fmt::Display`], producing a compact,
//! fully parenthesized rendering of expressions. This is the debugging
//! surface and a testable property: operator precedence is visible in
//! the parenthesization.
//!
//! ```
//! use monkey_core::source_analysis::parse;
//!
//! let (program, errors) = parse("a + b * c");
//! assert!(errors.is_empty());
//! assert_eq!(program.to_string(), "(a + (b * c))");
//! ```

use ecow::EcoString;

use crate::source_analysis::{Token, TokenKind};

/// Top-level container for a parsed Monkey program.
///
/// A program is an ordered sequence of statements. The parser always
/// returns one, even for input with syntax errors; statements that could
/// not be parsed are simply absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// The top-level statements, in source order.
    pub statements: Vec<Statement>,
}

impl Program {
    /// Creates a program from its statements.
    #[must_use]
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Returns the literal of the first statement's token, or the empty
    /// string for an empty program.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map_or("", Statement::token_literal)
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// A statement: one of the four statement forms of Monkey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A `let` binding: `let x = 5;`
    Let(LetStatement),
    /// A `return` statement: `return 5;`
    Return(ReturnStatement),
    /// A bare expression in statement position: `x + 1;`
    Expression(ExpressionStatement),
    /// A brace-delimited statement sequence.
    Block(BlockStatement),
}

impl Statement {
    /// Returns the literal of the token that introduced this statement.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        match self {
            Self::Let(s) => s.token_literal(),
            Self::Return(s) => s.token_literal(),
            Self::Expression(s) => s.token_literal(),
            Self::Block(s) => s.token_literal(),
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Let(s) => write!(f, "{s}"),
            Self::Return(s) => write!(f, "{s}"),
            Self::Expression(s) => write!(f, "{s}"),
            Self::Block(s) => write!(f, "{s}"),
        }
    }
}

/// An expression: one of the six expression forms of Monkey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// A name: `foobar`
    Identifier(Identifier),
    /// An integer literal: `5`
    Integer(IntegerLiteral),
    /// A boolean literal: `true`, `false`
    Boolean(BooleanLiteral),
    /// A prefix operator application: `!ok`, `-5`
    Prefix(PrefixExpression),
    /// A binary operator application: `a + b`
    Infix(InfixExpression),
    /// A conditional: `if (a < b) { a } else { b }`
    If(IfExpression),
}

impl Expression {
    /// Returns the literal of the token that introduced this expression.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        match self {
            Self::Identifier(e) => e.token_literal(),
            Self::Integer(e) => e.token_literal(),
            Self::Boolean(e) => e.token_literal(),
            Self::Prefix(e) => e.token_literal(),
            Self::Infix(e) => e.token_literal(),
            Self::If(e) => e.token_literal(),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(e) => write!(f, "{e}"),
            Self::Integer(e) => write!(f, "{e}"),
            Self::Boolean(e) => write!(f, "{e}"),
            Self::Prefix(e) => write!(f, "{e}"),
            Self::Infix(e) => write!(f, "{e}"),
            Self::If(e) => write!(f, "{e}"),
        }
    }
}

/// A `let` binding.
///
/// The value slot is optional: value expressions are skipped by the
/// current parser (see the parser module), so it stays `None` until that
/// gap is closed. Rendering still frames the slot: `let x = ;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetStatement {
    /// The `let` token.
    pub token: Token,
    /// The bound name.
    pub name: Identifier,
    /// The bound value, when parsed.
    pub value: Option<Expression>,
}

impl LetStatement {
    /// Creates a new `let` statement.
    #[must_use]
    pub fn new(token: Token, name: Identifier, value: Option<Expression>) -> Self {
        Self { token, name, value }
    }

    /// Returns the literal of the `let` token.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl std::fmt::Display for LetStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = ", self.token_literal(), self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{value}")?;
        }
        write!(f, ";")
    }
}

/// A `return` statement.
///
/// As with [`LetStatement`], the value slot is present but unparsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStatement {
    /// The `return` token.
    pub token: Token,
    /// The returned value, when parsed.
    pub value: Option<Expression>,
}

impl ReturnStatement {
    /// Creates a new `return` statement.
    #[must_use]
    pub fn new(token: Token, value: Option<Expression>) -> Self {
        Self { token, value }
    }

    /// Returns the literal of the `return` token.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl std::fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", self.token_literal())?;
        if let Some(value) = &self.value {
            write!(f, "{value}")?;
        }
        write!(f, ";")
    }
}

/// An expression in statement position.
///
/// The expression is `None` when parsing it failed; the statement is kept
/// so the error is visible in the statement count, and it renders as the
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatement {
    /// The first token of the expression.
    pub token: Token,
    /// The wrapped expression, if it parsed.
    pub expression: Option<Expression>,
}

impl ExpressionStatement {
    /// Creates a new expression statement.
    #[must_use]
    pub fn new(token: Token, expression: Option<Expression>) -> Self {
        Self { token, expression }
    }

    /// Returns the literal of the expression's first token.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl std::fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(expression) = &self.expression {
            write!(f, "{expression}")?;
        }
        Ok(())
    }
}

/// A brace-delimited sequence of statements, the body of an `if` branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStatement {
    /// The `{` token.
    pub token: Token,
    /// The statements inside the braces.
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    /// Creates a new block.
    #[must_use]
    pub fn new(token: Token, statements: Vec<Statement>) -> Self {
        Self { token, statements }
    }

    /// Returns the literal of the `{` token.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl std::fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// A name in expression position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The `IDENT` token.
    pub token: Token,
    /// The name itself.
    pub value: EcoString,
}

impl Identifier {
    /// Creates an identifier from its token; the value is the token literal.
    #[must_use]
    pub fn new(token: Token) -> Self {
        let value = EcoString::from(token.literal());
        Self { token, value }
    }

    /// Returns the literal of the `IDENT` token.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// A 64-bit signed integer literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerLiteral {
    /// The `INT` token.
    pub token: Token,
    /// The parsed value.
    pub value: i64,
}

impl IntegerLiteral {
    /// Creates an integer literal from its token and parsed value.
    #[must_use]
    pub fn new(token: Token, value: i64) -> Self {
        Self { token, value }
    }

    /// Returns the literal of the `INT` token.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl std::fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token.literal())
    }
}

/// A boolean literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanLiteral {
    /// The `TRUE` or `FALSE` token.
    pub token: Token,
    /// The literal's value.
    pub value: bool,
}

impl BooleanLiteral {
    /// Creates a boolean literal from its token; the value is derived from
    /// the token kind.
    #[must_use]
    pub fn new(token: Token) -> Self {
        let value = token.kind() == TokenKind::True;
        Self { token, value }
    }

    /// Returns the literal of the boolean token.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl std::fmt::Display for BooleanLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token.literal())
    }
}

/// A prefix operator applied to an operand: `!ok`, `-5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixExpression {
    /// The operator token (`!` or `-`).
    pub token: Token,
    /// The operator as written.
    pub operator: EcoString,
    /// The operand.
    pub right: Box<Expression>,
}

impl PrefixExpression {
    /// Creates a prefix expression.
    #[must_use]
    pub fn new(token: Token, operator: impl Into<EcoString>, right: Expression) -> Self {
        Self {
            token,
            operator: operator.into(),
            right: Box::new(right),
        }
    }

    /// Returns the literal of the operator token.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl std::fmt::Display for PrefixExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// A binary operator applied to two operands: `a + b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfixExpression {
    /// The operator token.
    pub token: Token,
    /// The left operand.
    pub left: Box<Expression>,
    /// The operator as written.
    pub operator: EcoString,
    /// The right operand.
    pub right: Box<Expression>,
}

impl InfixExpression {
    /// Creates an infix expression.
    #[must_use]
    pub fn new(
        token: Token,
        left: Expression,
        operator: impl Into<EcoString>,
        right: Expression,
    ) -> Self {
        Self {
            token,
            left: Box::new(left),
            operator: operator.into(),
            right: Box::new(right),
        }
    }

    /// Returns the literal of the operator token.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl std::fmt::Display for InfixExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

/// A conditional expression with an optional alternative branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfExpression {
    /// The `if` token.
    pub token: Token,
    /// The condition.
    pub condition: Box<Expression>,
    /// The branch taken when the condition holds.
    pub consequence: BlockStatement,
    /// The `else` branch, if present.
    pub alternative: Option<BlockStatement>,
}

impl IfExpression {
    /// Creates an `if` expression.
    #[must_use]
    pub fn new(
        token: Token,
        condition: Expression,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    ) -> Self {
        Self {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }
    }

    /// Returns the literal of the `if` token.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl std::fmt::Display for IfExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if{} {}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, "else {alternative}")?;
        }
        Ok(())
    }
}
