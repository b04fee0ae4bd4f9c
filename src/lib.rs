//! # rcalc
//!
//! rcalc validates and evaluates arithmetic expressions written with `+`,
//! `-`, `*`, `/`, integer literals and parentheses.
//!
//! Every expression goes through the same pipeline: whitespace is removed,
//! the text is validated (failing with a position and a message), unary
//! signs are rewritten as operations on zero, a binary tree is built by
//! splitting at the rightmost lowest-precedence operator, and the tree is
//! evaluated bottom-up into an `f64`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    ast::Node,
    error::CalcResult,
    interpreter::{parser::core::parse_expression, validator},
    util::text::strip_whitespace,
};

/// Defines the expression tree.
///
/// This module declares the `Node` enum, a leaf holding a value or an
/// operator owning two subtrees, and the `BinaryOperator` enum with its
/// arithmetic.
pub mod ast;
/// Provides the error type for rejected expressions.
///
/// A `ValidationError` carries the whitespace-stripped expression, the
/// character position of the problem, and the kind of problem. Its display
/// form points at the character with a caret.
pub mod error;
/// Orchestrates lexing, validation, tree building and evaluation.
///
/// # Responsibilities
/// - Tokenizes expressions and validates their structure.
/// - Builds expression trees honoring precedence and left associativity.
/// - Evaluates trees into numbers.
pub mod interpreter;
/// General text helpers shared by the pipeline.
pub mod util;

/// Evaluates an arithmetic expression.
///
/// Whitespace anywhere in `text` is ignored. Division by zero is not an
/// error: it yields an infinity or NaN.
///
/// # Errors
/// Returns a `ValidationError` if the expression is malformed. Its position
/// refers to the expression with whitespace removed.
///
/// # Examples
/// ```
/// use rcalc::{error::ErrorKind, evaluate};
///
/// assert_eq!(evaluate("1 + 2").unwrap(), 3.0);
/// assert_eq!(evaluate("7 - 3 - 2").unwrap(), 2.0);
/// assert_eq!(evaluate("-(4 + 2) / 4").unwrap(), -1.5);
///
/// let err = evaluate("6 ++ 2").unwrap_err();
/// assert_eq!(err.kind, ErrorKind::ExtraSymbol);
/// assert_eq!(err.position, 2);
/// ```
pub fn evaluate(text: &str) -> CalcResult<f64> {
    let tree = parse(text)?;
    let value = tree.evaluate();
    debug!("{tree} = {value} (depth {})", tree.depth());
    Ok(value)
}

/// Parses an arithmetic expression into a tree without evaluating it.
///
/// # Errors
/// Returns a `ValidationError` if the expression is malformed.
///
/// # Examples
/// ```
/// use rcalc::parse;
///
/// let tree = parse("2 * (3 + 4)").unwrap();
/// assert_eq!(tree.to_string(), "(2 * (3 + 4))");
/// assert_eq!(tree.evaluate(), 14.0);
/// ```
pub fn parse(text: &str) -> CalcResult<Node> {
    parse_expression(&strip_whitespace(text))
}

/// Validates an arithmetic expression without building a tree.
///
/// # Errors
/// Returns the first `ValidationError` found.
///
/// # Examples
/// ```
/// use rcalc::{error::ErrorKind, validate};
///
/// assert!(validate("(1 + 2) * 3").is_ok());
///
/// let err = validate("(1 + 2) 5").unwrap_err();
/// assert_eq!(err.kind, ErrorKind::MissingOperator);
/// assert_eq!(err.expression, "(1+2)5");
/// assert_eq!(err.position, 5);
/// ```
pub fn validate(text: &str) -> CalcResult<()> {
    validator::validate(&strip_whitespace(text))
}
