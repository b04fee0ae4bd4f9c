use log::trace;

use crate::{
    ast::Node,
    error::CalcResult,
    interpreter::{
        lexer::Token,
        parser::{
            normalize::normalize_signs,
            split::{find_split, trim},
        },
        validator::validate_tokens,
    },
};

/// Parses a whitespace-stripped expression into a tree.
///
/// Validates the text, rewrites unary signs, and builds the tree. Nothing is
/// evaluated.
///
/// # Errors
/// Returns the first `ValidationError` found in the text.
///
/// # Example
/// ```
/// use rcalc::interpreter::parser::core::parse_expression;
///
/// let tree = parse_expression("7-3-2").unwrap();
/// assert_eq!(tree.to_string(), "((7 - 3) - 2)");
///
/// let tree = parse_expression("-(1+2)*3").unwrap();
/// assert_eq!(tree.to_string(), "(0 - ((1 + 2) * 3))");
/// ```
pub fn parse_expression(expression: &str) -> CalcResult<Node> {
    let tokens = validate_tokens(expression)?;
    let tokens = normalize_signs(&tokens);
    Ok(build_tree(&tokens))
}

/// Builds the expression tree of a token range.
///
/// Trims enclosing brackets, splits at the rightmost lowest-precedence
/// operator outside brackets, and recurses into both sides. A range without
/// such an operator is a single literal and becomes a leaf.
///
/// # Panics
/// Panics if `tokens` is not a well-formed expression with unary signs
/// already rewritten. Tokens from a validated expression passed through
/// `normalize_signs` always are.
///
/// # Example
/// ```
/// use rcalc::{
///     ast::{BinaryOperator, Node},
///     interpreter::{lexer::Token, parser::core::build_tree},
/// };
///
/// // (2)*3
/// let tokens = [Token::LParen, Token::Number(2.0), Token::RParen, Token::Star, Token::Number(3.0)];
/// assert_eq!(build_tree(&tokens),
///            Node::operator(BinaryOperator::Mul, Node::Leaf(2.0), Node::Leaf(3.0)));
/// ```
#[must_use]
pub fn build_tree(tokens: &[Token]) -> Node {
    let tokens = trim(tokens);

    if let Some((index, op)) = find_split(tokens) {
        trace!("splitting {} tokens at {index} on '{op}'", tokens.len());
        return Node::operator(op,
                              build_tree(&tokens[..index]),
                              build_tree(&tokens[index + 1..]));
    }

    match tokens {
        [Token::Number(value)] => Node::Leaf(*value),
        _ => unreachable!("validated expression left a malformed operand: {tokens:?}"),
    }
}
