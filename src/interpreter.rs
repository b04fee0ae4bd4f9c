/// The evaluator module resolves expression trees to numbers.
///
/// Walks a tree in post-order and applies each operator to its two resolved
/// operands. Evaluation cannot fail.
pub mod evaluator;
/// The lexer module tokenizes expressions.
///
/// The lexer reads whitespace-stripped text and produces numbers, the four
/// operators and brackets, each with the character range it came from.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source spans.
/// - Reports the first character that is not part of any token.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// # Responsibilities
/// - Rewrites unary signs as binary operations on zero.
/// - Strips enclosing brackets and splits ranges at the rightmost
///   lowest-precedence operator.
/// - Produces a fully formed `Node` tree.
pub mod parser;
/// The validator module rejects malformed expressions.
///
/// Runs a fixed sequence of checks and reports the first violation together
/// with the character it applies to.
pub mod validator;
