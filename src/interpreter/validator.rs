use log::debug;

use crate::{
    error::{CalcResult, ErrorKind, ValidationError},
    interpreter::lexer::{Spanned, tokenize},
};

/// Bracket balance check.
///
/// Runs on raw characters, before lexing, so it reports unbalanced brackets
/// even in text that also contains illegal characters.
pub mod balance;

/// Checks on adjacent tokens.
///
/// Detects extra symbols (empty brackets, doubled operators, operators next
/// to brackets, dangling operators) and missing operators between operands.
pub mod symbols;

/// Validates a whitespace-stripped expression.
///
/// The checks run in a fixed order and the first failure wins:
/// bracket balance, illegal characters, extra symbols, missing operators.
/// An expression with no tokens at all is rejected last.
///
/// # Errors
/// Returns a `ValidationError` pointing at the offending character.
///
/// # Example
/// ```
/// use rcalc::{error::ErrorKind, interpreter::validator::validate};
///
/// assert!(validate("-6+3*(-2)").is_ok());
///
/// let err = validate("3+()+8").unwrap_err();
/// assert_eq!(err.kind, ErrorKind::ExtraSymbol);
/// assert_eq!(err.position, 3);
/// ```
pub fn validate(expression: &str) -> CalcResult<()> {
    validate_tokens(expression).map(|_| ())
}

/// Validates an expression and hands back its tokens.
///
/// Used by the evaluation pipeline so the text is lexed only once.
pub(crate) fn validate_tokens(expression: &str) -> CalcResult<Vec<Spanned>> {
    debug!("validating '{expression}'");

    balance::check_balance(expression)?;
    let tokens = tokenize(expression)?;
    symbols::check_extra(expression, &tokens)?;
    symbols::check_missing(expression, &tokens)?;

    if tokens.is_empty() {
        return Err(ValidationError::new(expression, 0, ErrorKind::EmptyExpression));
    }

    debug!("'{expression}' is valid ({} tokens)", tokens.len());
    Ok(tokens)
}
