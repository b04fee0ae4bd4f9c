use log::debug;

use crate::{
    error::{CalcResult, ErrorKind, ValidationError},
    interpreter::lexer::{Spanned, Token},
};

/// Checks for symbols that have nothing to bind to.
///
/// Runs two groups over the token stream, each reporting its leftmost hit.
///
/// The first group reports the second symbol of an offending pair:
/// - an empty pair `()`,
/// - two operators in a row,
/// - `(` directly followed by `*` or `/`.
///
/// The second group reports the offending symbol itself:
/// - an expression starting with `*` or `/`,
/// - an operator directly followed by `)`,
/// - an expression ending with an operator.
///
/// A leading `-` and a `-` after `(` are accepted: they are unary minus.
/// A leading `+` is accepted the same way.
///
/// # Errors
/// Returns `ExtraSymbol` at the reported position.
///
/// # Example
/// ```
/// use rcalc::{
///     error::ErrorKind,
///     interpreter::{lexer::tokenize, validator::symbols::check_extra},
/// };
///
/// let tokens = tokenize("6++2").unwrap();
/// let err = check_extra("6++2", &tokens).unwrap_err();
/// assert_eq!((err.kind, err.position), (ErrorKind::ExtraSymbol, 2));
///
/// let tokens = tokenize("3+(8-)").unwrap();
/// let err = check_extra("3+(8-)", &tokens).unwrap_err();
/// assert_eq!((err.kind, err.position), (ErrorKind::ExtraSymbol, 4));
/// ```
pub fn check_extra(expression: &str, tokens: &[Spanned]) -> CalcResult<()> {
    let extra = |position| ValidationError::new(expression, position, ErrorKind::ExtraSymbol);

    if let Some(second) = tokens.windows(2)
                                .find(|pair| is_extra_pair(&pair[0].token, &pair[1].token))
                                .map(|pair| &pair[1])
    {
        debug!("extra symbol {:?} at {}", second.token, second.span.start);
        return Err(extra(second.span.start));
    }

    if let Some(first) = tokens.first()
       && matches!(first.token, Token::Star | Token::Slash)
    {
        return Err(extra(first.span.start));
    }

    if let Some(operator) =
        tokens.windows(2)
              .find(|pair| pair[0].token.is_operator() && pair[1].token == Token::RParen)
              .map(|pair| &pair[0])
    {
        debug!("operator {:?} closes a group at {}", operator.token, operator.span.start);
        return Err(extra(operator.span.start));
    }

    if let Some(last) = tokens.last()
       && last.token.is_operator()
    {
        return Err(extra(last.span.start));
    }

    Ok(())
}

/// Checks for operands or groups that touch without an operator.
///
/// Reports the second element of the first pair that is `)(`, `)` followed by
/// a number, or a number followed by `(`.
///
/// # Errors
/// Returns `MissingOperator` at the reported position.
///
/// # Example
/// ```
/// use rcalc::{
///     error::ErrorKind,
///     interpreter::{lexer::tokenize, validator::symbols::check_missing},
/// };
///
/// let tokens = tokenize("(1+2)5").unwrap();
/// let err = check_missing("(1+2)5", &tokens).unwrap_err();
/// assert_eq!((err.kind, err.position), (ErrorKind::MissingOperator, 5));
/// ```
pub fn check_missing(expression: &str, tokens: &[Spanned]) -> CalcResult<()> {
    let missing = tokens.windows(2)
                        .find(|pair| is_missing_pair(&pair[0].token, &pair[1].token));

    match missing {
        Some(pair) => Err(ValidationError::new(expression,
                                               pair[1].span.start,
                                               ErrorKind::MissingOperator)),
        None => Ok(()),
    }
}

/// Pairs whose second symbol is superfluous.
fn is_extra_pair(first: &Token, second: &Token) -> bool {
    match (first, second) {
        (Token::LParen, Token::RParen | Token::Star | Token::Slash) => true,
        (a, b) => a.is_operator() && b.is_operator(),
    }
}

/// Pairs that need an operator between them.
const fn is_missing_pair(first: &Token, second: &Token) -> bool {
    matches!((first, second),
             (Token::RParen, Token::LParen | Token::Number(_)) | (Token::Number(_), Token::LParen))
}
