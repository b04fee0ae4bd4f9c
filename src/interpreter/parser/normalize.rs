use crate::interpreter::lexer::{Spanned, Token};

/// Rewrites unary signs as binary operations on zero.
///
/// A sign at the start of the expression or right after `(` gets a `0`
/// operand inserted before it, so `-6*(-2)` becomes `0-6*(0-2)`. Leading `+`
/// is rewritten the same way as `-`. Spans are dropped: the builder works on
/// bare tokens.
///
/// # Example
/// ```
/// use rcalc::interpreter::{
///     lexer::{Token, tokenize},
///     parser::normalize::normalize_signs,
/// };
///
/// let tokens = tokenize("(-2)").unwrap();
/// assert_eq!(normalize_signs(&tokens),
///            vec![Token::LParen, Token::Number(0.0), Token::Minus, Token::Number(2.0), Token::RParen]);
/// ```
#[must_use]
pub fn normalize_signs(tokens: &[Spanned]) -> Vec<Token> {
    let mut normalized = Vec::with_capacity(tokens.len());
    let mut previous = None;

    for Spanned { token, .. } in tokens {
        if matches!(token, Token::Plus | Token::Minus)
           && matches!(previous, None | Some(Token::LParen))
        {
            normalized.push(Token::Number(0.0));
        }
        normalized.push(*token);
        previous = Some(*token);
    }

    normalized
}
