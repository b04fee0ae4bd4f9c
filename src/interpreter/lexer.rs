use std::ops::Range;

use logos::Logos;

use crate::error::{CalcResult, ErrorKind, ValidationError};

/// Represents a lexical token of an arithmetic expression.
///
/// Whitespace is removed before lexing, so there is no skip rule: any
/// character that is not listed here is an error.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Integer literal tokens such as `42`, carried as `f64`.
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Token {
    /// Returns `true` for `+ - * /`.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Star | Self::Slash)
    }
}

/// A token together with the range of characters it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    /// The token.
    pub token: Token,
    /// Character range in the whitespace-stripped expression.
    pub span:  Range<usize>,
}

/// Splits a whitespace-stripped expression into tokens.
///
/// Every token is ASCII, so byte offsets reported by the lexer are also
/// character offsets up to and including the first illegal character.
///
/// # Errors
/// Returns `IllegalCharacter` at the leftmost character that does not belong
/// to any token.
///
/// # Example
/// ```
/// use rcalc::{error::ErrorKind, interpreter::lexer::{Token, tokenize}};
///
/// let tokens = tokenize("12*(3)").unwrap();
/// assert_eq!(tokens[0].token, Token::Number(12.0));
/// assert_eq!(tokens[1].span, 2..3);
///
/// let err = tokenize("2+a+3").unwrap_err();
/// assert_eq!(err.kind, ErrorKind::IllegalCharacter);
/// assert_eq!(err.position, 2);
/// ```
pub fn tokenize(expression: &str) -> CalcResult<Vec<Spanned>> {
    let mut lexer = Token::lexer(expression);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        match token {
            Ok(token) => tokens.push(Spanned { token, span }),
            Err(()) => {
                return Err(ValidationError::new(expression,
                                                span.start,
                                                ErrorKind::IllegalCharacter));
            },
        }
    }

    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// Long digit runs saturate to infinity rather than failing.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
