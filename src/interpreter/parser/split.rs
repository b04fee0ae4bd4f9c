use crate::{ast::BinaryOperator, interpreter::lexer::Token};

/// Strips parentheses that enclose the whole token range.
///
/// A pair is only removed if the `(` at the front is matched by the `)` at
/// the back; `(1)+(2)` is left alone. Repeats until no enclosing pair
/// remains, so trimming a trimmed range returns it unchanged.
///
/// # Example
/// ```
/// use rcalc::interpreter::{lexer::Token, parser::split::trim};
///
/// let wrapped = [Token::LParen, Token::LParen, Token::Number(1.0), Token::RParen, Token::RParen];
/// assert_eq!(trim(&wrapped), &[Token::Number(1.0)]);
///
/// let sum = [Token::LParen, Token::Number(1.0), Token::RParen,
///            Token::Plus,
///            Token::LParen, Token::Number(2.0), Token::RParen];
/// assert_eq!(trim(&sum), &sum);
/// ```
#[must_use]
pub fn trim(tokens: &[Token]) -> &[Token] {
    let mut current = tokens;
    while let Some(inner) = strip_enclosing(current) {
        current = inner;
    }
    current
}

/// Finds the operator at which a range splits into its two operands.
///
/// Scans from the right, tracking bracket depth, and returns the rightmost
/// `+` or `-` outside any brackets; failing that, the rightmost `*` or `/`.
/// Picking the rightmost operator of the lowest precedence makes chains such
/// as `7-3-2` associate to the left: the split lands on the second `-`.
///
/// Returns `None` when no operator is outside brackets, i.e. the range is a
/// single literal (after trimming).
///
/// # Example
/// ```
/// use rcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::split::find_split},
/// };
///
/// // 7-3-2
/// let tokens = [Token::Number(7.0), Token::Minus, Token::Number(3.0),
///               Token::Minus, Token::Number(2.0)];
/// assert_eq!(find_split(&tokens), Some((3, BinaryOperator::Sub)));
///
/// // (1+2)*3
/// let tokens = [Token::LParen, Token::Number(1.0), Token::Plus, Token::Number(2.0),
///               Token::RParen, Token::Star, Token::Number(3.0)];
/// assert_eq!(find_split(&tokens), Some((5, BinaryOperator::Mul)));
/// ```
#[must_use]
pub fn find_split(tokens: &[Token]) -> Option<(usize, BinaryOperator)> {
    rightmost_outside_brackets(tokens, BinaryOperator::is_additive)
        .or_else(|| rightmost_outside_brackets(tokens, |op| !op.is_additive()))
}

/// Maps a token to its corresponding binary operator.
///
/// # Example
/// ```
/// use rcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::split::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Returns the inside of `tokens` if its first `(` is closed by its last token.
fn strip_enclosing(tokens: &[Token]) -> Option<&[Token]> {
    let [Token::LParen, ..] = tokens else {
        return None;
    };

    let mut depth = 0usize;
    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return (index == tokens.len() - 1).then(|| &tokens[1..index]);
                }
            },
            _ => {},
        }
    }

    None
}

fn rightmost_outside_brackets(tokens: &[Token],
                              accept: impl Fn(BinaryOperator) -> bool)
                              -> Option<(usize, BinaryOperator)> {
    // Seen from the right, `)` opens a group and `(` closes it.
    let mut depth = 0isize;

    for (index, token) in tokens.iter().enumerate().rev() {
        match token {
            Token::RParen => depth += 1,
            Token::LParen => depth -= 1,
            _ => {
                if depth == 0
                   && let Some(op) = token_to_binary_operator(token)
                   && accept(op)
                {
                    return Some((index, op));
                }
            },
        }
    }

    None
}
