use crate::error::{CalcResult, ErrorKind, ValidationError};

/// Checks that every bracket has a partner.
///
/// Scans left to right keeping the positions of pending `(`. A `)` with
/// nothing pending fails at its own position; if anything is still pending at
/// the end, the innermost unmatched `(` is reported. Both cases use
/// `CloseParenExpected`.
///
/// Positions are character offsets, so text with multi-byte characters is
/// handled before the lexer sees it.
///
/// # Errors
/// Returns `CloseParenExpected` on the first imbalance.
///
/// # Example
/// ```
/// use rcalc::{error::ErrorKind, interpreter::validator::balance::check_balance};
///
/// assert!(check_balance("(1+(2))").is_ok());
///
/// let err = check_balance("1)").unwrap_err();
/// assert_eq!((err.kind, err.position), (ErrorKind::CloseParenExpected, 1));
///
/// let err = check_balance("(1+(2)+(3").unwrap_err();
/// assert_eq!((err.kind, err.position), (ErrorKind::CloseParenExpected, 7));
/// ```
pub fn check_balance(expression: &str) -> CalcResult<()> {
    let mut pending = Vec::new();

    for (position, c) in expression.chars().enumerate() {
        match c {
            '(' => pending.push(position),
            ')' => {
                if pending.pop().is_none() {
                    return Err(ValidationError::new(expression,
                                                    position,
                                                    ErrorKind::CloseParenExpected));
                }
            },
            _ => {},
        }
    }

    if let Some(&position) = pending.last() {
        return Err(ValidationError::new(expression, position, ErrorKind::CloseParenExpected));
    }

    Ok(())
}
