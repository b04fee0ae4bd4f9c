/// Returns `true` for the characters removed before validation.
///
/// These are the ASCII whitespace characters plus vertical tab (`\x0B`),
/// which `char::is_ascii_whitespace` leaves out.
#[must_use]
pub const fn is_expression_whitespace(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// Removes all whitespace from an expression.
///
/// Digits separated only by whitespace merge into one literal, so `1 2`
/// becomes `12`. Non-ASCII whitespace is kept and later rejected as an
/// illegal character.
///
/// ## Example
/// ```
/// use rcalc::util::text::strip_whitespace;
///
/// assert_eq!(strip_whitespace(" 6 / (\t2 )\n"), "6/(2)");
/// assert_eq!(strip_whitespace("1 2"), "12");
/// ```
#[must_use]
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|&c| !is_expression_whitespace(c)).collect()
}
