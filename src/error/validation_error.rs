/// The fixed set of reasons an expression can be rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// An opening parenthesis `(` was expected.
    ///
    /// The balance check reports a missing `)` for unmatched brackets in
    /// either direction, so this kind is not produced by `validate`.
    OpenParenExpected,
    /// A closing parenthesis `)` was expected: brackets do not balance.
    CloseParenExpected,
    /// A character outside `0-9 ( ) * / + -` was found.
    IllegalCharacter,
    /// A symbol that has no place there: an empty `()`, doubled operators,
    /// an operator next to a bracket, or a dangling operator at either end.
    ExtraSymbol,
    /// Two operands or groups touch without an operator between them.
    MissingOperator,
    /// Nothing but whitespace was given.
    EmptyExpression,
}

impl ErrorKind {
    /// The human-readable message attached to this kind.
    ///
    /// ## Example
    /// ```
    /// use rcalc::error::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::ExtraSymbol.message(), "Extra symbol was found");
    /// ```
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::OpenParenExpected => "'(' expected",
            Self::CloseParenExpected => "')' expected",
            Self::IllegalCharacter => "Illegal character was found",
            Self::ExtraSymbol => "Extra symbol was found",
            Self::MissingOperator => "Operator is missing",
            Self::EmptyExpression => "Expression is empty",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Rejection of an expression, pinned to a character of the input.
///
/// `expression` is the input with whitespace already removed and `position`
/// is a zero-based character offset into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The whitespace-stripped expression.
    pub expression: String,
    /// Zero-based character offset of the offending symbol.
    pub position:   usize,
    /// Why the expression was rejected.
    pub kind:       ErrorKind,
}

impl ValidationError {
    /// Creates an error for `expression` at character `position`.
    #[must_use]
    pub fn new(expression: &str, position: usize, kind: ErrorKind) -> Self {
        Self { expression: expression.to_string(),
               position,
               kind }
    }

    /// The message of the error kind.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.kind.message()
    }
}

/// Renders the expression, a caret under the offending character, and the
/// message:
///
/// ```text
/// Expression validation error:
/// 6++2
///   ^
/// Extra symbol was found.
/// ```
impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Expression validation error:\n{}\n{}^\n{}.",
               self.expression,
               " ".repeat(self.position),
               self.kind)
    }
}

impl std::error::Error for ValidationError {}
