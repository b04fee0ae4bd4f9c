/// Text preparation helpers.
///
/// Provides the whitespace stripping applied to every expression before it is
/// validated, so that error positions refer to the stripped text.
pub mod text;
