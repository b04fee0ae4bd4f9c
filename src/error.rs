/// Validation errors.
///
/// Defines the single error type of the crate: an expression was rejected at
/// a specific character, for one of a fixed set of reasons. Evaluation itself
/// cannot fail, so there is no runtime error type.
pub mod validation_error;

pub use validation_error::{ErrorKind, ValidationError};

/// Result type used throughout the crate.
pub type CalcResult<T> = Result<T, ValidationError>;
