/// Parser entry points.
///
/// Ties validation, sign rewriting and tree building together and holds the
/// recursive builder itself.
pub mod core;

/// Unary sign rewriting.
///
/// Turns a leading sign, or a sign right after `(`, into a subtraction or
/// addition on zero so the builder only ever sees binary operators.
pub mod normalize;

/// Range trimming and split-point search.
///
/// Removes brackets that wrap a whole range and finds the operator at which a
/// range divides into its operands.
pub mod split;
