/// Core evaluation logic.
///
/// Contains the [`eval`] entry point, the dispatch over statement and
/// expression kinds, and error value creation.
pub mod core;

/// Program and block evaluation.
///
/// Runs statement sequences, stopping at errors and unwinding `return`.
pub mod block;

/// Conditional evaluation and truthiness.
pub mod conditional;

/// Prefix operator evaluation.
///
/// Handles logical not and integer negation.
pub mod unary;

/// Infix operator evaluation.
///
/// Implements integer arithmetic and comparisons, boolean equality and the
/// type checks in front of them.
pub mod binary;

pub use self::core::{Node, eval};
