/// Parsing errors.
///
/// Defines the syntax errors the parser records while building a program.
/// Parse errors are collected rather than raised, so a single pass can report
/// several of them.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all errors that evaluation can produce. Runtime errors travel
/// through the evaluator as ordinary values wrapped in
/// [`Value::Error`](crate::interpreter::value::Value::Error).
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
