/// Parser state and the precedence-climbing expression loop.
///
/// Holds the two-token lookahead, the prefix and infix rule tables and the
/// accumulated syntax errors.
pub mod core;

/// Statement parsing: `let`, `return` and expression statements.
pub mod statement;

/// Brace-delimited blocks.
pub mod block;

/// Prefix rules: literals, identifiers, prefix operators, grouping and `if`.
pub mod unary;

/// Infix rules and the operator precedence table.
pub mod binary;

pub use self::core::{MAX_NESTING, Parser};
