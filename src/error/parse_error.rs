use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all syntax errors the parser can record.
pub enum ParseError {
    /// The token after the current one was not the one the grammar requires.
    UnexpectedToken {
        /// The token kind the grammar required.
        expected: TokenKind,
        /// The token kind actually found.
        found:    TokenKind,
    },
    /// A token appeared where an expression must start, but nothing can
    /// start an expression with it.
    NoPrefixRule {
        /// The offending token kind.
        kind: TokenKind,
    },
    /// An integer literal did not fit into a signed 64-bit integer.
    InvalidInteger {
        /// The literal as written in the source.
        literal: String,
    },
    /// Expressions were nested deeper than the parser allows.
    NestingTooDeep {
        /// The maximum nesting depth.
        limit: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected next token to be {expected}, got {found} instead")
            },
            Self::NoPrefixRule { kind } => write!(f, "no prefix parse function for {kind} found"),
            Self::InvalidInteger { literal } => {
                write!(f, "could not parse {literal:?} as integer")
            },
            Self::NestingTooDeep { limit } => {
                write!(f, "expression nested deeper than {limit} levels")
            },
        }
    }
}

impl std::error::Error for ParseError {}
