#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Operand types are carried as their type names (`INTEGER`, `BOOLEAN`, ...)
/// and operators as their source symbols, so the `Display` output is the
/// complete user-facing message.
pub enum RuntimeError {
    /// The two operands of an infix operator have different types.
    TypeMismatch {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator symbol.
        operator: String,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// A prefix operator was applied to a type it does not support.
    UnknownPrefixOperator {
        /// The operator symbol.
        operator: String,
        /// Type name of the operand.
        operand:  &'static str,
    },
    /// An infix operator is not defined for the (matching) operand types.
    UnknownInfixOperator {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator symbol.
        operator: String,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// Integer division with a zero divisor.
    DivisionByZero,
    /// Integer arithmetic left the signed 64-bit range.
    IntegerOverflow {
        /// The expression that overflowed, e.g. `9223372036854775807 + 1`.
        expression: String,
    },
    /// An identifier was evaluated, but there are no bindings to look it up
    /// in.
    UnknownIdentifier {
        /// The name of the identifier.
        name: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left, operator, right } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::UnknownPrefixOperator { operator, operand } => {
                write!(f, "unknown operator: {operator}{operand}")
            },
            Self::UnknownInfixOperator { left, operator, right } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow { expression } => write!(f, "integer overflow: {expression}"),
            Self::UnknownIdentifier { name } => write!(f, "identifier not found: {name}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
