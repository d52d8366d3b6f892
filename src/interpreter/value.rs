use std::{fmt, rc::Rc};

use crate::error::RuntimeError;

/// A shared handle to a runtime value.
///
/// The evaluator hands out `Object`s rather than bare values so that `true`,
/// `false` and `null` can be canonical instances compared by identity.
pub type Object = Rc<Value>;

thread_local! {
    static TRUE: Object = Rc::new(Value::Boolean(true));
    static FALSE: Object = Rc::new(Value::Boolean(false));
    static NULL: Object = Rc::new(Value::Null);
}

/// Represents a runtime value in the interpreter.
///
/// Values are only ever created by the evaluator and are not retained between
/// independent evaluations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A signed 64-bit integer.
    Integer(i64),
    /// A boolean. Only the two canonical instances from
    /// [`Value::boolean`] are ever produced by evaluation.
    Boolean(bool),
    /// The absence of a value, e.g. an `if` without a taken branch.
    Null,
    /// A failed evaluation. Propagates outward through every compound
    /// construct.
    Error(RuntimeError),
    /// Wraps the operand of `return` while it unwinds out of nested blocks.
    /// Never the result of evaluating a whole program.
    ReturnValue(Object),
}

impl Value {
    /// Returns the canonical instance for a boolean.
    ///
    /// ## Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use monkey::interpreter::value::Value;
    ///
    /// assert!(Rc::ptr_eq(&Value::boolean(true), &Value::boolean(1 < 2)));
    /// assert!(!Rc::ptr_eq(&Value::boolean(true), &Value::boolean(false)));
    /// ```
    #[must_use]
    pub fn boolean(value: bool) -> Object {
        if value {
            TRUE.with(Rc::clone)
        } else {
            FALSE.with(Rc::clone)
        }
    }

    /// Returns the canonical `null` instance.
    #[must_use]
    pub fn null() -> Object {
        NULL.with(Rc::clone)
    }

    /// Wraps a runtime error into an error value.
    #[must_use]
    pub fn error(error: RuntimeError) -> Object {
        Rc::new(Self::Error(error))
    }

    /// Whether this value is an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Whether this value stops the evaluation of whatever encloses it: an
    /// error, or a `return` still unwinding.
    #[must_use]
    pub const fn is_abrupt(&self) -> bool {
        matches!(self, Self::Error(_) | Self::ReturnValue(_))
    }

    /// Truthiness as used by `!` and `if`: `null` and `false` are falsy,
    /// everything else is truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }

    /// The type name used in runtime error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::Null => "NULL",
            Self::Error(_) => "ERROR",
            Self::ReturnValue(_) => "RETURN_VALUE",
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::Error(e) => write!(f, "ERROR: {e}"),
            Self::ReturnValue(inner) => write!(f, "{inner}"),
        }
    }
}
