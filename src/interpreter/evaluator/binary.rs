use std::rc::Rc;

use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::fail,
        value::{Object, Value},
    },
};

/// Applies an infix operator to two evaluated operands.
///
/// Operands of different types are a type mismatch, whatever the operator.
/// Integers support arithmetic and comparisons; booleans only support `==`
/// and `!=`. Everything else is an unknown operator.
pub(in crate::interpreter::evaluator) fn eval_infix(operator: InfixOperator,
                                                    left: &Object,
                                                    right: &Object)
                                                    -> Object {
    if left.type_name() != right.type_name() {
        return fail(RuntimeError::TypeMismatch { left:     left.type_name(),
                                                 operator: operator.to_string(),
                                                 right:    right.type_name(), });
    }

    match (&**left, &**right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::Boolean(_), Value::Boolean(_)) => eval_boolean_infix(operator, left, right),
        _ => unknown_operator(operator, left, right),
    }
}

/// Integer arithmetic and comparison. Division by zero and results outside
/// the `i64` range are errors.
fn eval_integer_infix(operator: InfixOperator, l: i64, r: i64) -> Object {
    use InfixOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};

    let result = match operator {
        Add => l.checked_add(r),
        Sub => l.checked_sub(r),
        Mul => l.checked_mul(r),
        Div => {
            if r == 0 {
                return fail(RuntimeError::DivisionByZero);
            }
            l.checked_div(r)
        },
        Less => return Value::boolean(l < r),
        Greater => return Value::boolean(l > r),
        Equal => return Value::boolean(l == r),
        NotEqual => return Value::boolean(l != r),
    };

    result.map_or_else(|| {
                           fail(RuntimeError::IntegerOverflow { expression:
                                                                    format!("{l} {operator} {r}") })
                       },
                       |n| Rc::new(Value::Integer(n)))
}

/// Boolean equality. Booleans are canonical instances, so comparing the
/// handles is enough.
fn eval_boolean_infix(operator: InfixOperator, left: &Object, right: &Object) -> Object {
    match operator {
        InfixOperator::Equal => Value::boolean(Rc::ptr_eq(left, right)),
        InfixOperator::NotEqual => Value::boolean(!Rc::ptr_eq(left, right)),
        _ => unknown_operator(operator, left, right),
    }
}

fn unknown_operator(operator: InfixOperator, left: &Object, right: &Object) -> Object {
    fail(RuntimeError::UnknownInfixOperator { left:     left.type_name(),
                                              operator: operator.to_string(),
                                              right:    right.type_name(), })
}
