use std::rc::Rc;

use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::fail,
        value::{Object, Value},
    },
};

/// Applies a prefix operator to an evaluated operand.
///
/// - `!` inverts truthiness and is defined for every value.
/// - `-` negates integers; any other operand is an unknown operator.
pub(in crate::interpreter::evaluator) fn eval_prefix(operator: PrefixOperator,
                                                     operand: &Object)
                                                     -> Object {
    match operator {
        PrefixOperator::Bang => Value::boolean(!operand.is_truthy()),
        PrefixOperator::Minus => eval_minus(operand),
    }
}

fn eval_minus(operand: &Object) -> Object {
    let Value::Integer(n) = **operand else {
        let operator = PrefixOperator::Minus.to_string();
        return fail(RuntimeError::UnknownPrefixOperator { operator,
                                                          operand: operand.type_name() });
    };

    match n.checked_neg() {
        Some(negated) => Rc::new(Value::Integer(negated)),
        None => fail(RuntimeError::IntegerOverflow { expression: format!("-({n})") }),
    }
}
