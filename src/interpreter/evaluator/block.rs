use std::rc::Rc;

use crate::{
    ast::Statement,
    interpreter::{
        evaluator::core::eval_statement,
        value::{Object, Value},
    },
};

/// Evaluates the top-level statements of a program.
///
/// Statements run in order and the last result is kept. Evaluation stops at
/// the first error or `return`; a returned value is unwrapped here, so it
/// never escapes the program. An empty program evaluates to `null`.
pub(in crate::interpreter::evaluator) fn eval_program(statements: &[Statement]) -> Object {
    let mut result = Value::null();

    for statement in statements {
        result = eval_statement(statement);
        if let Value::ReturnValue(inner) = &*result {
            return Rc::clone(inner);
        }
        if result.is_error() {
            return result;
        }
    }

    result
}

/// Evaluates the statements of a block.
///
/// Like [`eval_program`], but a `return` stays wrapped so that the enclosing
/// blocks stop as well.
pub(in crate::interpreter::evaluator) fn eval_block_statement(statements: &[Statement]) -> Object {
    let mut result = Value::null();

    for statement in statements {
        result = eval_statement(statement);
        if result.is_abrupt() {
            return result;
        }
    }

    result
}
