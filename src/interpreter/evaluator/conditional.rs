use crate::{
    ast::IfExpression,
    interpreter::{
        evaluator::{block::eval_block_statement, core::eval_expression},
        value::{Object, Value},
    },
};

/// Evaluates an `if` expression.
///
/// The consequence runs when the condition is truthy (anything but `false`
/// and `null`). Without a taken branch the result is `null`.
pub(in crate::interpreter::evaluator) fn eval_if(expression: &IfExpression) -> Object {
    let condition = eval_expression(&expression.condition);
    if condition.is_error() {
        return condition;
    }

    if condition.is_truthy() {
        eval_block_statement(&expression.consequence.statements)
    } else if let Some(alternative) = &expression.alternative {
        eval_block_statement(&alternative.statements)
    } else {
        Value::null()
    }
}
