use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    ast::{BlockStatement, Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::eval_infix,
            block::{eval_block_statement, eval_program},
            conditional::eval_if,
            unary::eval_prefix,
        },
        value::{Object, Value},
    },
};

/// Anything that can be evaluated: a whole program, a statement, a block or
/// an expression.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Program(&'a Program),
    Statement(&'a Statement),
    Block(&'a BlockStatement),
    Expression(&'a Expression),
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Self::Program(program)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(statement: &'a Statement) -> Self {
        Self::Statement(statement)
    }
}

impl<'a> From<&'a BlockStatement> for Node<'a> {
    fn from(block: &'a BlockStatement) -> Self {
        Self::Block(block)
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expression: &'a Expression) -> Self {
        Self::Expression(expression)
    }
}

/// Evaluates a node and returns the resulting value.
///
/// This is the main entry point of the evaluator. Failures are not reported
/// through a separate channel: the returned value is a
/// [`Value::Error`] instead. Evaluating a whole [`Program`] never yields a
/// [`Value::ReturnValue`]; evaluating a block or a `return` statement on its
/// own may.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::eval, value::Value};
///
/// let (program, errors) = monkey::parse("if (1 < 2) { 10 } else { 20 }");
/// assert!(errors.is_empty());
///
/// assert_eq!(*eval(&program), Value::Integer(10));
/// ```
pub fn eval<'a>(node: impl Into<Node<'a>>) -> Object {
    match node.into() {
        Node::Program(program) => {
            trace!(statements = program.statements.len(), "evaluating program");
            eval_program(&program.statements)
        },
        Node::Statement(statement) => eval_statement(statement),
        Node::Block(block) => eval_block_statement(&block.statements),
        Node::Expression(expression) => eval_expression(expression),
    }
}

pub(in crate::interpreter::evaluator) fn eval_statement(statement: &Statement) -> Object {
    match statement {
        Statement::Expression(s) => eval_expression(&s.expression),
        Statement::Return(s) => {
            let value = eval_expression(&s.value);
            if value.is_error() {
                return value;
            }
            Rc::new(Value::ReturnValue(value))
        },
        Statement::Block(s) => eval_block_statement(&s.statements),
        // There are no bindings to store the value in, but evaluating it
        // still surfaces its errors.
        Statement::Let(s) => {
            let value = eval_expression(&s.value);
            if value.is_error() {
                return value;
            }
            Value::null()
        },
    }
}

pub(in crate::interpreter::evaluator) fn eval_expression(expression: &Expression) -> Object {
    match expression {
        Expression::Integer(e) => Rc::new(Value::Integer(e.value)),
        Expression::Boolean(e) => Value::boolean(e.value),
        Expression::Prefix(e) => {
            let operand = eval_expression(&e.operand);
            if operand.is_error() {
                return operand;
            }
            eval_prefix(e.operator, &operand)
        },
        Expression::Infix(e) => {
            let left = eval_expression(&e.left);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(&e.right);
            if right.is_error() {
                return right;
            }
            eval_infix(e.operator, &left, &right)
        },
        Expression::If(e) => eval_if(e),
        Expression::Identifier(e) => fail(RuntimeError::UnknownIdentifier { name: e.name.clone() }),
    }
}

/// Creates an error value.
pub(in crate::interpreter::evaluator) fn fail(error: RuntimeError) -> Object {
    debug!(%error, "runtime error");
    Value::error(error)
}
