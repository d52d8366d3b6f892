//! # monkey
//!
//! monkey is the front half of a small interpreter written in Rust.
//! It parses source text into an abstract syntax tree with a Pratt parser and
//! computes the value of that tree with a tree-walking evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{evaluator::eval, lexer::Lexer, parser::Parser, value::Object},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expression` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Keeps the originating token on every node.
/// - Renders nodes in a canonical, fully parenthesised form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines the syntax errors the parser records and the runtime
/// errors the evaluator carries inside error values. Both render as
/// human-readable messages.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Produces the user-facing message for each failure.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// The line-oriented read-evaluate-print loop.
pub mod repl;

/// Parses source text into a program and its syntax errors.
///
/// An empty error list is the only signal of success. When it is not empty,
/// the program may be partial and must not be evaluated.
///
/// # Examples
/// ```
/// let (program, errors) = monkey::parse("let x = 5; let y = 10;");
/// assert!(errors.is_empty());
/// assert_eq!(program.statements.len(), 2);
///
/// let (_, errors) = monkey::parse("let x 5;");
/// assert_eq!(errors[0].to_string(), "expected next token to be =, got INT instead");
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (program, parser.into_errors())
}

/// Parses and evaluates source text.
///
/// Returns the syntax errors if parsing failed; the program is not evaluated
/// then. Otherwise returns the program's value, which is a
/// [`Value::Error`](interpreter::value::Value::Error) if evaluation failed.
///
/// # Errors
/// Returns every syntax error found, in source order.
///
/// # Examples
/// ```
/// use monkey::{interpret, interpreter::value::Value};
///
/// let value = interpret("(5 + 5) * 2").unwrap();
/// assert_eq!(*value, Value::Integer(20));
///
/// let value = interpret("5 + true").unwrap();
/// assert_eq!(value.to_string(), "ERROR: type mismatch: INTEGER + BOOLEAN");
///
/// assert!(interpret("let = 5;").is_err());
/// ```
pub fn interpret(source: &str) -> Result<Object, Vec<ParseError>> {
    let (program, errors) = parse(source);
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(eval(&program))
}
