/// The evaluator module computes runtime values from AST nodes.
///
/// The evaluator walks the tree directly, dispatching on each node's variant.
/// Failures are ordinary values that short-circuit every compound construct,
/// and `return` unwinds through blocks by wrapping its value.
///
/// # Responsibilities
/// - Evaluates every statement and expression kind.
/// - Produces runtime errors for unknown operators and type mismatches.
/// - Hands out the canonical `true`, `false` and `null` instances.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// carrying its kind and the exact source text it covers. The parser pulls
/// tokens one at a time through the [`TokenSource`](lexer::TokenSource) trait.
///
/// # Responsibilities
/// - Converts the input characters into tokens.
/// - Distinguishes keywords from identifiers.
/// - Marks unrecognised input as illegal instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a Pratt (precedence climbing) parser: each token kind may
/// have a prefix rule and an infix rule, and a precedence table decides how
/// far an infix operator reaches.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Groups operators by precedence and associativity.
/// - Records syntax errors without stopping at the first one.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are integers, booleans, `null`, errors and the transient return
/// wrapper.
pub mod value;
