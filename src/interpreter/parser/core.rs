use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{Expression, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind, TokenSource},
        parser::{
            binary::{InfixRule, Precedence},
            unary::PrefixRule,
        },
    },
};

/// The deepest expression tree the parser builds. Parsing, evaluating and
/// dropping a tree all recurse once per level.
pub const MAX_NESTING: usize = 128;

/// A Pratt parser over a pull-based token source.
///
/// The parser keeps two tokens of lookahead (`current` and `peek`). Syntax
/// errors never abort parsing: they are recorded, the offending statement is
/// dropped, and parsing resumes with the next token. Check
/// [`Parser::errors`] before using the program.
///
/// # Example
/// ```
/// use monkey::interpreter::{lexer::Lexer, parser::Parser};
///
/// let mut parser = Parser::new(Lexer::new("let x = 5; -a * b"));
/// let program = parser.parse_program();
///
/// assert!(parser.errors().is_empty());
/// assert_eq!(program.to_string(), "let x = 5;((-a) * b)");
/// ```
pub struct Parser<S> {
    source: S,
    pub(in crate::interpreter::parser) current: Token,
    pub(in crate::interpreter::parser) peek: Token,
    errors: Vec<ParseError>,
    depth: usize,
    prefix_rules: HashMap<TokenKind, PrefixRule>,
    infix_rules: HashMap<TokenKind, InfixRule>,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser and pulls the first two tokens from `source`.
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();
        let peek = source.next_token();

        Self { source,
               current,
               peek,
               errors: Vec::new(),
               depth: 0,
               prefix_rules: PrefixRule::table(),
               infix_rules: InfixRule::table() }
    }

    /// The syntax errors recorded so far, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser, returning its recorded syntax errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parses statements until the end of input.
    ///
    /// Statements that failed to parse are left out of the program; the
    /// reason is available through [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.advance();
        }

        program
    }

    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// Starts from the prefix rule of the current token, then keeps folding
    /// the expression parsed so far into the infix rule of the next token for
    /// as long as that token binds tighter than `precedence`. Passing the
    /// operator's own precedence into the right-hand side is what makes
    /// operators of equal precedence associate to the left.
    ///
    /// Leaves `current` on the last token of the expression. Records
    /// [`ParseError::NestingTooDeep`] instead of building a tree deeper than
    /// [`MAX_NESTING`].
    pub(in crate::interpreter::parser) fn parse_expression(&mut self,
                                                           precedence: Precedence)
                                                           -> Option<Expression> {
        if self.depth == MAX_NESTING {
            self.record(ParseError::NestingTooDeep { limit: MAX_NESTING });
            return None;
        }
        self.depth += 1;
        let expression = self.parse_nested_expression(precedence);
        self.depth -= 1;
        expression
    }

    fn parse_nested_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = self.prefix_rules.get(&self.current.kind).copied() else {
            self.record(ParseError::NoPrefixRule { kind: self.current.kind });
            return None;
        };
        let mut left = self.parse_prefix(prefix)?;
        let mut height = self.within_limit(left.depth())?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = self.infix_rules.get(&self.peek.kind).copied() else {
                return Some(left);
            };
            self.advance();
            left = self.parse_infix(infix, left)?;
            // Only the new right operand is unmeasured.
            height = match &left {
                Expression::Infix(e) => height.max(e.right.depth()) + 1,
                other => other.depth(),
            };
            self.within_limit(height)?;
        }

        Some(left)
    }

    fn within_limit(&mut self, height: usize) -> Option<usize> {
        if height > MAX_NESTING {
            self.record(ParseError::NestingTooDeep { limit: MAX_NESTING });
            return None;
        }
        Some(height)
    }

    /// Moves `peek` into `current` and pulls a new `peek`.
    pub(in crate::interpreter::parser) fn advance(&mut self) {
        let next = self.source.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub(in crate::interpreter::parser) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(in crate::interpreter::parser) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances if the next token is of `kind`; otherwise records an
    /// [`ParseError::UnexpectedToken`] and returns `None`.
    pub(in crate::interpreter::parser) fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek_is(kind) {
            self.advance();
            Some(())
        } else {
            self.record(ParseError::UnexpectedToken { expected: kind,
                                                      found:    self.peek.kind, });
            None
        }
    }

    pub(in crate::interpreter::parser) fn record(&mut self, error: ParseError) {
        debug!(%error, literal = %self.current.literal, "syntax error");
        self.errors.push(error);
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }
}
