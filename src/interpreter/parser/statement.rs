use tracing::trace;

use crate::{
    ast::{ExpressionStatement, Identifier, LetStatement, ReturnStatement, Statement},
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::{binary::Precedence, core::Parser},
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses a single statement starting at `current`.
    ///
    /// A statement is one of:
    /// - a `let` statement,
    /// - a `return` statement,
    /// - an expression used as a statement.
    ///
    /// Returns `None` if the statement is malformed; the error has been
    /// recorded by then. On success `current` rests on the statement's last
    /// token (its semicolon, if it has one).
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> Option<Statement> {
        trace!(kind = %self.current.kind, literal = %self.current.literal, "parsing statement");

        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <identifier> = <expression>;`. The semicolon is optional.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier { token: self.current.clone(),
                                name:  self.current.literal.clone(), };

        self.expect_peek(TokenKind::Assign)?;
        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(Statement::Let(LetStatement { token, name, value }))
    }

    /// Parses `return <expression>;`. The semicolon is optional.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(Statement::Return(ReturnStatement { token, value }))
    }

    /// Parses a bare expression. The trailing semicolon is optional so that
    /// single REPL lines like `5 + 5` parse.
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(Statement::Expression(ExpressionStatement { token, expression }))
    }

    fn skip_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }
    }
}
