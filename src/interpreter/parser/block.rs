use crate::{
    ast::BlockStatement,
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::Parser,
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses a block delimited by braces, with `current` on the `{`.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// Malformed statements inside the block are dropped like at the top
    /// level. Running out of input before the closing brace records an
    /// [`ParseError::UnexpectedToken`] and yields `None`.
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> Option<BlockStatement> {
        let token = self.current.clone();
        let mut statements = Vec::new();

        self.advance();
        while !self.current_is(TokenKind::RBrace) {
            if self.current_is(TokenKind::Eof) {
                self.record(ParseError::UnexpectedToken { expected: TokenKind::RBrace,
                                                          found:    TokenKind::Eof, });
                return None;
            }
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.advance();
        }

        Some(BlockStatement { token, statements })
    }
}
