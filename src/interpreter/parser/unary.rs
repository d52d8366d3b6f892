use std::collections::HashMap;

use crate::{
    ast::{
        BooleanLiteral, Expression, Identifier, IfExpression, IntegerLiteral, PrefixExpression,
        PrefixOperator,
    },
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::{binary::Precedence, core::Parser},
    },
};

/// How to start an expression when a token appears in prefix position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixRule {
    /// A bare name.
    Identifier,
    /// An integer literal.
    Integer,
    /// `true` or `false`.
    Boolean,
    /// A prefix operator followed by its operand.
    Operator(PrefixOperator),
    /// `( expression )`
    Grouped,
    /// `if ( condition ) { ... } else { ... }`
    If,
}

impl PrefixRule {
    /// The prefix rule of every token kind that has one.
    pub(in crate::interpreter::parser) fn table() -> HashMap<TokenKind, Self> {
        HashMap::from([(TokenKind::Ident, Self::Identifier),
                       (TokenKind::Int, Self::Integer),
                       (TokenKind::True, Self::Boolean),
                       (TokenKind::False, Self::Boolean),
                       (TokenKind::Bang, Self::Operator(PrefixOperator::Bang)),
                       (TokenKind::Minus, Self::Operator(PrefixOperator::Minus)),
                       (TokenKind::LParen, Self::Grouped),
                       (TokenKind::If, Self::If)])
    }
}

impl<S: TokenSource> Parser<S> {
    /// Applies a prefix rule with `current` on the token that selected it.
    pub(in crate::interpreter::parser) fn parse_prefix(&mut self,
                                                       rule: PrefixRule)
                                                       -> Option<Expression> {
        match rule {
            PrefixRule::Identifier => Some(self.parse_identifier()),
            PrefixRule::Integer => self.parse_integer_literal(),
            PrefixRule::Boolean => Some(self.parse_boolean()),
            PrefixRule::Operator(operator) => self.parse_prefix_operator(operator),
            PrefixRule::Grouped => self.parse_grouped(),
            PrefixRule::If => self.parse_if(),
        }
    }

    fn parse_identifier(&self) -> Expression {
        Expression::Identifier(Identifier { token: self.current.clone(),
                                            name:  self.current.literal.clone(), })
    }

    /// Parses an integer literal. Literals outside the `i64` range are
    /// recorded as [`ParseError::InvalidInteger`].
    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let Ok(value) = self.current.literal.parse::<i64>() else {
            self.record(ParseError::InvalidInteger { literal: self.current.literal.clone() });
            return None;
        };

        Some(Expression::Integer(IntegerLiteral { token: self.current.clone(),
                                                  value }))
    }

    fn parse_boolean(&self) -> Expression {
        Expression::Boolean(BooleanLiteral { token: self.current.clone(),
                                             value: self.current_is(TokenKind::True), })
    }

    /// Parses `!operand` or `-operand`.
    ///
    /// The operand is parsed at [`Precedence::Prefix`], so it binds tighter
    /// than any binary operator: `-a * b` is `((-a) * b)`.
    fn parse_prefix_operator(&mut self, operator: PrefixOperator) -> Option<Expression> {
        let token = self.current.clone();

        self.advance();
        let operand = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix(PrefixExpression { token,
                                                   operator,
                                                   operand: Box::new(operand) }))
    }

    /// Parses a parenthesised expression. The parentheses leave no node
    /// behind; they only reset the precedence to the lowest level.
    fn parse_grouped(&mut self) -> Option<Expression> {
        self.advance();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        Some(expression)
    }

    /// Parses an `if` expression with an optional `else` block.
    ///
    /// Grammar:
    /// ```text
    ///     if := "if" "(" expression ")" block ("else" block)?
    /// ```
    fn parse_if(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        self.expect_peek(TokenKind::LParen)?;
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block()?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.advance();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Some(Expression::If(IfExpression { token,
                                           condition: Box::new(condition),
                                           consequence,
                                           alternative }))
    }
}
