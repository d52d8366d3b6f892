use std::collections::HashMap;

use crate::{
    ast::{Expression, InfixExpression, InfixOperator},
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::Parser,
    },
};

/// Binding strength of an operator, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Unary `!` and `-`
    Prefix,
    /// `(` in infix position. Reserved: no infix rule is registered for it.
    Call,
}

impl Precedence {
    /// The precedence a token has when it follows a complete operand.
    ///
    /// ## Example
    /// ```
    /// use monkey::interpreter::{lexer::TokenKind, parser::binary::Precedence};
    ///
    /// assert!(Precedence::of(TokenKind::Asterisk) > Precedence::of(TokenKind::Plus));
    /// assert_eq!(Precedence::of(TokenKind::Semicolon), Precedence::Lowest);
    /// ```
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Self::Equals,
            TokenKind::Lt | TokenKind::Gt => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::LParen => Self::Call,
            _ => Self::Lowest,
        }
    }
}

/// How to continue an expression when a token follows a complete left
/// operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixRule {
    /// A binary operator: `left <op> right`.
    Binary(InfixOperator),
}

impl InfixRule {
    /// The infix rule of every token kind that has one.
    pub(in crate::interpreter::parser) fn table() -> HashMap<TokenKind, Self> {
        use InfixOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};

        HashMap::from([(TokenKind::Plus, Self::Binary(Add)),
                       (TokenKind::Minus, Self::Binary(Sub)),
                       (TokenKind::Asterisk, Self::Binary(Mul)),
                       (TokenKind::Slash, Self::Binary(Div)),
                       (TokenKind::Lt, Self::Binary(Less)),
                       (TokenKind::Gt, Self::Binary(Greater)),
                       (TokenKind::Eq, Self::Binary(Equal)),
                       (TokenKind::NotEq, Self::Binary(NotEqual))])
    }
}

impl<S: TokenSource> Parser<S> {
    /// Applies an infix rule with `current` on the operator token.
    pub(in crate::interpreter::parser) fn parse_infix(&mut self,
                                                      rule: InfixRule,
                                                      left: Expression)
                                                      -> Option<Expression> {
        match rule {
            InfixRule::Binary(operator) => self.parse_binary(operator, left),
        }
    }

    /// Parses the right operand of a binary operator.
    ///
    /// The right side is parsed with the operator's own precedence, so in
    /// `a - b - c` the second `-` is not captured by the first one's right
    /// operand and the result is `((a - b) - c)`.
    fn parse_binary(&mut self, operator: InfixOperator, left: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let precedence = Precedence::of(token.kind);

        self.advance();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix(InfixExpression { token,
                                                 operator,
                                                 left: Box::new(left),
                                                 right: Box::new(right) }))
    }
}
