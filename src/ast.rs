use std::fmt;

use crate::interpreter::lexer::Token;

/// The root of a parsed program: its top-level statements in source order.
///
/// Programs display as the concatenation of their statements in canonical
/// form, which makes the grouping the parser chose visible.
///
/// ## Example
/// ```
/// let (program, errors) = monkey::parse("a + b * c");
///
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "(a + (b * c))");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// The top-level statements.
    pub statements: Vec<Statement>,
}

impl Program {
    /// The literal of the first statement's token, or an empty string for an
    /// empty program.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        self.statements.first().map_or("", Statement::token_literal)
    }
}

/// A statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let(LetStatement),
    /// `return <value>;`
    Return(ReturnStatement),
    /// A bare expression, e.g. `5 + 5;`.
    Expression(ExpressionStatement),
    /// `{ <statements> }`
    Block(BlockStatement),
}

impl Statement {
    /// The literal of the token this statement starts with.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        match self {
            Self::Let(s) => &s.token.literal,
            Self::Return(s) => &s.token.literal,
            Self::Expression(s) => &s.token.literal,
            Self::Block(s) => &s.token.literal,
        }
    }

    /// How many levels the tree below this statement spans, counting the
    /// statement itself.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Let(s) => s.value.depth() + 1,
            Self::Return(s) => s.value.depth() + 1,
            Self::Expression(s) => s.expression.depth() + 1,
            Self::Block(s) => s.depth(),
        }
    }
}

/// Binds a name to a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetStatement {
    /// The `let` token.
    pub token: Token,
    /// The bound name.
    pub name:  Identifier,
    /// The bound value.
    pub value: Expression,
}

/// Leaves the enclosing block (and program) with a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStatement {
    /// The `return` token.
    pub token: Token,
    /// The returned value.
    pub value: Expression,
}

/// An expression used as a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatement {
    /// The first token of the expression.
    pub token:      Token,
    /// The expression.
    pub expression: Expression,
}

/// A brace-delimited sequence of statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStatement {
    /// The `{` token.
    pub token:      Token,
    /// The statements inside the braces.
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    /// One more than its deepest statement.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.statements.iter().map(Statement::depth).max().unwrap_or(0) + 1
    }
}

/// An expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// A name, e.g. `foobar`.
    Identifier(Identifier),
    /// An integer literal, e.g. `5`.
    Integer(IntegerLiteral),
    /// `true` or `false`.
    Boolean(BooleanLiteral),
    /// A prefix operator applied to an operand, e.g. `-x`.
    Prefix(PrefixExpression),
    /// A binary operator between two operands, e.g. `x * y`.
    Infix(InfixExpression),
    /// `if (<condition>) { ... } else { ... }`
    If(IfExpression),
}

impl Expression {
    /// The literal of the token this expression originated from.
    ///
    /// For operator expressions this is the operator token.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        match self {
            Self::Identifier(e) => &e.token.literal,
            Self::Integer(e) => &e.token.literal,
            Self::Boolean(e) => &e.token.literal,
            Self::Prefix(e) => &e.token.literal,
            Self::Infix(e) => &e.token.literal,
            Self::If(e) => &e.token.literal,
        }
    }

    /// The height of the expression tree. Literals and identifiers have
    /// depth 1; blocks inside `if` count towards it.
    ///
    /// ```
    /// let (program, _) = monkey::parse("-(1 + 2 * 3)");
    /// assert_eq!(program.statements[0].depth(), 5);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Identifier(_) | Self::Integer(_) | Self::Boolean(_) => 1,
            Self::Prefix(e) => e.operand.depth() + 1,
            Self::Infix(e) => e.left.depth().max(e.right.depth()) + 1,
            Self::If(e) => {
                let branches = e.alternative
                                .iter()
                                .chain([&e.consequence])
                                .map(BlockStatement::depth)
                                .max()
                                .unwrap_or(0);
                e.condition.depth().max(branches) + 1
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub token: Token,
    pub name:  String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixExpression {
    /// The operator token.
    pub token:    Token,
    pub operator: PrefixOperator,
    pub operand:  Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfixExpression {
    /// The operator token.
    pub token:    Token,
    pub operator: InfixOperator,
    pub left:     Box<Expression>,
    pub right:    Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfExpression {
    /// The `if` token.
    pub token:       Token,
    pub condition:   Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

/// Represents a prefix (unary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical not (`!`)
    Bang,
    /// Arithmetic negation (`-`)
    Minus,
}

/// Represents an infix (binary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Bang => "!",
            Self::Minus => "-",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InfixOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|s| write!(f, "{s}"))
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let(s) => write!(f, "{} {} = {};", s.token.literal, s.name, s.value),
            Self::Return(s) => write!(f, "{} {};", s.token.literal, s.value),
            Self::Expression(s) => write!(f, "{}", s.expression),
            Self::Block(s) => write!(f, "{s}"),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|s| write!(f, "{s}"))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(e) => write!(f, "{e}"),
            Self::Integer(e) => write!(f, "{}", e.token.literal),
            Self::Boolean(e) => write!(f, "{}", e.token.literal),
            Self::Prefix(e) => write!(f, "({}{})", e.operator, e.operand),
            Self::Infix(e) => write!(f, "({} {} {})", e.left, e.operator, e.right),
            Self::If(e) => {
                write!(f, "if{} {}", e.condition, e.consequence)?;
                if let Some(alternative) = &e.alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            },
        }
    }
}
