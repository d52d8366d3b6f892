use std::fmt;

use logos::Logos;

/// The kind of a lexical token.
///
/// The lexer derives its recognisers from the attributes on each variant.
/// `Illegal` and `Eof` are never matched directly: `Illegal` is produced for
/// any input the lexer cannot recognise and `Eof` is produced once the input
/// is exhausted.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// Unrecognised input.
    Illegal,
    /// End of input.
    Eof,

    /// Identifiers such as `x` or `foo_bar`.
    #[regex(r"[a-zA-Z_]+")]
    Ident,
    /// Integer literals such as `42`.
    #[regex(r"[0-9]+")]
    Int,

    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,

    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,

    /// `let`
    #[token("let")]
    Let,
    /// `return`
    #[token("return")]
    Return,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Let => "LET",
            Self::Return => "RETURN",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
        };
        write!(f, "{name}")
    }
}

/// A single token: its kind together with the exact source text it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:    TokenKind,
    /// The source slice, e.g. `"838383"` for an integer literal.
    pub literal: String,
}

impl Token {
    /// Creates a token from a kind and its literal text.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self { kind,
               literal: literal.into() }
    }

    /// The end-of-input marker.
    #[must_use]
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }
}

/// A pull-based producer of tokens.
///
/// Implementations never block and never fail: once the input is exhausted
/// they keep returning [`TokenKind::Eof`] tokens.
pub trait TokenSource {
    /// Produces the next token.
    fn next_token(&mut self) -> Token;
}

/// Tokenizes source text on demand.
///
/// # Example
/// ```
/// use monkey::interpreter::lexer::{Lexer, TokenKind, TokenSource};
///
/// let mut lexer = Lexer::new("let x = 5;");
/// let kinds: Vec<TokenKind> = (0..6).map(|_| lexer.next_token().kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Let,
///             TokenKind::Ident,
///             TokenKind::Assign,
///             TokenKind::Int,
///             TokenKind::Semicolon,
///             TokenKind::Eof]);
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`. Nothing is scanned until the first
    /// token is pulled.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: TokenKind::lexer(source) }
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(Ok(kind)) => Token::new(kind, self.inner.slice()),
            Some(Err(())) => Token::new(TokenKind::Illegal, self.inner.slice()),
            None => Token::eof(),
        }
    }
}

/// Adapts any token iterator into a [`TokenSource`].
///
/// Useful for feeding the parser a pre-built token sequence. An end marker is
/// supplied automatically after the iterator runs dry.
pub struct TokenStream<I> {
    tokens: I,
}

impl<I> TokenStream<I> where I: Iterator<Item = Token>
{
    /// Wraps `tokens`. A trailing [`TokenKind::Eof`] is optional.
    ///
    /// ```
    /// use monkey::interpreter::lexer::{Token, TokenKind, TokenSource, TokenStream};
    ///
    /// let mut stream = TokenStream::new([Token::new(TokenKind::Int, "7")]);
    /// assert_eq!(stream.next_token().literal, "7");
    /// assert_eq!(stream.next_token().kind, TokenKind::Eof);
    /// assert_eq!(stream.next_token().kind, TokenKind::Eof);
    /// ```
    pub fn new(tokens: impl IntoIterator<IntoIter = I>) -> Self {
        Self { tokens: tokens.into_iter() }
    }
}

impl<I> TokenSource for TokenStream<I> where I: Iterator<Item = Token>
{
    fn next_token(&mut self) -> Token {
        self.tokens.next().unwrap_or_else(Token::eof)
    }
}
