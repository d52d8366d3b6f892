use monkey::interpreter::lexer::{Lexer, Token, TokenKind, TokenSource, TokenStream};

fn tokenize(src: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(src);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

#[test]
fn tokenizes_every_kind() {
    use TokenKind::{
        Asterisk, Assign, Bang, Comma, Else, Eof, Eq, False, Gt, Ident, If, Int, LBrace, LParen,
        Let, Lt, Minus, NotEq, RBrace, RParen, Return, Semicolon, Slash, True,
    };

    let src = "let five = 5;
               !-/*5;
               5 < 10 > 5;
               if (5 < 10) { return true; } else { return false; }
               10 == 10; 10 != 9, x_y";

    let expected = [(Let, "let"),
                    (Ident, "five"),
                    (Assign, "="),
                    (Int, "5"),
                    (Semicolon, ";"),
                    (Bang, "!"),
                    (Minus, "-"),
                    (Slash, "/"),
                    (Asterisk, "*"),
                    (Int, "5"),
                    (Semicolon, ";"),
                    (Int, "5"),
                    (Lt, "<"),
                    (Int, "10"),
                    (Gt, ">"),
                    (Int, "5"),
                    (Semicolon, ";"),
                    (If, "if"),
                    (LParen, "("),
                    (Int, "5"),
                    (Lt, "<"),
                    (Int, "10"),
                    (RParen, ")"),
                    (LBrace, "{"),
                    (Return, "return"),
                    (True, "true"),
                    (Semicolon, ";"),
                    (RBrace, "}"),
                    (Else, "else"),
                    (LBrace, "{"),
                    (Return, "return"),
                    (False, "false"),
                    (Semicolon, ";"),
                    (RBrace, "}"),
                    (Int, "10"),
                    (Eq, "=="),
                    (Int, "10"),
                    (Semicolon, ";"),
                    (Int, "10"),
                    (NotEq, "!="),
                    (Int, "9"),
                    (Comma, ","),
                    (Ident, "x_y"),
                    (Eof, "")];

    let tokens = tokenize(src);
    let actual: Vec<(TokenKind, &str)> =
        tokens.iter().map(|t| (t.kind, t.literal.as_str())).collect();
    assert_eq!(actual, expected);
}

#[test]
fn keywords_need_an_exact_match() {
    let kinds: Vec<TokenKind> = tokenize("lets iff truex").iter().map(|t| t.kind).collect();
    assert_eq!(kinds, [TokenKind::Ident, TokenKind::Ident, TokenKind::Ident, TokenKind::Eof]);
}

#[test]
fn unrecognised_input_is_illegal() {
    let tokens = tokenize("1 @ 2");
    assert_eq!(tokens[1], Token::new(TokenKind::Illegal, "@"));
    assert_eq!(tokens[2], Token::new(TokenKind::Int, "2"));
}

#[test]
fn end_of_input_repeats() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    for _ in 0..3 {
        assert_eq!(lexer.next_token(), Token::eof());
    }

    let mut stream = TokenStream::new(vec![Token::new(TokenKind::Int, "1")]);
    assert_eq!(stream.next_token().kind, TokenKind::Int);
    assert_eq!(stream.next_token(), Token::eof());
    assert_eq!(stream.next_token(), Token::eof());
}

#[test]
fn kinds_display_canonical_names() {
    assert_eq!(TokenKind::Ident.to_string(), "IDENT");
    assert_eq!(TokenKind::Int.to_string(), "INT");
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
    assert_eq!(TokenKind::Assign.to_string(), "=");
    assert_eq!(TokenKind::NotEq.to_string(), "!=");
}
