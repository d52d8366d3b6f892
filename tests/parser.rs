use monkey::{
    ast::{Expression, InfixOperator, PrefixOperator, Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token, TokenKind, TokenStream},
        parser::{MAX_NESTING, Parser},
    },
    parse,
};

fn parse_clean(src: &str) -> Program {
    let (program, errors) = parse(src);
    assert!(errors.is_empty(), "unexpected syntax errors for {src:?}: {errors:?}");
    program
}

fn error_messages(src: &str) -> Vec<String> {
    parse(src).1.iter().map(ToString::to_string).collect()
}

fn single_expression(src: &str) -> Expression {
    let program = parse_clean(src);
    assert_eq!(program.statements.len(), 1, "expected one statement in {src:?}");
    match program.statements.into_iter().next() {
        Some(Statement::Expression(s)) => s.expression,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

#[test]
fn let_statements() {
    let program = parse_clean("let x = 5; let y = 10; let foobar = 838383;");

    assert_eq!(program.statements.len(), 3);
    for (statement, expected) in program.statements.iter().zip(["x", "y", "foobar"]) {
        let Statement::Let(let_statement) = statement else {
            panic!("expected a let statement, got {statement:?}");
        };
        assert_eq!(statement.token_literal(), "let");
        assert_eq!(let_statement.name.name, expected);
        assert_eq!(let_statement.name.token.literal, expected);
    }
}

#[test]
fn let_statement_values() {
    let program = parse_clean("let x = 5; let y = true; let z = a + b * c");

    let values: Vec<String> = program.statements
                                     .iter()
                                     .map(|s| match s {
                                         Statement::Let(l) => l.value.to_string(),
                                         other => panic!("expected a let statement, got {other:?}"),
                                     })
                                     .collect();
    assert_eq!(values, ["5", "true", "(a + (b * c))"]);
}

#[test]
fn malformed_let_records_errors() {
    assert_eq!(error_messages("let x 5;"), ["expected next token to be =, got INT instead"]);
    assert_eq!(error_messages("let = 10;")[0], "expected next token to be IDENT, got = instead");
    assert_eq!(error_messages("let 838383;")[0],
               "expected next token to be IDENT, got INT instead");
}

#[test]
fn parsing_resumes_after_a_bad_statement() {
    let (program, errors) = parse("let x 5; let y = 10;");

    assert_eq!(errors.len(), 1);
    assert!(program.statements
                   .iter()
                   .any(|s| matches!(s, Statement::Let(l) if l.name.name == "y")));
}

#[test]
fn return_statements() {
    let program = parse_clean("return 5; return 10; return 993322;");

    assert_eq!(program.statements.len(), 3);
    for statement in &program.statements {
        assert!(matches!(statement, Statement::Return(_)), "got {statement:?}");
        assert_eq!(statement.token_literal(), "return");
    }
    assert_eq!(program.to_string(), "return 5;return 10;return 993322;");
}

#[test]
fn literal_expressions() {
    match single_expression("foobar;") {
        Expression::Identifier(i) => assert_eq!(i.name, "foobar"),
        other => panic!("expected an identifier, got {other:?}"),
    }
    match single_expression("5;") {
        Expression::Integer(i) => {
            assert_eq!(i.value, 5);
            assert_eq!(i.token.literal, "5");
        },
        other => panic!("expected an integer literal, got {other:?}"),
    }
    match single_expression("false") {
        Expression::Boolean(b) => assert!(!b.value),
        other => panic!("expected a boolean literal, got {other:?}"),
    }
}

#[test]
fn prefix_expressions() {
    for (src, operator, operand) in [("!5;", PrefixOperator::Bang, "5"),
                                     ("-15;", PrefixOperator::Minus, "15"),
                                     ("!true", PrefixOperator::Bang, "true")]
    {
        match single_expression(src) {
            Expression::Prefix(p) => {
                assert_eq!(p.operator, operator);
                assert_eq!(p.operand.to_string(), operand);
            },
            other => panic!("expected a prefix expression, got {other:?}"),
        }
    }
}

#[test]
fn infix_expressions() {
    use InfixOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};

    for (src, operator) in [("5 + 5;", Add),
                            ("5 - 5;", Sub),
                            ("5 * 5;", Mul),
                            ("5 / 5;", Div),
                            ("5 > 5;", Greater),
                            ("5 < 5;", Less),
                            ("5 == 5;", Equal),
                            ("5 != 5;", NotEqual)]
    {
        match single_expression(src) {
            Expression::Infix(i) => {
                assert_eq!(i.operator, operator);
                assert_eq!(i.left.to_string(), "5");
                assert_eq!(i.right.to_string(), "5");
                assert_eq!(i.token.literal, operator.to_string());
            },
            other => panic!("expected an infix expression, got {other:?}"),
        }
    }
}

#[test]
fn operator_precedence() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a - b - c", "((a - b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true", "true"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("3 < 5 == true", "((3 < 5) == true)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))")];

    for (src, expected) in cases {
        assert_eq!(parse_clean(src).to_string(), expected, "source: {src}");
    }
}

#[test]
fn if_expression() {
    match single_expression("if (x < y) { x }") {
        Expression::If(e) => {
            assert_eq!(e.condition.to_string(), "(x < y)");
            assert_eq!(e.consequence.statements.len(), 1);
            assert_eq!(e.consequence.statements[0].to_string(), "x");
            assert!(e.alternative.is_none());
        },
        other => panic!("expected an if expression, got {other:?}"),
    }
}

#[test]
fn if_else_expression() {
    let expression = single_expression("if (x < y) { x } else { y; z }");
    let Expression::If(e) = &expression else {
        panic!("expected an if expression, got {expression:?}");
    };

    let alternative = e.alternative.as_ref().expect("missing alternative");
    assert_eq!(alternative.statements.len(), 2);
    assert_eq!(expression.to_string(), "if(x < y) xelse yz");
}

#[test]
fn integer_literal_out_of_range() {
    assert_eq!(error_messages("99999999999999999999"),
               ["could not parse \"99999999999999999999\" as integer"]);
}

#[test]
fn tokens_without_prefix_rule() {
    assert_eq!(error_messages(")"), ["no prefix parse function for ) found"]);
    assert_eq!(error_messages("@"), ["no prefix parse function for ILLEGAL found"]);
    assert_eq!(error_messages("5 + ;"), ["no prefix parse function for ; found"]);
}

#[test]
fn unbalanced_delimiters() {
    assert_eq!(error_messages("(1 + 2")[0], "expected next token to be ), got EOF instead");
    assert_eq!(error_messages("if (x) { 1")[0], "expected next token to be }, got EOF instead");
    assert_eq!(error_messages("if x { 1 }")[0], "expected next token to be (, got IDENT instead");
}

#[test]
fn errors_are_ordered_by_detection() {
    let (_, errors) = parse("let = 1; let y 2;");

    assert_eq!(errors.first(),
               Some(&ParseError::UnexpectedToken { expected: TokenKind::Ident,
                                                   found:    TokenKind::Assign, }));
    assert!(errors.contains(&ParseError::UnexpectedToken { expected: TokenKind::Assign,
                                                           found:    TokenKind::Int, }));
}

#[test]
fn parses_from_a_token_vector() {
    let tokens = vec![Token::new(TokenKind::Int, "1"),
                      Token::new(TokenKind::Plus, "+"),
                      Token::new(TokenKind::Int, "2"),
                      Token::new(TokenKind::Asterisk, "*"),
                      Token::new(TokenKind::Int, "3")];

    let mut parser = Parser::new(TokenStream::new(tokens));
    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    assert_eq!(program.to_string(), "(1 + (2 * 3))");
}

#[test]
fn program_token_literal() {
    assert_eq!(parse_clean("let x = 1;").token_literal(), "let");
    assert_eq!(parse_clean("").token_literal(), "");
}

#[test]
fn parser_exposes_errors_after_parsing() {
    let mut parser = Parser::new(Lexer::new("let x 5;"));
    let _ = parser.parse_program();

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(parser.into_errors()[0].to_string(),
               "expected next token to be =, got INT instead");
}

#[test]
fn nesting_up_to_the_limit_parses() {
    let src = format!("{}1", "-".repeat(MAX_NESTING - 1));
    let program = parse_clean(&src);

    let Statement::Expression(statement) = &program.statements[0] else {
        panic!("expected an expression statement");
    };
    assert_eq!(statement.expression.depth(), MAX_NESTING);
}

#[test]
fn deeply_nested_prefix_operators_are_rejected() {
    let (_, errors) = parse(&format!("{}1", "-".repeat(200_000)));

    assert_eq!(errors[0], ParseError::NestingTooDeep { limit: MAX_NESTING });
    assert_eq!(errors[0].to_string(),
               format!("expression nested deeper than {MAX_NESTING} levels"));
}

#[test]
fn long_operator_chains_are_rejected() {
    let (_, errors) = parse(&format!("1{}", " + 1".repeat(200_000)));
    assert_eq!(errors.first(), Some(&ParseError::NestingTooDeep { limit: MAX_NESTING }));

    let chain = format!("1{}", " + 1".repeat(MAX_NESTING - 1));
    assert!(parse(&chain).1.is_empty());
}

#[test]
fn chains_inside_groups_add_up() {
    // Each group holds a chain half the limit long, so two levels are fine and
    // three are not.
    let half = MAX_NESTING / 2 - 2;
    let chain = |inner: &str| format!("({inner}{})", " + 1".repeat(half));

    assert!(parse(&chain(&chain("1"))).1.is_empty());
    assert_eq!(parse(&chain(&chain(&chain("1")))).1[0],
               ParseError::NestingTooDeep { limit: MAX_NESTING });
}
