use albus::{
    Expr,
    ast::{BinaryOperator, LiteralValue, UnaryOperator},
    error::{SyntaxError, SyntaxErrorKind},
    parse, tokenize,
};

fn parse_src(src: &str) -> Vec<Expr> {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("Failed to tokenize {src:?}:\n{e}"));
    parse(&tokens).unwrap_or_else(|e| panic!("Failed to parse {src:?}:\n{e}"))
}

fn parse_error(src: &str) -> SyntaxError {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("Failed to tokenize {src:?}:\n{e}"));
    match parse(&tokens) {
        Ok(program) => panic!("Parsing {src:?} succeeded with {program:?}"),
        Err(e) => e,
    }
}

fn literal(value: impl Into<LiteralValue>, line: usize) -> Box<Expr> {
    Box::new(Expr::Literal { value: value.into(),
                             line })
}

#[test]
fn variable_declaration() {
    let program = parse_src("let x = 5;");
    assert_eq!(program,
               [Expr::VariableDeclaration { name:            "x".to_string(),
                                            is_mutable:      false,
                                            type_annotation: None,
                                            initializer:     literal(5_i64, 1),
                                            line:            1, }]);
}

#[test]
fn mutable_declaration_with_type() {
    let program = parse_src("let mut name: string = \"albus\";");
    assert_eq!(program,
               [Expr::VariableDeclaration { name:            "name".to_string(),
                                            is_mutable:      true,
                                            type_annotation: Some("string".to_string()),
                                            initializer:     literal("albus", 1),
                                            line:            1, }]);
}

#[test]
fn declaration_initializer_is_a_single_primary() {
    let err = parse_error("let x = 1 + 2;");
    assert_eq!(err.kind, SyntaxErrorKind::Expected("expected ;".to_string()));

    let err = parse_error("let x = ;");
    assert_eq!(err.kind, SyntaxErrorKind::Expected("expected expression".to_string()));
}

#[test]
fn declaration_errors() {
    let err = parse_error("let = 5;");
    assert_eq!(err.kind, SyntaxErrorKind::Expected("expected identifier".to_string()));

    let err = parse_error("let x 5;");
    assert_eq!(err.kind, SyntaxErrorKind::Expected("expected =".to_string()));

    let err = parse_error("let x: = 5;");
    assert_eq!(err.kind, SyntaxErrorKind::Expected("expected type".to_string()));

    let err = parse_error("let x = 5");
    assert_eq!(err.kind, SyntaxErrorKind::Expected("expected ;".to_string()));
}

#[test]
fn binary_chains_are_left_associative() {
    let program = parse_src("1 - 2 - 3");
    let expected = Expr::Binary { left:  Box::new(Expr::Binary { left:  literal(1_i64, 1),
                                                                  op:    BinaryOperator::Sub,
                                                                  right: literal(2_i64, 1),
                                                                  line:  1, }),
                                  op:    BinaryOperator::Sub,
                                  right: literal(3_i64, 1),
                                  line:  1, };
    assert_eq!(program, [expected]);
}

#[test]
fn precedence_tiers() {
    let program = parse_src("1 + 2 * 3 > 4 == true");
    assert_eq!(program[0].to_string(), "((([1] + ([2] * [3])) > [4]) == [true])");

    let program = parse_src("1 <= 2 != 3 % 2 < 1");
    assert_eq!(program[0].to_string(), "(([1] <= [2]) != (([3] % [2]) < [1]))");
}

#[test]
fn unary_not_nests() {
    let program = parse_src("!!false");
    let expected = Expr::Unary { op:      UnaryOperator::Not,
                                 operand: Box::new(Expr::Unary { op:      UnaryOperator::Not,
                                                                 operand: literal(false, 1),
                                                                 line:    1, }),
                                 line:    1, };
    assert_eq!(program, [expected]);
}

#[test]
fn primaries() {
    let program = parse_src("\"s\"; 1; 2.5; 'c'; true; false; name");
    assert_eq!(program,
               [*literal("s", 1),
                *literal(1_i64, 1),
                *literal(2.5, 1),
                *literal('c', 1),
                *literal(true, 1),
                *literal(false, 1),
                Expr::Identifier { name: "name".to_string(),
                                   line: 1, }]);
}

#[test]
fn multi_character_char_literal() {
    let err = parse_error("'ab'");
    assert_eq!(err.kind, SyntaxErrorKind::InvalidCharLiteral);
}

#[test]
fn oversized_integer_literal() {
    let err = parse_error("1 + 99999999999999999999");
    assert_eq!(err.kind, SyntaxErrorKind::LiteralTooLarge);
    assert_eq!(err.column, 4);
}

#[test]
fn division_by_literal_zero_fails_at_parse_time() {
    let err = parse_error("1 / 0");
    assert_eq!(err.kind, SyntaxErrorKind::DivisionByZero);
    assert_eq!(err.source_line, "1 / 0");
    assert_eq!(err.column, 4);
    assert_eq!(err.to_string(), "1 / 0\n    ^\nSyntax Error: 'division by zero' on line 1");

    assert_eq!(parse_error("2.5 / 0.0").kind, SyntaxErrorKind::DivisionByZero);
    assert_eq!(parse_error("6 / 3 / 0 + 1").kind, SyntaxErrorKind::DivisionByZero);
}

#[test]
fn only_literal_zero_divisors_are_rejected() {
    assert_eq!(parse_src("1 / 0.5").len(), 1);
    assert_eq!(parse_src("1 % 0").len(), 1);
    assert_eq!(parse_src("0 / 1").len(), 1);
}

#[test]
fn statements_need_separators() {
    assert_eq!(parse_src("1; 2;\n3").len(), 3);
    assert_eq!(parse_src(";;1;;").len(), 1);
    assert!(parse_src("").is_empty());

    let err = parse_error("1 2");
    assert_eq!(err.kind, SyntaxErrorKind::Expected("expected ;".to_string()));
    assert_eq!(err.column, 2);
}

#[test]
fn bad_tokens_are_unknown() {
    let err = parse_error("let x = 1;\nx + # 2");
    assert_eq!(err.kind, SyntaxErrorKind::Expected("unknown token".to_string()));
    assert_eq!(err.line, 2);
    assert_eq!(err.source_line, "x + # 2");
    assert_eq!(err.column, 4);
    assert_eq!(err.message(), "Syntax Error: 'unknown token' on line 2");
}

#[test]
fn control_flow_keywords_are_not_statements() {
    let err = parse_error("if true");
    assert_eq!(err.kind, SyntaxErrorKind::Expected("unknown token".to_string()));
    assert_eq!(err.column, 0);
}

#[test]
fn missing_operand_points_past_the_line() {
    let err = parse_error("1 +");
    assert_eq!(err.kind, SyntaxErrorKind::Expected("unknown token".to_string()));
    assert_eq!(err.source_line, "1 +");
    assert_eq!(err.column, 4);
}

#[test]
fn nodes_take_the_line_of_their_token() {
    let program = parse_src("\n\nlet\nx = 1;\n1\n+\n2");
    assert_eq!(program[0].line_number(), 4);
    assert_eq!(program[1].line_number(), 6);
}
