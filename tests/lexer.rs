use albus::{
    Token, TokenKind,
    error::{SyntaxError, SyntaxErrorKind},
    tokenize,
};

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src).unwrap_or_else(|e| panic!("Failed to tokenize {src:?}:\n{e}"))
                 .into_iter()
                 .map(|t| t.kind)
                 .collect()
}

fn lex_error(src: &str) -> SyntaxError {
    match tokenize(src) {
        Ok(tokens) => panic!("Tokenizing {src:?} succeeded with {tokens:?}"),
        Err(e) => e,
    }
}

#[test]
fn integer_literals() {
    for n in ["0", "7", "42", "1234567890", "9223372036854775807"] {
        let tokens = tokenize(n).unwrap();
        assert_eq!(tokens,
                   [Token::new(TokenKind::Integer, n, 1), Token::new(TokenKind::Eof, "", 1)]);
    }
}

#[test]
fn one_decimal_point_makes_a_float() {
    for src in ["3.14", "0.5", "10.0", "123.456"] {
        let tokens = tokenize(src).unwrap();
        assert_eq!(tokens[0], Token::new(TokenKind::Float, src, 1));
        assert_eq!(tokens.len(), 2);
    }
}

#[test]
fn second_decimal_point_is_invalid() {
    let err = lex_error("1.2.3");
    assert_eq!(err.kind, SyntaxErrorKind::InvalidNumericLiteral);
    assert_eq!(err.line, 1);
    assert_eq!(err.column, 3);
    assert_eq!(err.source_line, "1.2.3");
}

#[test]
fn trailing_decimal_point_is_invalid() {
    let err = lex_error("let x = 12.;");
    assert_eq!(err.kind, SyntaxErrorKind::InvalidNumericLiteral);
    assert_eq!(err.column, 10);
}

#[test]
fn double_tokens_need_adjacent_characters() {
    assert_eq!(kinds("=="), [TokenKind::DoubleEquals, TokenKind::Eof]);
    assert_eq!(kinds("= ="),
               [TokenKind::SingleEquals, TokenKind::SingleEquals, TokenKind::Eof]);
    assert_eq!(kinds("!= <= >="),
               [TokenKind::NotEquals,
                TokenKind::LessThanEquals,
                TokenKind::GreaterThanEquals,
                TokenKind::Eof]);
}

#[test]
fn lone_prefixes_of_double_tokens() {
    assert_eq!(kinds("!x"), [TokenKind::Exclamation, TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(kinds("a=b"),
               [TokenKind::Identifier,
                TokenKind::SingleEquals,
                TokenKind::Identifier,
                TokenKind::Eof]);
    assert_eq!(kinds("<>"), [TokenKind::LessThan, TokenKind::GreaterThan, TokenKind::Eof]);
    assert_eq!(kinds("!=="), [TokenKind::NotEquals, TokenKind::SingleEquals, TokenKind::Eof]);
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(kinds("let mut while if true false"),
               [TokenKind::Let,
                TokenKind::Mut,
                TokenKind::While,
                TokenKind::If,
                TokenKind::True,
                TokenKind::False,
                TokenKind::Eof]);
    assert_eq!(kinds("letter iffy"),
               [TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn identifiers_are_letters_only() {
    let tokens = tokenize("abc1").unwrap();
    assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "abc", 1));
    assert_eq!(tokens[1], Token::new(TokenKind::Integer, "1", 1));
}

#[test]
fn punctuation() {
    assert_eq!(kinds("; : ( ) { } , . + - * / % !"),
               [TokenKind::SemiColon,
                TokenKind::Colon,
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Modulo,
                TokenKind::Exclamation,
                TokenKind::Eof]);
}

#[test]
fn string_and_char_literals_keep_their_quotes() {
    let tokens = tokenize(r#""hello world" 'a'"#).unwrap();
    assert_eq!(tokens[0], Token::new(TokenKind::String, "\"hello world\"", 1));
    assert_eq!(tokens[1], Token::new(TokenKind::Char, "'a'", 1));
}

#[test]
fn unterminated_literals() {
    let err = lex_error("let s = \"abc");
    assert_eq!(err.kind, SyntaxErrorKind::UnterminatedString);
    assert_eq!(err.column, 8);

    let err = lex_error("'a");
    assert_eq!(err.kind, SyntaxErrorKind::UnterminatedChar);
    assert_eq!(err.column, 0);
}

#[test]
fn empty_char_literal() {
    let err = lex_error("1 + ''");
    assert_eq!(err.kind, SyntaxErrorKind::EmptyCharLiteral);
    assert_eq!(err.column, 4);
    assert_eq!(err.to_string(), "1 + ''\n    ^\nSyntax Error: empty char literal on line 1");
}

#[test]
fn unknown_characters_become_bad_tokens() {
    let tokens = tokenize("1 # 2").unwrap();
    assert_eq!(tokens[1], Token::new(TokenKind::BadToken, "#", 1));
    assert_eq!(tokens.len(), 4);

    assert_eq!(kinds("\t"), [TokenKind::BadToken, TokenKind::Eof]);
}

#[test]
fn lines_are_counted() {
    let tokens = tokenize("1\n2\r\n\n3").unwrap();
    let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, [1, 2, 4, 4]);
}

#[test]
fn strings_spanning_lines_keep_their_start_line() {
    let tokens = tokenize("\"a\nb\" 1\n2").unwrap();
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 2);
    assert_eq!(tokens[2].line, 3);
}

#[test]
fn errors_show_the_offending_line() {
    let err = lex_error("let a = 1;\nlet b = 2..5;\nlet c = 3;");
    assert_eq!(err.line, 2);
    assert_eq!(err.source_line, "let b = 2..5;");
    assert_eq!(err.column, 10);
}

#[test]
fn lexemes_and_whitespace_reproduce_the_source() {
    let source = "let mut x: int = 42;\n  \"str\"  == 'c' !=\r\n3.5 % 7 # >=";
    let tokens = tokenize(source).unwrap();

    let mut rebuilt = String::new();
    let mut cursor = 0;
    for token in &tokens {
        let whitespace = source[cursor..].len()
                         - source[cursor..].trim_start_matches([' ', '\n', '\r']).len();
        rebuilt.push_str(&source[cursor..cursor + whitespace]);
        cursor += whitespace;

        assert!(source[cursor..].starts_with(&token.lexeme), "{token}");
        rebuilt.push_str(&token.lexeme);
        cursor += token.lexeme.len();
    }

    assert_eq!(rebuilt, source);
}
