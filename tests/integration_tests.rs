//! Integration tests for the public scanning API.
//!
//! These tests check properties that hold for whole token streams rather
//! than individual lexemes: the end-of-input sentinel, line accounting,
//! lexeme coverage and error reporting through caller-owned reporters.

use lox_lexer::{scan, tokenize, ErrorCollector, Literal, LogReporter, TokenKind};

const SOURCES: &[&str] = &[
    "",
    "(){}",
    "var x = 42; print x;",
    "\"hello world\"",
    "\"hello world",
    "/* outer /* nested */ end of outer */",
    "/* level 1 /* level 2 /* level 3 */ level 2 ends ",
    "// only a comment",
    "func add(a, b) {\n  return a + b;\n}\n",
    "var s = \"multi\nline\nstring\";\nprint s;",
    "x /* a\nb /* c\n */ d\n */ y",
    "@ # $ ~ `",
    "1.5 2. .3 4.x",
    "\n\n\n",
];

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_eof_is_last_and_unique() {
    init_logger();

    for source in SOURCES {
        let (tokens, _) = scan(source);

        assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::Eof));
        assert_eq!(
            tokens
                .iter()
                .filter(|token| token.kind == TokenKind::Eof)
                .count(),
            1,
            "source: {:?}",
            source
        );
    }
}

#[test]
fn test_lines_are_monotonic_and_count_every_newline() {
    init_logger();

    for source in SOURCES {
        let (tokens, _) = scan(source);

        assert!(tokens.iter().all(|token| token.line >= 1));
        assert!(
            tokens.windows(2).all(|pair| pair[0].line <= pair[1].line),
            "source: {:?}",
            source
        );

        let newlines = source.chars().filter(|c| *c == '\n').count();
        assert_eq!(tokens.last().map(|token| token.line), Some(newlines + 1));
    }
}

#[test]
fn test_lexemes_reproduce_source_without_whitespace() {
    let source = "func fib(n) {\n  if (n <= 1) return n;\n  return fib(n - 2) + fib(n - 1);\n}\nprint fib(20) != 6765.0;";
    let (tokens, errors) = scan(source);
    assert!(!errors.had_error());

    let joined: String = tokens
        .iter()
        .filter(|token| token.kind != TokenKind::Eof)
        .map(|token| token.lexeme.as_str())
        .collect();
    let expected: String = source.chars().filter(|c| !c.is_whitespace()).collect();

    assert_eq!(joined, expected);
}

#[test]
fn test_lexemes_skip_comments() {
    let source = "a/*x/*y*/z*/b//c\nd";
    let (tokens, errors) = scan(source);
    assert!(!errors.had_error());

    let joined: Vec<&str> = tokens.iter().map(|token| token.lexeme.as_str()).collect();

    assert_eq!(joined, vec!["a", "b", "d", ""]);
    assert_eq!(tokens[2].line, 2);
}

#[test]
fn test_non_empty_lexemes() {
    for source in SOURCES {
        let (tokens, _) = scan(source);

        assert!(tokens
            .iter()
            .filter(|token| token.kind != TokenKind::Eof)
            .all(|token| !token.lexeme.is_empty()));
    }
}

#[test]
fn test_literals_only_on_strings_and_numbers() {
    for source in SOURCES {
        let (tokens, _) = scan(source);

        for token in tokens {
            match token.kind {
                TokenKind::String => assert!(matches!(token.literal, Some(Literal::String(_)))),
                TokenKind::Number => assert!(matches!(token.literal, Some(Literal::Number(_)))),
                _ => assert!(token.literal.is_none()),
            }
        }
    }
}

#[test]
fn test_program_scan() {
    let source = "class Point {\n  init(x, y) {\n    this.x = x;\n  }\n}\nvar p = Point(1, 2.5);\nprint p.x >= 0 and nil == false;";
    let (tokens, errors) = scan(source);

    assert!(!errors.had_error());
    assert_eq!(tokens[0].kind, TokenKind::Class);
    assert_eq!(tokens[1].lexeme, "Point");

    let this = tokens
        .iter()
        .find(|token| token.kind == TokenKind::This)
        .map(|token| token.line);
    assert_eq!(this, Some(3));

    let numbers: Vec<&Literal> = tokens
        .iter()
        .filter_map(|token| token.literal.as_ref())
        .collect();
    assert_eq!(numbers, vec![&Literal::Number(1.0), &Literal::Number(2.5), &Literal::Number(0.0)]);

    assert!(tokens.iter().any(|token| token.kind == TokenKind::GreaterEqual));
    assert!(tokens.iter().any(|token| token.kind == TokenKind::And));
    assert!(tokens.iter().any(|token| token.kind == TokenKind::EqualEqual));
}

#[test]
fn test_errors_do_not_stop_scanning() {
    let (tokens, errors) = scan("var a = 1; @ var b = 2; # print a;");

    assert_eq!(errors.count(), 2);
    assert_eq!(
        tokens
            .iter()
            .filter(|token| token.kind == TokenKind::Var)
            .count(),
        2
    );
    assert_eq!(tokens[tokens.len() - 2].kind, TokenKind::Semicolon);
}

#[test]
fn test_one_error_per_unterminated_construct() {
    let (_, errors) = scan("/* /* /* /*");
    assert_eq!(errors.count(), 1);

    let (_, errors) = scan("print \"never closed\n\n");
    assert_eq!(errors.count(), 1);
    assert_eq!(errors.diagnostics()[0].line, 3);
}

#[test]
fn test_log_reporter() {
    init_logger();

    let mut reporter = LogReporter::new();
    let tokens = tokenize("\"open", Some("broken.lox".to_string()), &mut reporter);

    assert_eq!(tokens.len(), 1);
    assert!(reporter.had_error());
    assert_eq!(reporter.count(), 1);
}

#[test]
fn test_collector_shared_across_scans() {
    let mut collector = ErrorCollector::new();

    let clean = tokenize("print 1;", None, &mut collector);
    assert_eq!(clean.len(), 4);
    assert!(!collector.had_error());

    tokenize("print ?;", None, &mut collector);
    assert_eq!(collector.count(), 1);
}
