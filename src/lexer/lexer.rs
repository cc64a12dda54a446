use log::{debug, error, trace};

use crate::{
    errors::errors::{Error, ErrorCollector, ErrorImpl, Reporter},
    MK_TOKEN,
};

use super::tokens::{Literal, Token, TokenKind, RESERVED_LOOKUP};

/// Single-use scanner over one source text.
///
/// `start` marks the first character of the lexeme being scanned and
/// `current` the next unread character; `0 <= start <= current <= len`.
pub struct Lexer<'r, R: Reporter + ?Sized> {
    source: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    file: String,
    reporter: &'r mut R,
}

impl<'r, R: Reporter + ?Sized> Lexer<'r, R> {
    pub fn new(source: &str, file: Option<String>, reporter: &'r mut R) -> Lexer<'r, R> {
        let file_name = file.unwrap_or_else(|| String::from("shell"));

        Lexer {
            source: source.chars().collect(),
            tokens: vec![],
            start: 0,
            current: 0,
            line: 1,
            file: file_name,
            reporter,
        }
    }

    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.at_eof() {
            self.start = self.current;
            self.scan_token();
        }

        self.start = self.current;
        let eof = MK_TOKEN!(TokenKind::Eof, String::new(), None, self.line);
        self.push(eof);

        debug!(
            "{}: scanned {} tokens over {} lines",
            self.file,
            self.tokens.len(),
            self.line
        );
        self.tokens
    }

    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            '!' => self.add_either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.add_either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.add_either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.add_either('=', TokenKind::GreaterEqual, TokenKind::Greater),

            '/' => {
                if self.match_next('/') {
                    self.line_comment();
                } else if self.match_next('*') {
                    self.block_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,

            '"' => self.string(),
            c if is_digit(c) => self.number(),
            c if is_alpha(c) => self.identifier(),

            character => self.error(ErrorImpl::UnexpectedCharacter { character }),
        }
    }

    fn line_comment(&mut self) {
        while let Some(c) = self.at() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Skips a `/* ... */` comment whose opener is already consumed.
    /// Openers and closers nest; only the outermost closer ends the comment.
    fn block_comment(&mut self) {
        let mut depth: usize = 1;

        while depth > 0 && !self.at_eof() {
            match (self.at(), self.peek_next()) {
                (Some('/'), Some('*')) => {
                    self.advance_n(2);
                    depth += 1;
                }
                (Some('*'), Some('/')) => {
                    self.advance_n(2);
                    depth -= 1;
                }
                _ => {
                    if self.advance() == '\n' {
                        self.line += 1;
                    }
                }
            }
        }

        if depth > 0 {
            self.error(ErrorImpl::UnterminatedComment);
        }
    }

    fn string(&mut self) {
        while let Some(c) = self.at() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.at_eof() {
            self.error(ErrorImpl::UnterminatedString);
            return;
        }

        // closing quote
        self.advance();

        let value = self.slice(self.start + 1, self.current - 1);
        self.add_literal(TokenKind::String, Some(Literal::String(value)));
    }

    fn number(&mut self) {
        self.consume_digits();

        if self.at() == Some('.') && self.peek_next().is_some_and(is_digit) {
            self.advance();
            self.consume_digits();
        }

        let lexeme = self.lexeme();
        match lexeme.parse::<f64>() {
            Ok(value) => self.add_literal(TokenKind::Number, Some(Literal::Number(value))),
            Err(err) => {
                error!("{}: could not parse numeral {:?}: {}", self.file, lexeme, err);
                self.error(ErrorImpl::NumberParseError { lexeme });
            }
        }
    }

    fn identifier(&mut self) {
        while self.at().is_some_and(is_alphanumeric) {
            self.advance();
        }

        let text = self.lexeme();
        let kind = RESERVED_LOOKUP
            .get(text.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);

        self.add_token(kind);
    }

    fn consume_digits(&mut self) {
        while self.at().is_some_and(is_digit) {
            self.advance();
        }
    }

    fn add_either(&mut self, expected: char, matched: TokenKind, bare: TokenKind) {
        let kind = if self.match_next(expected) { matched } else { bare };
        self.add_token(kind);
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal(kind, None);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let token = MK_TOKEN!(kind, self.lexeme(), literal, self.line);
        self.push(token);
    }

    fn error(&mut self, error_impl: ErrorImpl) {
        let error = Error::new(error_impl, self.line);
        trace!("{}: {}", self.file, error);
        error.report_to(&mut *self.reporter);
    }

    fn push(&mut self, token: Token) {
        trace!("{}: {}", self.file, token);
        self.tokens.push(token);
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn advance_n(&mut self, n: usize) {
        self.current = (self.current + n).min(self.source.len());
    }

    fn match_next(&mut self, expected: char) -> bool {
        if self.at() == Some(expected) {
            self.current += 1;
            return true;
        }

        false
    }

    pub fn at(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.source.get(self.current + 1).copied()
    }

    fn lexeme(&self) -> String {
        self.slice(self.start, self.current)
    }

    fn slice(&self, from: usize, to: usize) -> String {
        self.source[from..to].iter().collect()
    }

    pub fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

/// Scans `source` into tokens, sending every lexical problem to `reporter`.
///
/// Always returns a stream ending in exactly one `Eof` token; errors never
/// stop the scan early.
pub fn tokenize<R: Reporter + ?Sized>(
    source: &str,
    file: Option<String>,
    reporter: &mut R,
) -> Vec<Token> {
    Lexer::new(source, file, reporter).scan_tokens()
}

/// Scans `source` with a fresh [`ErrorCollector`] and returns both.
pub fn scan(source: &str) -> (Vec<Token>, ErrorCollector) {
    let mut collector = ErrorCollector::new();
    let tokens = tokenize(source, None, &mut collector);
    (tokens, collector)
}
