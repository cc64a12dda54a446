use std::fmt::Display;

use log::error;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { character } => ErrorTip::Suggestion(format!(
                "`{}` does not start any token",
                character.escape_debug()
            )),
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Add a closing `\"` to the string"))
            }
            ErrorImpl::UnterminatedComment => ErrorTip::Suggestion(String::from(
                "Every `/*` needs a matching `*/`, including nested ones",
            )),
            ErrorImpl::NumberParseError { .. } => ErrorTip::None,
        }
    }

    /// Hands this error to a reporter as a `(line, message)` pair.
    pub fn report_to<R: Reporter + ?Sized>(&self, reporter: &mut R) {
        reporter.report(self.line, &self.get_message());
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unexpected character.")]
    UnexpectedCharacter { character: char },
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Unterminated multiline comment.")]
    UnterminatedComment,
    #[error("Malformed number literal: {lexeme:?}")]
    NumberParseError { lexeme: String },
}

/// A single reported problem, as seen by a [`Reporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

/// Sink for lexical diagnostics.
///
/// Reporting never alters how the lexer proceeds; it only records that
/// something went wrong so the caller can decide what to do with the tokens.
pub trait Reporter {
    fn report(&mut self, line: usize, message: &str);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, line: usize, message: &str) {
        (**self).report(line, message);
    }
}

impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, line: usize, message: &str) {
        self.push(Diagnostic {
            line,
            message: message.to_string(),
        });
    }
}

/// Caller-owned record of every diagnostic raised during one or more scans.
#[derive(Debug, Clone, Default)]
pub struct ErrorCollector {
    diagnostics: Vec<Diagnostic>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn reset(&mut self) {
        self.diagnostics.clear();
    }
}

impl Reporter for ErrorCollector {
    fn report(&mut self, line: usize, message: &str) {
        self.diagnostics.report(line, message);
    }
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Default)]
pub struct LogReporter {
    reported: usize,
}

impl LogReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        self.reported > 0
    }

    pub fn count(&self) -> usize {
        self.reported
    }
}

impl Reporter for LogReporter {
    fn report(&mut self, line: usize, message: &str) {
        error!("[line {}] Error: {}", line, message);
        self.reported += 1;
    }
}
