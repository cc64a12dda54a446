#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;
pub mod macros;

pub use errors::errors::{Diagnostic, Error, ErrorCollector, ErrorImpl, LogReporter, Reporter};
pub use lexer::lexer::{scan, tokenize, Lexer};
pub use lexer::tokens::{Literal, Token, TokenKind, RESERVED_LOOKUP};
