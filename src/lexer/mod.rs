//! Lexical analysis module.
//!
//! This module contains the lexer (scanner) that converts source text
//! into a stream of tokens for the parser. It handles:
//!
//! - Punctuation and one/two character operators
//! - Recognition of keywords, identifiers, string and number literals
//! - Line comments and arbitrarily nested block comments
//! - Line tracking for diagnostics

pub mod lexer;
pub mod tokens;
