//! Error types and error reporting for the lexer.
//!
//! This module defines:
//!
//! - Lexical error variants with the line they were found on
//! - The `Reporter` trait the lexer reports diagnostics through
//! - Caller-owned collectors that remember whether anything went wrong

pub mod errors;
