//! Lexical analysis for the language.
//!
//! This module contains the scanner that converts source text into a flat
//! stream of positioned tokens. It handles:
//!
//! - Recognition of keywords, identifiers, numeric literals and operators
//! - Line and column tracking for every token and error
//! - Line and block comments and whitespace handling

pub mod lexer;
pub mod tokens;
