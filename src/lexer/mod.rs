//! Lexical analysis for 吉吉 source.
//!
//! Source text is split into lines and each retained line is scanned
//! character by character into a `Statement`:
//!
//! - Whitespace and bracket characters end the word in progress
//! - Completed words are classified as keywords, brackets, type names,
//!   builtin functions, literals or identifiers
//! - `“…”` string literals are read whole, without escapes
//! - Blank lines and `#` comment lines are skipped

pub mod classify;
pub mod lexer;
pub mod tokens;
