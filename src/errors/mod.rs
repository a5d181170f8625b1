//! Lexical error types.
//!
//! - Error structures carrying the source position
//! - Error names and suggestions for reporting

pub mod errors;
