//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span covering a column range on one line

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's TokenValue
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Identifier, TokenValue::Text("x".to_string()), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a Span from `$start` (inclusive) to `$end` (exclusive) columns of `$line`.
#[macro_export]
macro_rules! MK_SPAN {
    ($file:expr, $line:expr, $start:expr, $end:expr) => {
        $crate::Span {
            start: $crate::Position {
                line: $line,
                column: $start,
                file: std::rc::Rc::clone(&$file),
            },
            end: $crate::Position {
                line: $line,
                column: $end,
                file: std::rc::Rc::clone(&$file),
            },
        }
    };
}
