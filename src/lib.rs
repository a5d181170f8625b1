#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use unicode_width::UnicodeWidthStr;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod source;

/// A 1-based line and column; columns count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source.split('\n').nth(line as usize - 1)
}

/// Formats an error as a report with the offending line and a caret under
/// the error's column.
pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: name (tip)
        -> main.吉吉:3:4
          |
        3 | 输出 “hello
          | -----^
    */

    let position = error.get_position();
    let mut report = String::new();

    if let ErrorTip::None = error.get_tip() {
        report.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        report.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    report.push_str(&format!("-> {}\n", position));

    let Some(line_text) = get_line_at_position(source, position.line) else {
        return report;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let before: String = line_text_removed
        .chars()
        .take((position.column as usize).saturating_sub(removed_whitespace + 1))
        .collect();
    let arrows = before.width() + 1;

    report.push_str(&format!("{:>padding$}\n", "|"));
    report.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));
    report.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    report
}

pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", render_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start();
    (trimmed, string.chars().count() - trimmed.chars().count())
}
