use std::rc::Rc;

use tracing::{debug, trace};

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_SPAN, MK_TOKEN};

use super::{
    classify::{classify, validate_number},
    tokens::{Literal, Statement, TokenKind, TokenValue, BRACKET_LOOKUP},
};

pub const OPEN_QUOTE: char = '“';
pub const CLOSE_QUOTE: char = '”';
pub const COMMENT_MARKER: char = '#';
pub const DEFAULT_FILE_NAME: &str = "<input>";

/// Whitespace between words. The information separators U+001C..U+001F
/// count as whitespace here too.
pub fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

/// Scans a single line into a statement.
///
/// `buffer` holds the word in progress. While `in_string` is set it holds the
/// string literal instead, opening quote included.
pub struct Lexer {
    statement: Statement,
    errors: Vec<Error>,
    buffer: String,
    buffer_start: u32,
    in_string: bool,
    line: u32,
    column_offset: u32,
    file: Rc<String>,
}

impl Lexer {
    /// `column_offset` is the number of characters trimmed off the front of
    /// the line, so columns still point into the untrimmed source.
    pub fn new(line: u32, column_offset: u32, file: Rc<String>) -> Lexer {
        Lexer {
            statement: Statement::new(line),
            errors: vec![],
            buffer: String::new(),
            buffer_start: 0,
            in_string: false,
            line,
            column_offset,
            file,
        }
    }

    pub fn run(mut self, text: &str) -> (Statement, Vec<Error>) {
        let mut column = self.column_offset;

        for ch in text.chars() {
            column += 1;

            if self.in_string {
                if ch == CLOSE_QUOTE {
                    self.close_string(column + 1);
                } else {
                    self.buffer.push(ch);
                }
                continue;
            }

            if is_separator(ch) {
                self.flush_word(column);
            } else if BRACKET_LOOKUP.contains_key(&ch) {
                self.flush_word(column);
                self.append(ch, column);
                self.flush_word(column + 1);
            } else if ch == OPEN_QUOTE {
                self.flush_word(column);
                self.in_string = true;
                self.append(ch, column);
            } else {
                self.append(ch, column);
            }
        }

        if self.in_string {
            let literal = self.buffer.chars().skip(1).collect();
            self.errors.push(Error::new(
                ErrorImpl::UnterminatedString { literal },
                self.position(self.buffer_start),
            ));
            self.buffer.clear();
            self.in_string = false;
        } else {
            self.flush_word(column + 1);
        }

        (self.statement, self.errors)
    }

    fn append(&mut self, ch: char, column: u32) {
        if self.buffer.is_empty() {
            self.buffer_start = column;
        }
        self.buffer.push(ch);
    }

    fn position(&self, column: u32) -> Position {
        Position {
            line: self.line,
            column,
            file: Rc::clone(&self.file),
        }
    }

    fn span(&self, end: u32) -> Span {
        MK_SPAN!(self.file, self.line, self.buffer_start, end)
    }

    /// Classifies the pending word, if any, ending just before `end`.
    fn flush_word(&mut self, end: u32) {
        if self.buffer.is_empty() {
            return;
        }

        let word = std::mem::take(&mut self.buffer);

        if let Err(error) = validate_number(&word) {
            self.errors.push(Error::new(error, self.position(self.buffer_start)));
            return;
        }

        let token = classify(&word, self.span(end));
        trace!(line = self.line, column = self.buffer_start, word = %word, kind = %token.kind, "classified word");
        self.statement.push(token);
    }

    fn close_string(&mut self, end: u32) {
        let literal: String = self.buffer.chars().skip(1).collect();
        let span = self.span(end);

        self.statement.push(MK_TOKEN!(
            TokenKind::Literal,
            TokenValue::Literal(Literal::Str(literal)),
            span
        ));
        self.buffer.clear();
        self.in_string = false;
    }
}

/// Tokenizes one line on its own, as line 1 of an unnamed source.
pub fn tokenize_line(line: &str) -> Result<Statement, Vec<Error>> {
    let (statement, errors) = Lexer::new(1, 0, Rc::new(String::from(DEFAULT_FILE_NAME))).run(line);

    if errors.is_empty() {
        Ok(statement)
    } else {
        Err(errors)
    }
}

/// Tokenizes a whole source, one statement per line that is neither blank nor
/// a `#` comment.
///
/// Every line is scanned even after an error, so the error list covers the
/// whole source.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Statement>, Vec<Error>> {
    let file = Rc::new(file.unwrap_or_else(|| String::from(DEFAULT_FILE_NAME)));

    let mut statements = vec![];
    let mut errors = vec![];

    let retained = source.split('\n').enumerate().filter_map(|(index, raw)| {
        let line = index as u32 + 1;
        let text = raw.trim_matches(is_separator);

        if text.is_empty() || text.starts_with(COMMENT_MARKER) {
            debug!(line, "skipping blank or comment line");
            return None;
        }

        let column_offset = (raw.chars().count() - raw.trim_start_matches(is_separator).chars().count()) as u32;
        Some((line, column_offset, text))
    });

    for (line, column_offset, text) in retained {
        debug!(line, text, "processing line");

        let (statement, line_errors) = Lexer::new(line, column_offset, Rc::clone(&file)).run(text);
        statements.push(statement);
        errors.extend(line_errors);
    }

    debug!(file = %file, statements = statements.len(), errors = errors.len(), "tokenized source");

    if errors.is_empty() {
        Ok(statements)
    } else {
        Err(errors)
    }
}
