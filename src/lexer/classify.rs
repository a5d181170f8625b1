use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::ErrorImpl, Span, MK_TOKEN};

use super::tokens::{
    Literal, Token, TokenKind, TokenValue, BRACKET_LOOKUP, BUILTIN_LOOKUP, FALSE_WORD,
    KEYWORD_LOOKUP, NULL_WORD, TRUE_WORD, TYPE_LOOKUP,
};

lazy_static! {
    static ref DECIMAL: Regex = Regex::new(r"^\p{Nd}+$").unwrap();
    static ref DECIMAL_DIGIT: Regex = Regex::new(r"^\p{Nd}$").unwrap();
    // Only digits and dots, with at least one digit.
    static ref NUMERIC_SHAPE: Regex = Regex::new(r"^[\p{Nd}.]*\p{Nd}[\p{Nd}.]*$").unwrap();
}

/// Classifies a completed word. Reserved sets are checked before literals,
/// and literals before identifiers; the first match wins.
pub fn classify(word: &str, span: Span) -> Token {
    let text = || TokenValue::Text(String::from(word));

    if let Some(keyword) = KEYWORD_LOOKUP.get(word) {
        return MK_TOKEN!(TokenKind::Keyword(*keyword), text(), span);
    }

    if let Some(bracket) = single_char(word).and_then(|c| BRACKET_LOOKUP.get(&c)) {
        return MK_TOKEN!(TokenKind::Bracket(*bracket), text(), span);
    }

    if let Some(type_name) = TYPE_LOOKUP.get(word) {
        return MK_TOKEN!(TokenKind::TypeName(*type_name), text(), span);
    }

    if let Some(builtin) = BUILTIN_LOOKUP.get(word) {
        return MK_TOKEN!(TokenKind::BuiltinFunction(*builtin), text(), span);
    }

    if let Some(literal) = literal_word(word).or_else(|| parse_number(word)) {
        return MK_TOKEN!(TokenKind::Literal, TokenValue::Literal(literal), span);
    }

    MK_TOKEN!(TokenKind::Identifier, text(), span)
}

/// Rejects words shaped like numbers that don't parse as one, e.g. `1.2.3`
/// or an integer past `i64::MAX`. Anything else is left for `classify`.
pub fn validate_number(word: &str) -> Result<(), ErrorImpl> {
    if !NUMERIC_SHAPE.is_match(word) || parse_number(word).is_some() {
        return Ok(());
    }

    Err(ErrorImpl::MalformedNumber {
        token: String::from(word),
    })
}

fn literal_word(word: &str) -> Option<Literal> {
    match word {
        TRUE_WORD => Some(Literal::Bool(true)),
        FALSE_WORD => Some(Literal::Bool(false)),
        NULL_WORD => Some(Literal::Null),
        _ => None,
    }
}

fn parse_number(word: &str) -> Option<Literal> {
    if DECIMAL.is_match(word) {
        return to_ascii_digits(word).parse::<i64>().ok().map(Literal::Int);
    }

    if DECIMAL.is_match(&word.replacen('.', "", 1)) {
        return to_ascii_digits(word).parse::<f64>().ok().map(Literal::Float);
    }

    None
}

fn to_ascii_digits(word: &str) -> String {
    word.chars()
        .map(|c| if c == '.' { c } else { ascii_digit(c) })
        .collect()
}

/// Decimal digits are encoded in runs of ten starting at zero, and adjacent
/// runs are back to back, so a digit's value is its distance from the start
/// of its run modulo ten.
fn ascii_digit(c: char) -> char {
    if c.is_ascii_digit() {
        return c;
    }

    let mut start = c as u32;
    while let Some(previous) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(previous) {
            break;
        }
        start -= 1;
    }

    char::from(b'0' + ((c as u32 - start) % 10) as u8)
}

fn is_decimal_digit(c: char) -> bool {
    let mut buffer = [0; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buffer))
}

fn single_char(word: &str) -> Option<char> {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
