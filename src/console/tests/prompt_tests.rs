//! Tests for field input interpretation

extern crate std;

use crate::console::{interpret_line, FieldInput};
use crate::coordinate::errors::ConvertError;

#[test]
fn test_plain_number() {
    std::assert_eq!(interpret_line("12").unwrap(), FieldInput::Value(12.0));
    std::assert_eq!(interpret_line("-3.5").unwrap(), FieldInput::Value(-3.5));
}

#[test]
fn test_scientific_notation() {
    std::assert_eq!(interpret_line("1e3").unwrap(), FieldInput::Value(1000.0));
}

#[test]
fn test_surrounding_whitespace_is_stripped() {
    std::assert_eq!(interpret_line("  42.5  \n").unwrap(), FieldInput::Value(42.5));
}

#[test]
fn test_quit_keywords() {
    for word in ["q", "quit", "exit"] {
        std::assert_eq!(interpret_line(word).unwrap(), FieldInput::Quit);
    }
}

#[test]
fn test_quit_keywords_ignore_case_and_whitespace() {
    for word in ["Q", "QUIT", "Exit", "  qUiT  \n"] {
        std::assert_eq!(interpret_line(word).unwrap(), FieldInput::Quit);
    }
}

#[test]
fn test_invalid_text_is_reported() {
    match interpret_line("abc") {
        Err(ConvertError::InvalidNumber(text)) => std::assert_eq!(text, "abc"),
        other => std::panic!("expected InvalidNumber, got {:?}", other),
    }
}

#[test]
fn test_empty_line_is_not_a_number() {
    std::assert!(matches!(
        interpret_line("   \n"),
        Err(ConvertError::InvalidNumber(_))
    ));
}
