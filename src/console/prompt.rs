//! Field input interpretation
//!
//! Turns one raw line of user input into either a numeric value or a
//! request to stop, keeping the parsing logic free of any I/O.

use std::collections::HashSet;
use lazy_static::lazy_static;

use crate::coordinate::errors::{ConvertError, ConvertResult};

lazy_static! {
    // Keywords that end the session when entered at any prompt
    static ref QUIT_WORDS: HashSet<&'static str> = {
        let mut words = HashSet::new();
        words.insert("q");
        words.insert("quit");
        words.insert("exit");
        words
    };
}

/// Outcome of reading a single numeric field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldInput {
    /// A successfully parsed value
    Value(f64),
    /// The user asked to stop, or input ended
    Quit,
    /// An interrupt signal was observed during the read
    Interrupted,
}

/// Check whether trimmed input is one of the termination keywords
pub fn is_quit_word(text: &str) -> bool {
    QUIT_WORDS.contains(text.to_ascii_lowercase().as_str())
}

/// Interpret one line of input as a field value or a stop request
///
/// Surrounding whitespace is stripped before the keyword check and the
/// parse attempt, so `"  QUIT "` stops the session and `" 1e3 "` is a
/// valid number.
pub fn interpret_line(line: &str) -> ConvertResult<FieldInput> {
    let text = line.trim();

    if is_quit_word(text) {
        return Ok(FieldInput::Quit);
    }

    text.parse::<f64>()
        .map(FieldInput::Value)
        .map_err(|_| ConvertError::InvalidNumber(text.to_string()))
}
