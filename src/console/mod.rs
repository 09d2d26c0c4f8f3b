//! Interactive console session
//!
//! This module implements the prompt/read/convert loop that drives
//! the tool, reading one field per line from the user.

mod prompt;
mod session;
mod tests;

pub use self::prompt::{interpret_line, FieldInput};
pub use self::session::ConsoleSession;
