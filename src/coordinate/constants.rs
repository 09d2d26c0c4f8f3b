//! Conversion constants
//!
//! This module defines constants used throughout the conversion code,
//! making the code more readable and maintainable by replacing magic numbers
//! with descriptive names.

/// Origin offset constants
///
/// The Cartesian point that radius = 0 maps to, independent of angle.
pub mod offsets {
    /// X coordinate of the radius = 0 point
    pub const X0: f64 = 278.0;

    /// Z coordinate of the radius = 0 point
    pub const Z0: f64 = 300.0;
}

/// Formatting constants for result output
pub mod output {
    /// Digits after the decimal point in printed coordinates
    pub const DECIMAL_PLACES: usize = 6;
}
