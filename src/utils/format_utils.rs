//! Result output formatting
//!
//! Utilities for rendering converted points in the fixed decimal
//! format the tool prints.

use crate::coordinate::constants::output;
use crate::coordinate::CartesianPoint;

/// Format a converted point as the result line printed per iteration
///
/// Every coordinate is rendered with exactly six digits after the
/// decimal point, comma separated.
pub fn format_center(point: &CartesianPoint) -> String {
    format!(
        "center = {:.prec$}, {:.prec$}, {:.prec$}",
        point.x,
        point.y,
        point.z,
        prec = output::DECIMAL_PLACES
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_decimal_places() {
        let line = format_center(&CartesianPoint::new(278.0, 5.0, 290.0));
        assert_eq!(line, "center = 278.000000, 5.000000, 290.000000");
    }

    #[test]
    fn test_rounding() {
        let line = format_center(&CartesianPoint::new(1.23456789, -0.0000004, 299.9999999999));
        assert_eq!(line, "center = 1.234568, -0.000000, 300.000000");
    }
}
