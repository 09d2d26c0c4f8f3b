//! Origin offset for the radius = 0 point

use super::constants::offsets;

/// Fixed Cartesian offset that the radius = 0 point maps to
///
/// Set once at startup and never mutated; the transformer takes it
/// by value and the angle has no influence on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OriginOffset {
    /// X coordinate of the origin
    pub x0: f64,
    /// Z coordinate of the origin
    pub z0: f64,
}

impl OriginOffset {
    /// Create an offset from explicit coordinates
    pub fn new(x0: f64, z0: f64) -> Self {
        OriginOffset { x0, z0 }
    }
}

impl Default for OriginOffset {
    fn default() -> Self {
        OriginOffset {
            x0: offsets::X0,
            z0: offsets::Z0,
        }
    }
}
