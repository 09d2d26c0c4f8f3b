//! Coordinate transformation functionality

use super::offset::OriginOffset;
use super::point::{CartesianPoint, CylindricalPoint};

/// Transformer for converting cylindrical coordinates to Cartesian
///
/// The angular convention places rotation 0 degrees along the -Z axis,
/// with increasing angle rotating toward +X. At 90 degrees the radius
/// lies entirely along +X.
pub struct CylindricalTransformer {
    offset: OriginOffset,
}

impl CylindricalTransformer {
    /// Create a transformer around the given origin offset
    pub fn new(offset: OriginOffset) -> Self {
        CylindricalTransformer { offset }
    }

    /// The origin offset this transformer maps radius = 0 to
    pub fn offset(&self) -> OriginOffset {
        self.offset
    }

    /// Convert a cylindrical point to Cartesian coordinates
    ///
    /// # Returns
    /// The Cartesian point, with the cylindrical height carried over
    /// unchanged as y
    pub fn to_cartesian(&self, point: &CylindricalPoint) -> CartesianPoint {
        let t = point.rotation_deg.to_radians();

        let x = self.offset.x0 + point.radius * t.sin();
        // Minus sign flips +Z to -Z at rotation 0
        let z = self.offset.z0 - point.radius * t.cos();

        CartesianPoint::new(x, point.height, z)
    }
}

impl Default for CylindricalTransformer {
    fn default() -> Self {
        CylindricalTransformer::new(OriginOffset::default())
    }
}
