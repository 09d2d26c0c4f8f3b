//! Tests for the point and offset types

extern crate std;

use crate::coordinate::constants::offsets;
use crate::coordinate::{CartesianPoint, CylindricalPoint, OriginOffset};

#[test]
fn test_cylindrical_point_creation() {
    let point = CylindricalPoint::new(45.0, 12.0, -3.5);
    std::assert_eq!(point.rotation_deg, 45.0);
    std::assert_eq!(point.height, 12.0);
    std::assert_eq!(point.radius, -3.5);
}

#[test]
fn test_cartesian_point_creation() {
    let point = CartesianPoint::new(1.0, 2.0, 3.0);
    std::assert_eq!(point, CartesianPoint { x: 1.0, y: 2.0, z: 3.0 });
}

#[test]
fn test_default_offset_matches_constants() {
    let offset = OriginOffset::default();
    std::assert_eq!(offset.x0, offsets::X0);
    std::assert_eq!(offset.z0, offsets::Z0);
    std::assert_eq!(offset, OriginOffset::new(278.0, 300.0));
}
