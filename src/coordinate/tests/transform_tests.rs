//! Tests for the cylindrical transformer

extern crate std;

use crate::coordinate::constants::offsets;
use crate::coordinate::{CylindricalPoint, CylindricalTransformer, OriginOffset};

const TOLERANCE: f64 = 1e-9;

#[test]
fn test_height_passes_through_unchanged() {
    let transformer = CylindricalTransformer::default();

    for &height in &[0.0, -12.5, 1e6, 0.000001] {
        let point = CylindricalPoint::new(37.0, height, 42.0);
        let result = transformer.to_cartesian(&point);
        std::assert_eq!(result.y, height);
    }
}

#[test]
fn test_zero_radius_collapses_to_offset() {
    let transformer = CylindricalTransformer::default();

    // Any angle maps radius 0 to (x0, z0)
    for &angle in &[0.0, 45.0, 90.0, 180.0, 270.0, -730.0] {
        let point = CylindricalPoint::new(angle, 7.0, 0.0);
        let result = transformer.to_cartesian(&point);
        std::assert!((result.x - offsets::X0).abs() < TOLERANCE);
        std::assert!((result.z - offsets::Z0).abs() < TOLERANCE);
        std::assert_eq!(result.y, 7.0);
    }
}

#[test]
fn test_zero_rotation_points_along_negative_z() {
    let transformer = CylindricalTransformer::default();

    let point = CylindricalPoint::new(0.0, 5.0, 10.0);
    let result = transformer.to_cartesian(&point);

    std::assert_eq!(result.x, 278.0);
    std::assert_eq!(result.y, 5.0);
    std::assert_eq!(result.z, 290.0);
}

#[test]
fn test_ninety_degrees_points_along_positive_x() {
    let transformer = CylindricalTransformer::default();

    let point = CylindricalPoint::new(90.0, 5.0, 10.0);
    let result = transformer.to_cartesian(&point);

    std::assert!((result.x - 288.0).abs() < TOLERANCE);
    std::assert_eq!(result.y, 5.0);
    std::assert!((result.z - 300.0).abs() < TOLERANCE);
}

#[test]
fn test_full_turn_periodicity() {
    let transformer = CylindricalTransformer::default();

    for &angle in &[0.0, 13.7, 91.0, 200.0, -45.0] {
        let base = transformer.to_cartesian(&CylindricalPoint::new(angle, 2.0, 8.5));
        let wrapped = transformer.to_cartesian(&CylindricalPoint::new(angle + 360.0, 2.0, 8.5));

        std::assert!((base.x - wrapped.x).abs() < 1e-6);
        std::assert!((base.z - wrapped.z).abs() < 1e-6);
        std::assert_eq!(base.y, wrapped.y);
    }
}

#[test]
fn test_negative_radius_reflects_through_origin() {
    let transformer = CylindricalTransformer::default();

    // -r at angle theta lands where +r lands at theta + 180
    let reflected = transformer.to_cartesian(&CylindricalPoint::new(30.0, 0.0, -4.0));
    let rotated = transformer.to_cartesian(&CylindricalPoint::new(210.0, 0.0, 4.0));

    std::assert!((reflected.x - rotated.x).abs() < TOLERANCE);
    std::assert!((reflected.z - rotated.z).abs() < TOLERANCE);
}

#[test]
fn test_custom_offset() {
    let transformer = CylindricalTransformer::new(OriginOffset::new(0.0, 0.0));

    let result = transformer.to_cartesian(&CylindricalPoint::new(0.0, 1.0, 3.0));
    std::assert_eq!(result.x, 0.0);
    std::assert_eq!(result.z, -3.0);
}
