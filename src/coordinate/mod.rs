//! Coordinate handling for cylindrical input data
//!
//! This module provides structures and functionality for representing
//! cylindrical and Cartesian points and converting between them.

pub mod errors;
mod point;
mod offset;
mod transform;
pub(crate) mod constants;
mod tests;

// Re-export key types
pub use self::point::{CartesianPoint, CylindricalPoint};
pub use self::offset::OriginOffset;
pub use self::transform::CylindricalTransformer;
pub use errors::{ConvertError, ConvertResult};
