//! Point structures for representing coordinates

/// A point in cylindrical coordinates, as entered by the user
#[derive(Debug, Clone, Copy)]
pub struct CylindricalPoint {
    /// Rotation angle in degrees (0 points along -Z)
    pub rotation_deg: f64,
    /// Height along the Y axis
    pub height: f64,
    /// Radius from the offset origin (negative reflects through it)
    pub radius: f64,
}

impl CylindricalPoint {
    /// Create a new cylindrical point
    pub fn new(rotation_deg: f64, height: f64, radius: f64) -> Self {
        CylindricalPoint { rotation_deg, height, radius }
    }
}

/// A point in Cartesian coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianPoint {
    /// X coordinate
    pub x: f64,
    /// Y coordinate (the cylindrical height, passed through)
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl CartesianPoint {
    /// Create a new Cartesian point
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        CartesianPoint { x, y, z }
    }
}
