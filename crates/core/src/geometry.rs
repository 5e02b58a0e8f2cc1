//! Dimension and position types shared by the packer and its callers.
//!
//! Axis convention: width runs along x, height along y and length along z.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bounding-box extents of a cargo item.
///
/// The values are orientation-dependent: a rotated item carries the permuted
/// triple, not the one it was registered with.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    /// Extent along x.
    pub width: f64,
    /// Extent along y.
    pub height: f64,
    /// Extent along z.
    pub length: f64,
}

impl Dimensions {
    /// Creates dimensions from width, height and length.
    pub fn new(width: f64, height: f64, length: f64) -> Self {
        Self {
            width,
            height,
            length,
        }
    }

    /// Returns the extent along the given axis (0 = x, 1 = y, 2 = z).
    pub fn axis(&self, index: usize) -> f64 {
        match index {
            0 => self.width,
            1 => self.height,
            _ => self.length,
        }
    }

    /// Returns the dimensions as an `[width, height, length]` array.
    pub fn to_array(&self) -> [f64; 3] {
        [self.width, self.height, self.length]
    }

    /// Returns the dimensions as a vector.
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.width, self.height, self.length)
    }

    /// Returns the enclosed volume.
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.length
    }

    /// Returns true if every extent is strictly positive and finite.
    pub fn is_positive(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite() && *v > 0.0)
    }
}

impl From<[f64; 3]> for Dimensions {
    fn from(dims: [f64; 3]) -> Self {
        Self::new(dims[0], dims[1], dims[2])
    }
}

/// A point in deck coordinates.
///
/// Used both as the minimum corner of a placed item and as a candidate
/// insertion site while searching.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Candidate insertion sites are plain positions.
pub type Point = Position3D;

impl Position3D {
    /// Creates a new position.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the position as a vector.
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Compares two positions by (z, y, x), the order in which the deck is
    /// filled.
    pub fn fill_order(&self, other: &Self) -> std::cmp::Ordering {
        self.z
            .total_cmp(&other.z)
            .then(self.y.total_cmp(&other.y))
            .then(self.x.total_cmp(&other.x))
    }
}

impl From<Vector3<f64>> for Position3D {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::cmp::Ordering;

    #[test]
    fn test_volume() {
        let dims = Dimensions::new(2.0, 3.0, 4.0);
        assert_relative_eq!(dims.volume(), 24.0);
    }

    #[test]
    fn test_axis_access() {
        let dims = Dimensions::new(1.0, 2.0, 3.0);
        assert_eq!(dims.axis(0), 1.0);
        assert_eq!(dims.axis(1), 2.0);
        assert_eq!(dims.axis(2), 3.0);
        assert_eq!(dims.to_vector(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_is_positive() {
        assert!(Dimensions::new(1.0, 1.0, 1.0).is_positive());
        assert!(!Dimensions::new(0.0, 1.0, 1.0).is_positive());
        assert!(!Dimensions::new(1.0, -1.0, 1.0).is_positive());
        assert!(!Dimensions::new(1.0, 1.0, f64::NAN).is_positive());
    }

    #[test]
    fn test_fill_order_is_z_then_y_then_x() {
        let a = Position3D::new(9.0, 9.0, 1.0);
        let b = Position3D::new(0.0, 0.0, 2.0);
        assert_eq!(a.fill_order(&b), Ordering::Less);

        let c = Position3D::new(9.0, 1.0, 2.0);
        assert_eq!(c.fill_order(&b), Ordering::Greater);

        let d = Position3D::new(1.0, 0.0, 2.0);
        assert_eq!(b.fill_order(&d), Ordering::Less);
        assert_eq!(b.fill_order(&b), Ordering::Equal);
    }
}
