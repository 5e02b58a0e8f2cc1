//! Axis-aligned bounding boxes in deck coordinates.

use crate::geometry::{Dimensions, Position3D};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned box described by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AABB3D {
    /// Minimum corner.
    pub min: Vector3<f64>,
    /// Maximum corner.
    pub max: Vector3<f64>,
}

impl AABB3D {
    /// Creates a new AABB from min/max corners.
    pub fn new(min: Vector3<f64>, max: Vector3<f64>) -> Self {
        Self { min, max }
    }

    /// Creates the box occupied by an item of `dims` whose minimum corner
    /// sits at `position`.
    pub fn from_placement(position: &Position3D, dims: &Dimensions) -> Self {
        let min = position.to_vector();
        Self {
            min,
            max: min + dims.to_vector(),
        }
    }

    /// Returns the extents of the box.
    pub fn extents(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Returns the volume of the box.
    pub fn volume(&self) -> f64 {
        let e = self.extents();
        e.x * e.y * e.z
    }

    /// Strict overlap test.
    ///
    /// Intervals are open: boxes that only share a face, edge or corner do
    /// not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        (0..3).all(|i| self.min[i] < other.max[i] && self.max[i] > other.min[i])
    }

    /// Returns the box grown by `amount` on every face.
    pub fn inflate(&self, amount: f64) -> Self {
        let pad = Vector3::repeat(amount);
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }

    /// Returns true if `other` lies entirely inside this box (closed bounds).
    pub fn contains(&self, other: &Self) -> bool {
        (0..3).all(|i| other.min[i] >= self.min[i] && other.max[i] <= self.max[i])
    }
}
