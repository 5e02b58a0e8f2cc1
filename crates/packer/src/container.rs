//! The ferry deck being loaded.

use ferry_stow_core::{Dimensions, Error, Position3D, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A ferry deck (container) for cargo placement.
///
/// Only the length axis is fractionally usable; width and height are used at
/// full value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container {
    /// Extent along x.
    pub width: f64,
    /// Extent along y.
    pub height: f64,
    /// Extent along z.
    pub length: f64,
    /// Maximum total cargo weight.
    pub max_weight: f64,
    /// Fraction of the length available for cargo, in (0, 1].
    pub usable_fraction: f64,
}

impl Default for Container {
    /// The reference ferry: 20 x 5 x 30, 200 weight units, 90% usable length.
    fn default() -> Self {
        Self {
            width: 20.0,
            height: 5.0,
            length: 30.0,
            max_weight: 200.0,
            usable_fraction: 0.90,
        }
    }
}

impl Container {
    /// Creates a fully usable container with the given dimensions and
    /// weight capacity.
    pub fn new(width: f64, height: f64, length: f64, max_weight: f64) -> Self {
        Self {
            width,
            height,
            length,
            max_weight,
            usable_fraction: 1.0,
        }
    }

    /// Sets the usable fraction of the length axis.
    pub fn with_usable_fraction(mut self, fraction: f64) -> Self {
        self.usable_fraction = fraction;
        self
    }

    /// Returns the length available for cargo.
    pub fn usable_length(&self) -> f64 {
        self.length * self.usable_fraction
    }

    /// Returns the volume available for cargo.
    pub fn usable_volume(&self) -> f64 {
        self.width * self.height * self.usable_length()
    }

    /// Returns true if a box of `dims` at `position` stays inside the usable
    /// deck with `margin` clearance from the far walls.
    ///
    /// The near walls are checked at zero; clearance from them comes from
    /// where anchors are generated.
    pub fn admits(&self, position: &Position3D, dims: &Dimensions, margin: f64) -> bool {
        position.x >= 0.0
            && position.y >= 0.0
            && position.z >= 0.0
            && position.x + dims.width + margin <= self.width
            && position.y + dims.height + margin <= self.height
            && position.z + dims.length + margin <= self.usable_length()
    }

    /// Rejects non-positive extents, negative capacity and a usable fraction
    /// outside (0, 1].
    pub fn validate(&self) -> Result<()> {
        if !Dimensions::new(self.width, self.height, self.length).is_positive() {
            return Err(Error::InvalidContainer(
                "All dimensions must be positive".into(),
            ));
        }

        if !self.max_weight.is_finite() || self.max_weight < 0.0 {
            return Err(Error::InvalidContainer(
                "Maximum weight cannot be negative".into(),
            ));
        }

        if !(self.usable_fraction > 0.0 && self.usable_fraction <= 1.0) {
            return Err(Error::InvalidContainer(format!(
                "Usable fraction must be in (0, 1], got {}",
                self.usable_fraction
            )));
        }

        Ok(())
    }
}
