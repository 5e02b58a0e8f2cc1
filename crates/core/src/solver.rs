//! Solver traits and configuration.

use crate::error::{Error, FitmentError, Result};
use crate::item::{PlacedItem, UnplacedItem};
use crate::result::PackOutcome;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Clearance kept between adjacent items and between items and walls.
pub const DEFAULT_MARGIN: f64 = 0.25;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Clearance applied when generating anchors and checking wall bounds.
    pub margin: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the clearance margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Rejects negative or non-finite margins.
    pub fn validate(&self) -> Result<()> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(Error::ConfigError(format!(
                "margin must be a non-negative number, got {}",
                self.margin
            )));
        }
        Ok(())
    }
}

/// Trait for cargo placement engines.
///
/// Implementations are stateless between calls: every call receives the
/// full snapshot of already placed items and returns fresh collections.
pub trait Solver {
    /// The container type this solver loads.
    type Container;

    /// Places as many of `items` as fit, in input order.
    fn pack_items(
        &self,
        container: &Self::Container,
        items: &[UnplacedItem],
        already_placed: &[PlacedItem],
    ) -> PackOutcome;

    /// Checks whether `candidate` could be placed at all.
    fn check_fitment(
        &self,
        container: &Self::Container,
        candidate: &UnplacedItem,
        already_placed: &[PlacedItem],
    ) -> std::result::Result<(), FitmentError>;
}
