//! Error types for ferry-stow.

use crate::item::ItemId;
use thiserror::Error;

/// Result type alias for ferry-stow operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating engine inputs.
///
/// The packing engine itself never returns these; callers use them to reject
/// malformed containers or items before invoking it.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid container provided.
    #[error("Invalid container: {0}")]
    InvalidContainer(String),

    /// Invalid cargo item provided.
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Why a single item cannot be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FitmentError {
    /// The aggregate weight would exceed the container's capacity.
    #[error("item exceeds the ferry's max weight")]
    Overweight,

    /// No orientation and anchor combination yields an in-bounds,
    /// non-colliding placement.
    #[error("no available space for item")]
    NoSpace,
}

/// Why a caller-chosen position for an item was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PlacementError {
    /// The aggregate weight would exceed the container's capacity.
    #[error("item exceeds the ferry's max weight")]
    Overweight,

    /// The item would extend outside the usable deck (wall clearance included).
    #[error("item at ({x}, {y}, {z}) does not fit inside the usable deck")]
    OutOfBounds { x: f64, y: f64, z: f64 },

    /// The item would overlap an already placed item.
    #[error("item overlaps placed item {with}")]
    Collision { with: ItemId },
}

impl From<PlacementError> for FitmentError {
    fn from(err: PlacementError) -> Self {
        match err {
            PlacementError::Overweight => FitmentError::Overweight,
            PlacementError::OutOfBounds { .. } | PlacementError::Collision { .. } => {
                FitmentError::NoSpace
            }
        }
    }
}
