//! Pack outcome representation.

use crate::item::{ItemId, PlacedItem, UnplacedItem};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a packing call.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackOutcome {
    /// Items given a position by this call, in input order.
    pub newly_placed: Vec<PlacedItem>,

    /// Items that could not be placed (weight or space), in input order.
    pub failed_to_place: Vec<UnplacedItem>,
}

impl PackOutcome {
    /// Creates a new empty outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if every requested item was placed.
    pub fn all_placed(&self) -> bool {
        self.failed_to_place.is_empty()
    }

    /// Returns the number of placed items.
    pub fn placed_count(&self) -> usize {
        self.newly_placed.len()
    }

    /// Returns the number of items left unplaced.
    pub fn failed_count(&self) -> usize {
        self.failed_to_place.len()
    }

    /// Returns the ids of items left unplaced.
    pub fn failed_ids(&self) -> Vec<ItemId> {
        self.failed_to_place.iter().map(|item| item.id).collect()
    }

    /// Splits into `(newly_placed, failed_to_place)`.
    pub fn into_parts(self) -> (Vec<PlacedItem>, Vec<UnplacedItem>) {
        (self.newly_placed, self.failed_to_place)
    }
}
