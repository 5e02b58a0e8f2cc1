//! Aggregate load figures for a deck.

use crate::container::Container;
use crate::placement::total_weight;
use ferry_stow_core::PlacedItem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Weight and volume totals for the items on a deck.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadSummary {
    /// Number of items on the deck.
    pub placed_count: usize,
    /// Number of items left off the deck.
    pub unplaced_count: usize,
    /// Sum of placed item weights.
    pub total_weight: f64,
    /// Sum of placed item volumes.
    pub total_volume: f64,
    /// Volume of the usable part of the deck.
    pub usable_volume: f64,
    /// `total_volume / usable_volume` as a percentage (0 for an empty deck).
    pub utilization_percent: f64,
}

impl LoadSummary {
    /// Computes totals for `placed`, counting `unplaced_count` items as left
    /// behind.
    pub fn compute(container: &Container, placed: &[PlacedItem], unplaced_count: usize) -> Self {
        let total_volume: f64 = placed.iter().map(PlacedItem::volume).sum();
        let usable_volume = container.usable_volume();
        let utilization_percent = if usable_volume > 0.0 {
            total_volume / usable_volume * 100.0
        } else {
            0.0
        };

        Self {
            placed_count: placed.len(),
            unplaced_count,
            total_weight: total_weight(placed),
            total_volume,
            usable_volume,
            utilization_percent,
        }
    }

    /// Returns the weight still available on the deck.
    pub fn remaining_weight(&self, container: &Container) -> f64 {
        (container.max_weight - self.total_weight).max(0.0)
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_display(&self) -> String {
        format!("{:.1}%", self.utilization_percent)
    }
}
