//! Cargo item records, placed and unplaced.

use crate::aabb::AABB3D;
use crate::error::{Error, Result};
use crate::geometry::{Dimensions, Position3D};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identity of a cargo item, as assigned by the storage layer.
pub type ItemId = i64;

/// Whether an item has been given a position on the deck.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "state", content = "position", rename_all = "snake_case")
)]
pub enum ItemState {
    /// Waiting to be loaded.
    #[default]
    Unplaced,
    /// Loaded with its minimum corner at the given position.
    Placed(Position3D),
}

impl ItemState {
    /// Returns the position if placed.
    pub fn position(&self) -> Option<Position3D> {
        match self {
            ItemState::Unplaced => None,
            ItemState::Placed(pos) => Some(*pos),
        }
    }

    /// Returns true if placed.
    pub fn is_placed(&self) -> bool {
        matches!(self, ItemState::Placed(_))
    }
}

/// A stored item sorted by placement state.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitItem {
    Placed(PlacedItem),
    Unplaced(UnplacedItem),
}

/// A cargo item as held by the storage layer, placed or not.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CargoItem {
    pub id: ItemId,
    /// Free-form type tag ("car", "truck", ...).
    pub kind: String,
    /// Dimensions; post-rotation once placed.
    pub dimensions: Dimensions,
    pub weight: f64,
    pub color: String,
    pub state: ItemState,
}

impl CargoItem {
    /// Splits the record by placement state.
    pub fn into_split(self) -> SplitItem {
        match self.state {
            ItemState::Placed(position) => SplitItem::Placed(PlacedItem {
                id: self.id,
                kind: self.kind,
                dimensions: self.dimensions,
                weight: self.weight,
                color: self.color,
                position,
            }),
            ItemState::Unplaced => SplitItem::Unplaced(UnplacedItem {
                id: self.id,
                kind: self.kind,
                dimensions: self.dimensions,
                weight: self.weight,
                color: self.color,
            }),
        }
    }
}

impl From<PlacedItem> for CargoItem {
    fn from(item: PlacedItem) -> Self {
        Self {
            id: item.id,
            kind: item.kind,
            dimensions: item.dimensions,
            weight: item.weight,
            color: item.color,
            state: ItemState::Placed(item.position),
        }
    }
}

impl From<UnplacedItem> for CargoItem {
    fn from(item: UnplacedItem) -> Self {
        Self {
            id: item.id,
            kind: item.kind,
            dimensions: item.dimensions,
            weight: item.weight,
            color: item.color,
            state: ItemState::Unplaced,
        }
    }
}

/// Splits stored items into `(already_placed, to_place)`, preserving order.
pub fn partition_items(
    items: impl IntoIterator<Item = CargoItem>,
) -> (Vec<PlacedItem>, Vec<UnplacedItem>) {
    let mut placed = Vec::new();
    let mut unplaced = Vec::new();
    for item in items {
        match item.into_split() {
            SplitItem::Placed(p) => placed.push(p),
            SplitItem::Unplaced(u) => unplaced.push(u),
        }
    }
    (placed, unplaced)
}

/// An item waiting for a position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnplacedItem {
    pub id: ItemId,
    pub kind: String,
    pub dimensions: Dimensions,
    pub weight: f64,
    pub color: String,
}

impl UnplacedItem {
    /// Creates a new unplaced item with no color.
    pub fn new(id: ItemId, kind: impl Into<String>, dimensions: Dimensions, weight: f64) -> Self {
        Self {
            id,
            kind: kind.into(),
            dimensions,
            weight,
            color: String::new(),
        }
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Places the item with the given (possibly rotated) dimensions.
    pub fn place(&self, dimensions: Dimensions, position: Position3D) -> PlacedItem {
        PlacedItem {
            id: self.id,
            kind: self.kind.clone(),
            dimensions,
            weight: self.weight,
            color: self.color.clone(),
            position,
        }
    }

    /// Rejects non-positive dimensions and negative weight.
    pub fn validate(&self) -> Result<()> {
        if !self.dimensions.is_positive() {
            return Err(Error::InvalidItem(format!(
                "All dimensions for item {} must be positive",
                self.id
            )));
        }

        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(Error::InvalidItem(format!(
                "Weight for item {} cannot be negative",
                self.id
            )));
        }

        Ok(())
    }
}

/// An item with a position on the deck.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedItem {
    pub id: ItemId,
    pub kind: String,
    /// Dimensions after rotation.
    pub dimensions: Dimensions,
    pub weight: f64,
    pub color: String,
    /// Minimum corner.
    pub position: Position3D,
}

impl PlacedItem {
    /// Returns the box occupied by this item.
    pub fn aabb(&self) -> AABB3D {
        AABB3D::from_placement(&self.position, &self.dimensions)
    }

    /// Returns the occupied volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.volume()
    }
}
