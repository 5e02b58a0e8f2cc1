//! Load manifest parsing.
//!
//! A manifest is the JSON snapshot of a deck: the container and every cargo
//! item, each either unplaced or carrying a position.

use ferry_stow::placement::check_position;
use ferry_stow::Container;
use ferry_stow_core::{
    partition_items, CargoItem, Dimensions, ItemId, ItemState, PlacedItem, PlacementError,
    Position3D, UnplacedItem,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when reading or writing manifests.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid manifest: {0}")]
    InvalidFormat(String),

    #[error(transparent)]
    Invalid(#[from] ferry_stow_core::Error),

    #[error("Placed item {id} is invalid: {source}")]
    InvalidPlacement {
        id: ItemId,
        #[source]
        source: PlacementError,
    },
}

/// A deck snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    pub container: Container,
    pub items: Vec<CargoItem>,
}

impl Manifest {
    /// Parses a manifest from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path)?;
        Self::parse_json(&content)
    }

    /// Parses a manifest from a JSON string.
    ///
    /// A missing container falls back to the reference ferry. The container
    /// and every item are validated, and placed items must lie inside the
    /// usable deck without overlapping each other.
    pub fn parse_json(json: &str) -> Result<Self, ManifestError> {
        let raw: RawManifest = serde_json::from_str(json)?;
        let container = raw.container.unwrap_or_default();
        container.validate()?;

        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(raw.items.len());
        for raw_item in raw.items {
            if !seen.insert(raw_item.id) {
                return Err(ManifestError::InvalidFormat(format!(
                    "duplicate item id {}",
                    raw_item.id
                )));
            }
            let item = CargoItem::from(raw_item);
            UnplacedItem::new(item.id, item.kind.clone(), item.dimensions, item.weight)
                .validate()?;
            items.push(item);
        }

        let manifest = Self { container, items };
        manifest.check_placed()?;
        Ok(manifest)
    }

    /// Rejects placed items outside the usable deck or overlapping one
    /// another. No clearance is required here.
    fn check_placed(&self) -> Result<(), ManifestError> {
        let (placed, _) = self.split();
        for (i, item) in placed.iter().enumerate() {
            check_position(
                &self.container,
                &item.position,
                &item.dimensions,
                &placed[..i],
                0.0,
            )
            .map_err(|source| ManifestError::InvalidPlacement {
                id: item.id,
                source,
            })?;
        }
        Ok(())
    }

    /// Serializes the manifest back to pretty JSON.
    pub fn to_json(&self) -> Result<String, ManifestError> {
        let raw = RawManifest {
            container: Some(self.container.clone()),
            items: self.items.iter().cloned().map(RawItem::from).collect(),
        };
        Ok(serde_json::to_string_pretty(&raw)?)
    }

    /// Writes the manifest to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ManifestError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Splits items into `(already_placed, to_place)`.
    pub fn split(&self) -> (Vec<PlacedItem>, Vec<UnplacedItem>) {
        partition_items(self.items.iter().cloned())
    }

    /// Looks up an item by id.
    pub fn item(&self, id: ItemId) -> Option<&CargoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns the id a new item should get: one past the largest in use.
    pub fn next_id(&self) -> ItemId {
        self.items.iter().map(|item| item.id).max().unwrap_or(0) + 1
    }

    /// Appends an unplaced item.
    pub fn add_item(&mut self, item: UnplacedItem) -> Result<(), ManifestError> {
        if self.item(item.id).is_some() {
            return Err(ManifestError::InvalidFormat(format!(
                "duplicate item id {}",
                item.id
            )));
        }
        item.validate()?;
        self.items.push(item.into());
        Ok(())
    }

    /// Removes an item, returning it if it was present.
    pub fn remove_item(&mut self, id: ItemId) -> Option<CargoItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Records positions (and rotated dimensions) of newly placed items.
    ///
    /// Each item is updated on its own; an id missing from the manifest is
    /// skipped and returned, the rest are still applied.
    pub fn apply_placements(&mut self, placed: &[PlacedItem]) -> Vec<ItemId> {
        let mut missing = Vec::new();
        for p in placed {
            match self.items.iter_mut().find(|item| item.id == p.id) {
                Some(item) => {
                    item.dimensions = p.dimensions;
                    item.state = ItemState::Placed(p.position);
                }
                None => {
                    log::warn!("cannot record position for unknown item {}", p.id);
                    missing.push(p.id);
                }
            }
        }
        missing
    }
}

/// Manifest as stored in JSON.
#[derive(Debug, Serialize, Deserialize)]
struct RawManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    container: Option<Container>,
    items: Vec<RawItem>,
}

/// Item as stored in JSON; `position` is absent for unplaced items.
#[derive(Debug, Serialize, Deserialize)]
struct RawItem {
    id: ItemId,
    #[serde(rename = "type", default)]
    kind: String,
    width: f64,
    height: f64,
    length: f64,
    weight: f64,
    #[serde(default)]
    color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<Position3D>,
}

impl From<RawItem> for CargoItem {
    fn from(raw: RawItem) -> Self {
        Self {
            id: raw.id,
            kind: raw.kind,
            dimensions: Dimensions::new(raw.width, raw.height, raw.length),
            weight: raw.weight,
            color: raw.color,
            state: raw.position.map_or(ItemState::Unplaced, ItemState::Placed),
        }
    }
}

impl From<CargoItem> for RawItem {
    fn from(item: CargoItem) -> Self {
        Self {
            id: item.id,
            kind: item.kind,
            width: item.dimensions.width,
            height: item.dimensions.height,
            length: item.dimensions.length,
            weight: item.weight,
            color: item.color,
            position: item.state.position(),
        }
    }
}
