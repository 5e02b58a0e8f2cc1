//! # Ferry Stow Core
//!
//! Shared types for the ferry-stow cargo packing engine.
//!
//! This crate provides the value types passed across the engine boundary and
//! the error and configuration types used by the packer and its callers.
//!
//! ## Core Components
//!
//! - **Geometry**: `Dimensions`, `Position3D`, `AABB3D`
//! - **Items**: `UnplacedItem`, `PlacedItem`, and the storage-shaped
//!   `CargoItem` with its `ItemState`
//! - **Solver trait**: Common interface for placement engines
//! - **Errors**: input validation errors, `FitmentError`, `PlacementError`
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod aabb;
pub mod error;
pub mod geometry;
pub mod item;
pub mod result;
pub mod solver;

// Re-exports
pub use aabb::AABB3D;
pub use error::{Error, FitmentError, PlacementError, Result};
pub use geometry::{Dimensions, Point, Position3D};
pub use item::{
    partition_items, CargoItem, ItemId, ItemState, PlacedItem, SplitItem, UnplacedItem,
};
pub use result::PackOutcome;
pub use solver::{Config, Solver, DEFAULT_MARGIN};
