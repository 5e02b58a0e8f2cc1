//! # Ferry Stow
//!
//! Greedy 3D cargo placement for a ferry deck.
//!
//! This crate decides where, or whether, each cargo item fits on the deck,
//! subject to wall clearance, non-overlap and the deck's weight capacity.
//!
//! The engine is stateless: every call receives the full set of already
//! placed items and returns new collections, so concurrent callers only need
//! to hand it independent snapshots.
//!
//! ```
//! use ferry_stow::{pack_items, Container};
//! use ferry_stow_core::{Dimensions, Position3D, UnplacedItem};
//!
//! let ferry = Container::default();
//! let car = UnplacedItem::new(1, "car", Dimensions::new(2.0, 2.0, 2.0), 10.0);
//!
//! let outcome = pack_items(&ferry, &[car], &[]);
//! assert_eq!(outcome.newly_placed[0].position, Position3D::new(0.25, 0.25, 0.25));
//! ```

pub mod anchor;
pub mod collision;
pub mod container;
pub mod fitment;
pub mod packer;
pub mod placement;
pub mod rotation;
pub mod summary;

// Re-exports
pub use container::Container;
pub use ferry_stow_core::{
    Config, Error, FitmentError, PackOutcome, PlacedItem, PlacementError, Result, Solver,
    UnplacedItem,
};
pub use packer::Packer;
pub use summary::LoadSummary;

/// Packs `items` onto `container` with the default clearance margin.
pub fn pack_items(
    container: &Container,
    items: &[UnplacedItem],
    already_placed: &[PlacedItem],
) -> PackOutcome {
    Packer::default_config().pack_items(container, items, already_placed)
}

/// Checks whether `candidate` fits on `container` with the default clearance
/// margin.
pub fn check_fitment(
    container: &Container,
    candidate: &UnplacedItem,
    already_placed: &[PlacedItem],
) -> std::result::Result<(), FitmentError> {
    Packer::default_config().check_fitment(container, candidate, already_placed)
}
