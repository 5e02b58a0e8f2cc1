//! Bounding-box collision detection against placed items.

use ferry_stow_core::{Dimensions, PlacedItem, Position3D, AABB3D};

/// Returns the first placed item whose box strictly overlaps a box of `dims`
/// at `position`.
///
/// Touching boxes do not collide.
pub fn first_collision<'a>(
    position: &Position3D,
    dims: &Dimensions,
    placed: &'a [PlacedItem],
) -> Option<&'a PlacedItem> {
    let candidate = AABB3D::from_placement(position, dims);
    placed.iter().find(|item| candidate.overlaps(&item.aabb()))
}

/// Slack allowed on clearance comparisons so that a gap of exactly the
/// required clearance is accepted despite rounding.
pub const CLEARANCE_TOLERANCE: f64 = 1e-9;

/// Returns the first placed item closer than `clearance` to a box of `dims`
/// at `position`, on any face.
pub fn first_within_clearance<'a>(
    position: &Position3D,
    dims: &Dimensions,
    placed: &'a [PlacedItem],
    clearance: f64,
) -> Option<&'a PlacedItem> {
    let padded = AABB3D::from_placement(position, dims)
        .inflate((clearance - CLEARANCE_TOLERANCE).max(0.0));
    placed.iter().find(|item| padded.overlaps(&item.aabb()))
}

/// Returns true if a box of `dims` at `position` overlaps any placed item.
pub fn collides(position: &Position3D, dims: &Dimensions, placed: &[PlacedItem]) -> bool {
    first_collision(position, dims, placed).is_some()
}
