//! Placement checks for the packer, the fitment check and manual placement.
//!
//! A generated position is acceptable when the item stays inside the usable
//! deck with the configured clearance from the far walls and does not
//! overlap any placed item; anchors already carry the clearance from the
//! near walls and from the item they were derived from. A manual position
//! has no anchor behind it, so it must keep the clearance from every wall
//! and every placed item, and must respect the weight limit.

use crate::collision::{first_collision, first_within_clearance, CLEARANCE_TOLERANCE};
use crate::container::Container;
use ferry_stow_core::{Dimensions, PlacedItem, PlacementError, Position3D, UnplacedItem};

/// Checks bounds and collisions for a box of `dims` at `position`.
pub fn check_position(
    container: &Container,
    position: &Position3D,
    dims: &Dimensions,
    occupied: &[PlacedItem],
    margin: f64,
) -> Result<(), PlacementError> {
    if !container.admits(position, dims, margin) {
        return Err(PlacementError::OutOfBounds {
            x: position.x,
            y: position.y,
            z: position.z,
        });
    }

    if let Some(hit) = first_collision(position, dims, occupied) {
        return Err(PlacementError::Collision { with: hit.id });
    }

    Ok(())
}

/// Checks a caller-chosen position: `margin` is required from all six walls
/// and from every placed item.
pub fn check_clearance(
    container: &Container,
    position: &Position3D,
    dims: &Dimensions,
    occupied: &[PlacedItem],
    margin: f64,
) -> Result<(), PlacementError> {
    let near = margin - CLEARANCE_TOLERANCE;
    let off_near_walls = position.x < near || position.y < near || position.z < near;
    if off_near_walls || !container.admits(position, dims, margin) {
        return Err(PlacementError::OutOfBounds {
            x: position.x,
            y: position.y,
            z: position.z,
        });
    }

    if let Some(hit) = first_within_clearance(position, dims, occupied, margin) {
        return Err(PlacementError::Collision { with: hit.id });
    }

    Ok(())
}

/// Returns the total weight of `placed`.
pub fn total_weight(placed: &[PlacedItem]) -> f64 {
    placed.iter().map(|item| item.weight).sum()
}

/// Validates a caller-chosen position for `item`, using its dimensions as
/// given.
///
/// On success returns the placed item; nothing is stored.
pub fn validate_placement(
    container: &Container,
    item: &UnplacedItem,
    position: Position3D,
    already_placed: &[PlacedItem],
    margin: f64,
) -> Result<PlacedItem, PlacementError> {
    if total_weight(already_placed) + item.weight > container.max_weight {
        return Err(PlacementError::Overweight);
    }

    check_clearance(container, &position, &item.dimensions, already_placed, margin)?;

    log::debug!(
        "manual placement of item {} at ({}, {}, {}) accepted",
        item.id,
        position.x,
        position.y,
        position.z
    );
    Ok(item.place(item.dimensions, position))
}
