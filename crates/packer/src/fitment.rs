//! Single-item fitment check.

use crate::anchor::anchor_points;
use crate::container::Container;
use crate::placement::{check_position, total_weight};
use crate::rotation::rotations;
use ferry_stow_core::{FitmentError, PlacedItem, UnplacedItem};

/// Checks whether `candidate` could be placed at all, without choosing a
/// position.
///
/// Weight is checked before space, so a caller can tell the two apart. The
/// search stops at the first acceptable (rotation, anchor) pair.
pub fn check_fitment(
    container: &Container,
    candidate: &UnplacedItem,
    already_placed: &[PlacedItem],
    margin: f64,
) -> Result<(), FitmentError> {
    if total_weight(already_placed) + candidate.weight > container.max_weight {
        return Err(FitmentError::Overweight);
    }

    let anchors = anchor_points(already_placed, margin);
    let fits = rotations(&candidate.dimensions).iter().any(|rotation| {
        anchors
            .iter()
            .any(|anchor| {
                check_position(container, anchor, rotation, already_placed, margin).is_ok()
            })
    });

    if fits {
        Ok(())
    } else {
        Err(FitmentError::NoSpace)
    }
}
