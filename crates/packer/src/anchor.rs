//! Anchor points: candidate minimum corners for the next item.
//!
//! Every placed item contributes three anchors, one just past each of its far
//! faces (x, y and z), offset by the clearance margin. Together with the
//! starting corner they are sorted by (z, y, x), so the search fills the deck
//! front to back, bottom to top, left to right.

use ferry_stow_core::{PlacedItem, Point};

/// Returns the candidate insertion points for the current occupancy, sorted
/// ascending by (z, y, x).
///
/// The first entry for an empty deck is `(margin, margin, margin)`.
pub fn anchor_points(placed: &[PlacedItem], margin: f64) -> Vec<Point> {
    let mut anchors = Vec::with_capacity(3 * placed.len() + 1);
    anchors.push(Point::new(margin, margin, margin));

    for item in placed {
        let p = item.position;
        let d = item.dimensions;
        anchors.push(Point::new(p.x + d.width + margin, p.y, p.z));
        anchors.push(Point::new(p.x, p.y + d.height + margin, p.z));
        anchors.push(Point::new(p.x, p.y, p.z + d.length + margin));
    }

    anchors.sort_by(|a, b| a.fill_order(b));
    anchors
}
