//! Orientation variants of an item's bounding box.

use ferry_stow_core::Dimensions;
use std::collections::HashSet;

/// The six axis permutations, as (width_axis, height_axis, length_axis)
/// indices into the original `[width, height, length]`.
const PERMUTATIONS: [(usize, usize, usize); 6] = [
    (0, 1, 2), // Original
    (0, 2, 1), // Rotated 90° around X
    (1, 0, 2), // Rotated 90° around Z
    (1, 2, 0), // Rotated 90° around X then Z
    (2, 0, 1), // Rotated 90° around Y then X
    (2, 1, 0), // Rotated 90° around Y
];

/// Returns the distinct orientations of `dims`.
///
/// Orientations that produce the same dimension triple are reported once, so
/// a cube yields a single variant and a box with two equal sides yields three.
/// The order follows `PERMUTATIONS` and is stable for equal input.
pub fn rotations(dims: &Dimensions) -> Vec<Dimensions> {
    let source = dims.to_array();
    let mut seen: HashSet<[u64; 3]> = HashSet::with_capacity(PERMUTATIONS.len());
    let mut variants = Vec::with_capacity(PERMUTATIONS.len());

    for &(w, h, l) in &PERMUTATIONS {
        let triple = [source[w], source[h], source[l]];
        if !seen.insert(triple.map(f64::to_bits)) {
            continue;
        }
        variants.push(Dimensions::from(triple));
    }

    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_has_one_orientation() {
        let variants = rotations(&Dimensions::new(2.0, 2.0, 2.0));
        assert_eq!(variants, vec![Dimensions::new(2.0, 2.0, 2.0)]);
    }

    #[test]
    fn test_distinct_sides_have_six_orientations() {
        let variants = rotations(&Dimensions::new(1.0, 2.0, 3.0));
        assert_eq!(variants.len(), 6);
        for (i, a) in variants.iter().enumerate() {
            for b in variants.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_two_equal_sides_have_three_orientations() {
        let variants = rotations(&Dimensions::new(1.0, 1.0, 2.0));
        assert_eq!(
            variants,
            vec![
                Dimensions::new(1.0, 1.0, 2.0),
                Dimensions::new(1.0, 2.0, 1.0),
                Dimensions::new(2.0, 1.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_original_orientation_comes_first() {
        let dims = Dimensions::new(4.0, 1.5, 2.0);
        assert_eq!(rotations(&dims)[0], dims);
    }

    #[test]
    fn test_enumeration_is_stable() {
        let dims = Dimensions::new(3.0, 1.0, 2.0);
        assert_eq!(rotations(&dims), rotations(&dims));
    }
}
