//! Integration tests for manifest-driven packing.

use approx::assert_relative_eq;
use ferry_stow::{FitmentError, Packer, PlacementError};
use ferry_stow_cli::{LoadReport, Manifest};
use ferry_stow_core::{Dimensions, ItemState, Position3D, SplitItem, UnplacedItem};
use std::path::PathBuf;

const HALF_LOADED: &str = r#"{
    "container": {
        "width": 20.0,
        "height": 5.0,
        "length": 30.0,
        "max_weight": 200.0,
        "usable_fraction": 0.9
    },
    "items": [
        {
            "id": 1,
            "type": "truck",
            "width": 2.5,
            "height": 3.0,
            "length": 8.0,
            "weight": 90.0,
            "position": { "x": 0.25, "y": 0.25, "z": 0.25 }
        },
        { "id": 2, "type": "car", "width": 2.0, "height": 1.5, "length": 4.0, "weight": 12.0 },
        { "id": 3, "type": "car", "width": 2.0, "height": 1.5, "length": 4.0, "weight": 12.0 },
        { "id": 4, "type": "bus", "width": 3.0, "height": 4.0, "length": 12.0, "weight": 95.0 }
    ]
}"#;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ferry-stow-{}-{}.json", name, std::process::id()))
}

mod pack_tests {
    use super::*;

    #[test]
    fn test_pack_manifest_and_report() {
        let manifest = Manifest::parse_json(HALF_LOADED).unwrap();
        let (already_placed, to_place) = manifest.split();
        assert_eq!(already_placed.len(), 1);
        assert_eq!(to_place.len(), 3);

        let outcome = Packer::default_config().pack_items(
            &manifest.container,
            &to_place,
            &already_placed,
        );

        // 90 + 12 + 12 leaves 86 of capacity, not enough for the 95 bus.
        assert_eq!(outcome.failed_ids(), vec![4]);

        let report = LoadReport::new(&manifest.container, already_placed, outcome);
        assert_eq!(
            report.placed_items.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(report.summary.placed_count, 3);
        assert_eq!(report.summary.unplaced_count, 1);
        assert_relative_eq!(report.summary.total_weight, 114.0);
        assert_relative_eq!(report.summary.total_volume, 60.0 + 12.0 + 12.0);
    }

    #[test]
    fn test_write_back_then_repack_is_a_no_op() {
        let mut manifest = Manifest::parse_json(HALF_LOADED).unwrap();
        let packer = Packer::default_config();
        let (already_placed, to_place) = manifest.split();
        let outcome = packer.pack_items(&manifest.container, &to_place, &already_placed);

        assert!(manifest.apply_placements(&outcome.newly_placed).is_empty());

        let path = temp_path("write-back");
        manifest.save(&path).unwrap();
        let reloaded = Manifest::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(reloaded, manifest);
        let (placed, remaining) = reloaded.split();
        assert_eq!(placed.len(), 3);
        assert_eq!(remaining.iter().map(|u| u.id).collect::<Vec<_>>(), vec![4]);

        let again = packer.pack_items(&reloaded.container, &remaining, &placed);
        assert!(again.newly_placed.is_empty());
        assert_eq!(again.failed_ids(), vec![4]);
    }

    #[test]
    fn test_report_json_file() {
        let manifest = Manifest::parse_json(HALF_LOADED).unwrap();
        let (already_placed, to_place) = manifest.split();
        let outcome = Packer::default_config().pack_items(
            &manifest.container,
            &to_place,
            &already_placed,
        );
        let report = LoadReport::new(&manifest.container, already_placed, outcome);

        let path = temp_path("report");
        report.save_json(&path).unwrap();
        let saved = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let parsed: LoadReport = serde_json::from_str(&saved).unwrap();
        assert_eq!(parsed.placed_items, report.placed_items);
        assert_eq!(parsed.summary, report.summary);
    }
}

mod check_tests {
    use super::*;

    #[test]
    fn test_fitment_against_manifest() {
        let manifest = Manifest::parse_json(HALF_LOADED).unwrap();
        let (already_placed, _) = manifest.split();
        let packer = Packer::default_config();

        let van = UnplacedItem::new(10, "van", Dimensions::new(2.0, 2.5, 5.0), 40.0);
        assert_eq!(
            packer.check_fitment(&manifest.container, &van, &already_placed),
            Ok(())
        );

        let heavy = UnplacedItem::new(11, "tanker", Dimensions::new(2.0, 2.5, 5.0), 150.0);
        assert_eq!(
            packer.check_fitment(&manifest.container, &heavy, &already_placed),
            Err(FitmentError::Overweight)
        );

        let huge = UnplacedItem::new(12, "barge", Dimensions::new(25.0, 25.0, 25.0), 1.0);
        assert_eq!(
            packer.check_fitment(&manifest.container, &huge, &already_placed),
            Err(FitmentError::NoSpace)
        );
    }

    #[test]
    fn test_checked_item_added_then_packed() {
        let mut manifest = Manifest::parse_json(HALF_LOADED).unwrap();
        let (already_placed, _) = manifest.split();
        let packer = Packer::default_config();

        let dims = Dimensions::new(2.0, 2.5, 5.0);
        let van = UnplacedItem::new(manifest.next_id(), "van", dims, 90.0);
        assert_eq!(van.id, 5);
        assert!(packer
            .check_fitment(&manifest.container, &van, &already_placed)
            .is_ok());
        manifest.add_item(van).unwrap();

        let path = temp_path("add");
        manifest.save(&path).unwrap();
        let reloaded = Manifest::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(reloaded.item(5).unwrap().state, ItemState::Unplaced);
        let (placed, to_place) = reloaded.split();
        assert_eq!(
            to_place.iter().map(|u| u.id).collect::<Vec<_>>(),
            vec![2, 3, 4, 5]
        );

        // 90 + 90 fits on its own, but not once both cars are loaded.
        let outcome = packer.pack_items(&reloaded.container, &to_place, &placed);
        assert_eq!(outcome.failed_ids(), vec![4, 5]);
    }
}

mod remove_tests {
    use super::*;

    #[test]
    fn test_removed_item_frees_capacity() {
        let mut manifest = Manifest::parse_json(HALF_LOADED).unwrap();
        let removed = manifest.remove_item(1).unwrap();
        assert_eq!(removed.kind, "truck");

        let (placed, to_place) = manifest.split();
        assert!(placed.is_empty());

        // Without the 90 truck all three remaining items fit the 200 limit.
        let outcome = Packer::default_config().pack_items(&manifest.container, &to_place, &placed);
        assert!(outcome.all_placed());
        assert!(manifest.remove_item(1).is_none());
    }
}

mod load_tests {
    use super::*;
    use ferry_stow_cli::ManifestError;

    #[test]
    fn test_overlapping_stored_positions_rejected() {
        let json = HALF_LOADED.replace(
            r#""weight": 12.0 },
        { "id": 3"#,
            r#""weight": 12.0, "position": { "x": 1.0, "y": 1.0, "z": 1.0 } },
        { "id": 3"#,
        );
        assert!(matches!(
            Manifest::parse_json(&json),
            Err(ManifestError::InvalidPlacement { id: 2, .. })
        ));
    }
}

mod place_tests {
    use super::*;

    fn car(manifest: &Manifest) -> UnplacedItem {
        match manifest.item(2).cloned().map(|item| item.into_split()) {
            Some(SplitItem::Unplaced(unplaced)) => unplaced,
            other => panic!("expected unplaced car, got {:?}", other),
        }
    }

    #[test]
    fn test_manual_placement_accepted_and_recorded() {
        let mut manifest = Manifest::parse_json(HALF_LOADED).unwrap();
        let (already_placed, _) = manifest.split();
        let packer = Packer::default_config();

        let placed = packer
            .validate_placement(
                &manifest.container,
                &car(&manifest),
                Position3D::new(10.0, 0.25, 10.0),
                &already_placed,
            )
            .unwrap();
        manifest.apply_placements(&[placed]);

        assert_eq!(
            manifest.item(2).unwrap().state,
            ItemState::Placed(Position3D::new(10.0, 0.25, 10.0))
        );
    }

    #[test]
    fn test_manual_placement_rejections() {
        let manifest = Manifest::parse_json(HALF_LOADED).unwrap();
        let (already_placed, _) = manifest.split();
        let packer = Packer::default_config();
        let item = car(&manifest);

        let overlapping = packer.validate_placement(
            &manifest.container,
            &item,
            Position3D::new(1.0, 0.25, 1.0),
            &already_placed,
        );
        assert_eq!(overlapping, Err(PlacementError::Collision { with: 1 }));

        // Usable length is 27; 24 + 4 runs past it.
        let past_ramp = packer.validate_placement(
            &manifest.container,
            &item,
            Position3D::new(10.0, 0.25, 24.0),
            &already_placed,
        );
        assert!(matches!(
            past_ramp,
            Err(PlacementError::OutOfBounds { .. })
        ));

        // Truck ends at x = 2.75; no gap is left beside it.
        let flush = packer.validate_placement(
            &manifest.container,
            &item,
            Position3D::new(2.75, 0.25, 0.25),
            &already_placed,
        );
        assert_eq!(flush, Err(PlacementError::Collision { with: 1 }));

        let against_wall = packer.validate_placement(
            &manifest.container,
            &item,
            Position3D::new(10.0, 0.0, 10.0),
            &already_placed,
        );
        assert!(matches!(
            against_wall,
            Err(PlacementError::OutOfBounds { .. })
        ));
    }
}
