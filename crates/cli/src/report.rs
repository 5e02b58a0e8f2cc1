//! Load report produced by the `pack` command.

use ferry_stow::{Container, LoadSummary, PackOutcome};
use ferry_stow_core::{PlacedItem, UnplacedItem};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The final state of a deck after packing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    /// The deck that was loaded.
    pub container: Container,
    /// Previously placed items followed by the newly placed ones.
    pub placed_items: Vec<PlacedItem>,
    /// Items that could not be placed.
    pub unplaced_items: Vec<UnplacedItem>,
    /// Weight and volume totals.
    pub summary: LoadSummary,
}

impl LoadReport {
    /// Builds the report from a snapshot and the outcome of packing it.
    pub fn new(
        container: &Container,
        already_placed: Vec<PlacedItem>,
        outcome: PackOutcome,
    ) -> Self {
        let (newly_placed, unplaced_items) = outcome.into_parts();
        let mut placed_items = already_placed;
        placed_items.extend(newly_placed);

        let summary = LoadSummary::compute(container, &placed_items, unplaced_items.len());
        Self {
            container: container.clone(),
            placed_items,
            unplaced_items,
            summary,
        }
    }

    /// Saves the report to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    /// Prints a human-readable summary.
    pub fn print_summary(&self) {
        println!("\n{:=<72}", "");
        println!("LOAD PLAN");
        println!("{:=<72}", "");
        println!(
            "{:>6} {:<12} {:>22} {:>22}",
            "ID", "Type", "Position (x, y, z)", "Size (w x h x l)"
        );
        println!("{:-<72}", "");

        for item in &self.placed_items {
            let p = item.position;
            let d = item.dimensions;
            println!(
                "{:>6} {:<12} {:>22} {:>22}",
                item.id,
                item.kind,
                format!("({:.2}, {:.2}, {:.2})", p.x, p.y, p.z),
                format!("{} x {} x {}", d.width, d.height, d.length)
            );
        }

        if !self.unplaced_items.is_empty() {
            println!("{:-<72}", "");
            println!("Not loaded:");
            for item in &self.unplaced_items {
                println!("{:>6} {:<12}", item.id, item.kind);
            }
        }

        println!("{:-<72}", "");
        println!(
            "Weight: {:.1} / {:.1}   Volume: {:.1} / {:.1}   Utilization: {}",
            self.summary.total_weight,
            self.container.max_weight,
            self.summary.total_volume,
            self.summary.usable_volume,
            self.summary.utilization_display()
        );
    }
}
