//! Greedy cargo packer.

use crate::anchor::anchor_points;
use crate::container::Container;
use crate::fitment::check_fitment;
use crate::placement::{check_position, total_weight, validate_placement};
use crate::rotation::rotations;
use ferry_stow_core::{
    Config, Dimensions, FitmentError, PackOutcome, PlacedItem, PlacementError, Point, Position3D,
    Solver, UnplacedItem,
};

/// Greedy, single-pass cargo packer.
///
/// Items are considered in input order. Each one goes to the acceptable
/// (rotation, anchor) pair with the smallest anchor in (z, y, x) order; an
/// item placed earlier is never moved to make room for a later one.
#[derive(Debug, Clone, Default)]
pub struct Packer {
    config: Config,
}

impl Packer {
    /// Creates a new packer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Finds the best position for `item` given the current occupancy, or
    /// `None` if no orientation fits anywhere.
    fn best_fit(
        &self,
        container: &Container,
        item: &UnplacedItem,
        occupied: &[PlacedItem],
    ) -> Option<(Dimensions, Point)> {
        let anchors = anchor_points(occupied, self.config.margin);
        let mut best: Option<(Dimensions, Point)> = None;

        for rotation in rotations(&item.dimensions) {
            // Anchors are sorted, so the first acceptable one is this
            // rotation's best.
            let found = anchors.iter().find(|anchor| {
                check_position(container, anchor, &rotation, occupied, self.config.margin).is_ok()
            });

            if let Some(anchor) = found {
                let better = match &best {
                    None => true,
                    Some((_, current)) => anchor.fill_order(current).is_lt(),
                };
                if better {
                    best = Some((rotation, *anchor));
                }
            }
        }

        best
    }

    /// Places as many of `items` as fit, in input order.
    ///
    /// Neither input is modified. Items that exceed the remaining weight
    /// capacity or find no space end up in `failed_to_place`.
    pub fn pack_items(
        &self,
        container: &Container,
        items: &[UnplacedItem],
        already_placed: &[PlacedItem],
    ) -> PackOutcome {
        let mut outcome = PackOutcome::new();
        let mut occupied = already_placed.to_vec();
        let mut current_weight = total_weight(already_placed);

        for item in items {
            if current_weight + item.weight > container.max_weight {
                log::debug!(
                    "item {} rejected: weight {} over remaining capacity {}",
                    item.id,
                    item.weight,
                    container.max_weight - current_weight
                );
                outcome.failed_to_place.push(item.clone());
                continue;
            }

            match self.best_fit(container, item, &occupied) {
                Some((dims, anchor)) => {
                    log::debug!(
                        "item {} placed at ({}, {}, {}) as {}x{}x{}",
                        item.id,
                        anchor.x,
                        anchor.y,
                        anchor.z,
                        dims.width,
                        dims.height,
                        dims.length
                    );
                    let placed = item.place(dims, anchor);
                    occupied.push(placed.clone());
                    outcome.newly_placed.push(placed);
                    current_weight += item.weight;
                }
                None => {
                    log::debug!("item {} rejected: no space", item.id);
                    outcome.failed_to_place.push(item.clone());
                }
            }
        }

        if !outcome.all_placed() {
            log::warn!(
                "{} of {} items could not be placed",
                outcome.failed_count(),
                items.len()
            );
        }

        outcome
    }

    /// Checks whether `candidate` could be placed at all, without choosing a
    /// position.
    pub fn check_fitment(
        &self,
        container: &Container,
        candidate: &UnplacedItem,
        already_placed: &[PlacedItem],
    ) -> Result<(), FitmentError> {
        check_fitment(container, candidate, already_placed, self.config.margin)
    }

    /// Validates a caller-chosen position for `item`.
    ///
    /// Besides the packer's bounds and overlap checks, the configured margin
    /// is required from the near walls and from every placed item.
    pub fn validate_placement(
        &self,
        container: &Container,
        item: &UnplacedItem,
        position: Position3D,
        already_placed: &[PlacedItem],
    ) -> Result<PlacedItem, PlacementError> {
        validate_placement(container, item, position, already_placed, self.config.margin)
    }
}

impl Solver for Packer {
    type Container = Container;

    fn pack_items(
        &self,
        container: &Container,
        items: &[UnplacedItem],
        already_placed: &[PlacedItem],
    ) -> PackOutcome {
        Packer::pack_items(self, container, items, already_placed)
    }

    fn check_fitment(
        &self,
        container: &Container,
        candidate: &UnplacedItem,
        already_placed: &[PlacedItem],
    ) -> Result<(), FitmentError> {
        Packer::check_fitment(self, container, candidate, already_placed)
    }
}
