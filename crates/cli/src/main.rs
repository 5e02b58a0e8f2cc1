//! Ferry Stow CLI

use clap::{Parser, Subcommand};
use ferry_stow::Packer;
use ferry_stow_cli::{LoadReport, Manifest};
use ferry_stow_core::{
    CargoItem, Config, Dimensions, Position3D, SplitItem, UnplacedItem, DEFAULT_MARGIN,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ferry-stow")]
#[command(about = "Plan cargo placement on a ferry deck")]
#[command(version)]
struct Cli {
    /// Clearance between items and from the deck walls
    #[arg(long, global = true, default_value_t = DEFAULT_MARGIN)]
    margin: f64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Place every unplaced item in a manifest
    Pack {
        /// Path to the JSON manifest
        manifest: PathBuf,

        /// Output file for the load report (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Record the new positions in the manifest file
        #[arg(long)]
        write_back: bool,
    },

    /// Check whether a new item would fit on the deck
    Check {
        /// Path to the JSON manifest
        manifest: PathBuf,

        #[arg(long)]
        width: f64,

        #[arg(long)]
        height: f64,

        #[arg(long)]
        length: f64,

        #[arg(long)]
        weight: f64,

        /// Item type tag
        #[arg(long = "type", default_value = "item")]
        kind: String,

        /// Display color recorded with the item
        #[arg(long)]
        color: Option<String>,

        /// Add the item to the manifest, unplaced, if it fits
        #[arg(long)]
        add: bool,
    },

    /// Validate a manual position for an unplaced manifest item
    Place {
        /// Path to the JSON manifest
        manifest: PathBuf,

        /// Item id
        #[arg(long)]
        id: i64,

        #[arg(long)]
        x: f64,

        #[arg(long)]
        y: f64,

        #[arg(long)]
        z: f64,

        /// Record the position in the manifest file
        #[arg(long)]
        write_back: bool,
    },

    /// Remove an item from a manifest
    Remove {
        /// Path to the JSON manifest
        manifest: PathBuf,

        /// Item id
        #[arg(long)]
        id: i64,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::new().with_margin(cli.margin);
    config.validate()?;
    let packer = Packer::new(config);

    match cli.command {
        Commands::Pack {
            manifest: path,
            output,
            write_back,
        } => {
            let mut manifest = Manifest::load(&path)?;
            let (already_placed, to_place) = manifest.split();
            log::info!(
                "{} items already placed, {} to place",
                already_placed.len(),
                to_place.len()
            );

            let outcome = packer.pack_items(&manifest.container, &to_place, &already_placed);

            if write_back {
                let missing = manifest.apply_placements(&outcome.newly_placed);
                if !missing.is_empty() {
                    log::warn!("{} positions could not be recorded", missing.len());
                }
                manifest.save(&path)?;
                println!("Manifest updated: {}", path.display());
            }

            let report = LoadReport::new(&manifest.container, already_placed, outcome);
            report.print_summary();

            if let Some(out) = output {
                report.save_json(&out)?;
                println!("Report saved to: {}", out.display());
            }
        }

        Commands::Check {
            manifest: path,
            width,
            height,
            length,
            weight,
            kind,
            color,
            add,
        } => {
            let mut manifest = Manifest::load(&path)?;
            let (already_placed, _) = manifest.split();

            let dims = Dimensions::new(width, height, length);
            let mut candidate = UnplacedItem::new(manifest.next_id(), kind, dims, weight);
            if let Some(color) = color {
                candidate = candidate.with_color(color);
            }
            candidate.validate()?;

            let fitment = packer.check_fitment(&manifest.container, &candidate, &already_placed);
            if let Err(err) = fitment {
                anyhow::bail!("cannot load item: {}", err);
            }
            println!("ok: item fits");

            if add {
                let id = candidate.id;
                manifest.add_item(candidate)?;
                manifest.save(&path)?;
                println!("Added item {} to {}", id, path.display());
            }
        }

        Commands::Place {
            manifest: path,
            id,
            x,
            y,
            z,
            write_back,
        } => {
            let mut manifest = Manifest::load(&path)?;
            let item = match manifest.item(id).cloned().map(CargoItem::into_split) {
                None => anyhow::bail!("no item with id {} in {}", id, path.display()),
                Some(SplitItem::Placed(placed)) => {
                    let at = placed.position;
                    anyhow::bail!(
                        "item {} is already placed at ({}, {}, {})",
                        id,
                        at.x,
                        at.y,
                        at.z
                    )
                }
                Some(SplitItem::Unplaced(unplaced)) => unplaced,
            };
            let (already_placed, _) = manifest.split();

            let placed = packer
                .validate_placement(
                    &manifest.container,
                    &item,
                    Position3D::new(x, y, z),
                    &already_placed,
                )
                .map_err(|err| anyhow::anyhow!("cannot place item {}: {}", id, err))?;
            println!("ok: item {} fits at ({}, {}, {})", id, x, y, z);

            if write_back {
                manifest.apply_placements(&[placed]);
                manifest.save(&path)?;
                println!("Manifest updated: {}", path.display());
            }
        }

        Commands::Remove { manifest: path, id } => {
            let mut manifest = Manifest::load(&path)?;
            if manifest.remove_item(id).is_none() {
                anyhow::bail!("no item with id {} in {}", id, path.display());
            }
            manifest.save(&path)?;
            println!("Removed item {} from {}", id, path.display());
        }
    }

    Ok(())
}
