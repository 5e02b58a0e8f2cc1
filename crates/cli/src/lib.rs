//! Command-line support for ferry-stow.
//!
//! This crate provides:
//! - JSON load manifest parsing and write-back
//! - Load report generation

mod manifest;
mod report;

pub use manifest::{Manifest, ManifestError};
pub use report::LoadReport;
