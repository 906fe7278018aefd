use anyhow::{Context, Result};

use super::loader::parse_json;
use super::model::DinosaurCatalog;

/// The dataset shipped with the binary, in the same layout `.json` files use.
pub const SAMPLE_JSON: &str = include_str!("../../data/dinosaurs.json");

/// Parse the embedded sample dataset.
pub fn sample_catalog() -> Result<DinosaurCatalog> {
    parse_json(SAMPLE_JSON).context("parsing embedded sample dataset")
}
