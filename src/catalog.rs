//! The catalog bundled with the binary.

use anyhow::{Context, Result};
use place_picker_core::Catalog;

const BUILTIN_PLACES: &str = include_str!("../assets/places.json");

/// Parse the bundled catalog.
pub fn builtin() -> Result<Catalog> {
	Catalog::from_json(BUILTIN_PLACES).context("bundled catalog is invalid")
}
