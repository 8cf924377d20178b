use anyhow::Result;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::ResolvedConfig;

mod location;
mod storage;
mod ui;

use location::{CatalogSection, LocationSection};
use storage::{LoggingSection, StorageSection};
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalog: CatalogSection,
	location: LocationSection,
	storage: StorageSection,
	ui: UiSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.catalog.apply_cli_overrides(cli);
		self.location.apply_cli_overrides(cli);
		self.storage.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let (origin, metric) = self.location.resolve()?;
		let storage = self.storage.resolve()?;
		let ui = self.ui.resolve()?;

		Ok(ResolvedConfig {
			catalog_path: self.catalog.resolve()?,
			origin,
			metric,
			data_dir: storage.data_dir,
			ephemeral: storage.ephemeral,
			storage_key: storage.key,
			theme: ui.theme,
			ui: ui.ui,
			log_level: self.logging.resolve()?,
		})
	}
}
