use anyhow::{Context, Result};
use place_picker::geolocation::{FixedPosition, Unavailable, request_position};
use place_picker::ui::style;
use place_picker::{
	App, Catalog, Coordinates, DistanceMetric, FileStore, KeyValueStore, MemoryStore, PickStore,
	PickerOutcome, UiConfig, catalog,
};
use tracing::{debug, info};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive picker.
pub(crate) struct PickerWorkflow {
	picks: PickStore<Box<dyn KeyValueStore>>,
	theme: Option<String>,
	ui: UiConfig,
	metric: DistanceMetric,
	origin: Option<Coordinates>,
}

impl PickerWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let catalog = load_catalog(&config)?;
		let storage = open_storage(&config);
		let picks = PickStore::load_with_key(catalog, storage, config.storage_key.clone());
		info!(
			places = picks.catalog().len(),
			picked = picks.picked().len(),
			"restored picks"
		);

		let ResolvedConfig {
			theme,
			ui,
			metric,
			origin,
			..
		} = config;

		Ok(Self {
			picks,
			theme,
			ui,
			metric,
			origin,
		})
	}

	/// The picks as they stand without starting the UI.
	pub(crate) fn snapshot(&self) -> PickerOutcome {
		PickerOutcome {
			picked: self.picks.picked().to_vec(),
		}
	}

	pub(crate) fn run(self) -> Result<PickerOutcome> {
		let Self {
			picks,
			theme,
			ui,
			metric,
			origin,
		} = self;

		let mut app = App::new(picks);
		app.set_ui_config(ui);
		app.set_metric(metric);
		if let Some(theme) = theme.as_deref().and_then(style::by_name) {
			app.set_theme(theme);
		}

		let updates = match origin {
			Some(origin) => request_position(FixedPosition(origin)),
			None => request_position(Unavailable),
		};
		app.set_position_updates(updates);

		place_picker::run(app)
	}
}

fn load_catalog(config: &ResolvedConfig) -> Result<Catalog> {
	match &config.catalog_path {
		Some(path) => {
			debug!(path = %path.display(), "loading catalog");
			Catalog::load(path)
				.with_context(|| format!("failed to load catalog from {}", path.display()))
		}
		None => catalog::builtin(),
	}
}

fn open_storage(config: &ResolvedConfig) -> Box<dyn KeyValueStore> {
	if config.ephemeral {
		debug!("picks are kept in memory only");
		Box::new(MemoryStore::new())
	} else {
		Box::new(FileStore::open(config.storage_path()))
	}
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::*;

	fn config(data_dir: PathBuf) -> ResolvedConfig {
		ResolvedConfig {
			catalog_path: None,
			origin: None,
			metric: DistanceMetric::Planar,
			data_dir,
			ephemeral: false,
			storage_key: place_picker::PICKED_PLACES_KEY.to_string(),
			theme: None,
			ui: UiConfig::default(),
			log_level: "info".into(),
		}
	}

	#[test]
	fn snapshot_reads_persisted_picks() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(
			dir.path().join("storage.json"),
			r#"{"pickedPlaces":"[\"p3\",\"ghost\",\"p1\"]"}"#,
		)
		.unwrap();

		let workflow = PickerWorkflow::from_config(config(dir.path().to_path_buf())).unwrap();
		let ids: Vec<_> = workflow
			.snapshot()
			.picked
			.into_iter()
			.map(|place| place.id)
			.collect();
		assert_eq!(ids, vec!["p3", "p1"]);
	}

	#[test]
	fn ephemeral_mode_ignores_disk() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(
			dir.path().join("storage.json"),
			r#"{"pickedPlaces":"[\"p3\"]"}"#,
		)
		.unwrap();

		let mut config = config(dir.path().to_path_buf());
		config.ephemeral = true;
		let workflow = PickerWorkflow::from_config(config).unwrap();
		assert!(workflow.snapshot().picked.is_empty());
	}

	#[test]
	fn custom_catalog_is_loaded() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("places.json");
		std::fs::write(
			&path,
			r#"[{"id":"a","title":"Alpha","image":{"src":"a.jpg","alt":"A"}}]"#,
		)
		.unwrap();

		let mut config = config(dir.path().to_path_buf());
		config.catalog_path = Some(path);
		let workflow = PickerWorkflow::from_config(config).unwrap();
		assert_eq!(workflow.picks.catalog().len(), 1);
	}

	#[test]
	fn missing_catalog_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let mut config = config(dir.path().to_path_buf());
		config.catalog_path = Some(dir.path().join("absent.json"));
		assert!(PickerWorkflow::from_config(config).is_err());
	}
}
