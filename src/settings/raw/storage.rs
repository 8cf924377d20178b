use std::path::PathBuf;

use anyhow::Result;
use place_picker::{PICKED_PLACES_KEY, app_dirs};
use serde::Deserialize;

use super::super::util::{absolutize, parse_level, sanitize_text};
use crate::cli::CliArgs;

/// Persistence options as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct StorageSection {
	pub(super) data_dir: Option<PathBuf>,
	pub(super) ephemeral: Option<bool>,
	pub(super) key: Option<String>,
}

pub(super) struct StorageResolution {
	pub(super) data_dir: PathBuf,
	pub(super) ephemeral: bool,
	pub(super) key: String,
}

impl StorageSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(dir) = cli.data_dir.clone() {
			self.data_dir = Some(dir);
		}
		if cli.ephemeral {
			self.ephemeral = Some(true);
		}
	}

	pub(super) fn resolve(self) -> Result<StorageResolution> {
		let data_dir = match self.data_dir {
			Some(dir) => absolutize(dir)?,
			None => app_dirs::get_data_dir()?,
		};
		Ok(StorageResolution {
			data_dir,
			ephemeral: self.ephemeral.unwrap_or(false),
			key: sanitize_text(self.key).unwrap_or_else(|| PICKED_PLACES_KEY.to_string()),
		})
	}
}

/// Log verbosity as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level {
			self.level = Some(level.as_str().to_string());
		}
	}

	pub(super) fn resolve(self) -> Result<String> {
		parse_level(self.level.as_deref())
	}
}
