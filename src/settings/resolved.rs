use std::fmt::Write;
use std::path::{Path, PathBuf};

use place_picker::{Coordinates, DistanceMetric, UiConfig};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub catalog_path: Option<PathBuf>,
	pub origin: Option<Coordinates>,
	pub metric: DistanceMetric,
	pub data_dir: PathBuf,
	pub ephemeral: bool,
	pub storage_key: String,
	pub theme: Option<String>,
	pub ui: UiConfig,
	pub log_level: String,
}

impl ResolvedConfig {
	/// File backing the persistent key-value store.
	pub fn storage_path(&self) -> PathBuf {
		self.data_dir.join("storage.json")
	}

	/// Print a human readable summary of the effective configuration.
	/// `log_file` is where logging ended up, if it could be set up.
	pub fn print_summary(&self, log_file: Option<&Path>) {
		print!("{}", self.summary(log_file));
	}

	fn summary(&self, log_file: Option<&Path>) -> String {
		let catalog = self
			.catalog_path
			.as_ref()
			.map_or_else(|| "(bundled)".to_string(), |path| path.display().to_string());
		let origin = self.origin.map_or_else(
			|| "(unknown)".to_string(),
			|origin| format!("{:.4}, {:.4}", origin.latitude, origin.longitude),
		);
		let storage = if self.ephemeral {
			"in memory only".to_string()
		} else {
			self.storage_path().display().to_string()
		};
		let log_file = log_file.map_or_else(|| "(disabled)".to_string(), |path| path.display().to_string());

		let mut out = String::from("Effective configuration:\n");
		let _ = writeln!(out, "  Catalog: {catalog}");
		let _ = writeln!(out, "  Origin: {origin}");
		let _ = writeln!(out, "  Metric: {}", self.metric.as_str());
		let _ = writeln!(out, "  Data directory: {}", self.data_dir.display());
		let _ = writeln!(out, "  Storage: {storage}");
		let _ = writeln!(out, "  Storage key: {}", self.storage_key);
		let _ = writeln!(
			out,
			"  UI theme: {}",
			self.theme.as_deref().unwrap_or("(use the library default)")
		);
		let _ = writeln!(out, "  Heading: {}", self.ui.heading);
		let _ = writeln!(out, "  Log level: {}", self.log_level);
		let _ = writeln!(out, "  Log file: {log_file}");
		out
	}
}
