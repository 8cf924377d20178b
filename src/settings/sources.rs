use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};

use crate::cli::CliArgs;
use place_picker::app_dirs;

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("place_picker")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".place-picker.toml"));
		files.push(current_dir.join("place-picker.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".place-picker.toml")));
		assert!(files.iter().any(|path| path.ends_with("place-picker.toml")));
	}

	#[test]
	fn explicit_file_is_merged() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("extra.toml");
		std::fs::write(&path, "[location]\nlatitude = 12.5\nlongitude = -3.25\n").unwrap();

		let cli = CliArgs::parse_from([
			"place-picker".into(),
			"--no-config".into(),
			"--config".into(),
			path.into_os_string(),
		]);
		let config = build_config(&cli).unwrap();
		assert_eq!(config.get_float("location.latitude").unwrap(), 12.5);
		assert_eq!(config.get_float("location.longitude").unwrap(), -3.25);
	}

	#[test]
	fn missing_explicit_file_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let cli = CliArgs::parse_from([
			"place-picker".into(),
			"--no-config".into(),
			"--config".into(),
			dir.path().join("absent.toml").into_os_string(),
		]);
		assert!(build_config(&cli).is_err());
	}

	#[test]
	fn environment_overrides_config_files() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("picker.toml");
		std::fs::write(&path, "[location]\nmetric = \"planar\"\nlatitude = 1.5\n").unwrap();

		// SAFETY: no other test reads or writes this variable.
		unsafe {
			env::set_var("PLACE_PICKER__LOCATION__METRIC", "haversine");
		}
		let cli = CliArgs::parse_from([
			"place-picker".into(),
			"--no-config".into(),
			"--config".into(),
			path.into_os_string(),
		]);
		let config = build_config(&cli);
		unsafe {
			env::remove_var("PLACE_PICKER__LOCATION__METRIC");
		}

		let config = config.unwrap();
		assert_eq!(config.get_string("location.metric").unwrap(), "haversine");
		assert_eq!(config.get_float("location.latitude").unwrap(), 1.5);
	}
}
