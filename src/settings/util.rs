use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use place_picker::DistanceMetric;
use place_picker::logging::LEVELS;

/// Trim a user supplied label, treating blank values as absent.
pub(super) fn sanitize_text(value: Option<String>) -> Option<String> {
	value
		.map(|text| text.trim().to_string())
		.filter(|text| !text.is_empty())
}

/// Parse a distance metric name, defaulting to planar when unset.
pub(super) fn parse_metric(value: Option<&str>) -> Result<DistanceMetric> {
	let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
		return Ok(DistanceMetric::default());
	};
	match value.to_ascii_lowercase().as_str() {
		"planar" => Ok(DistanceMetric::Planar),
		"haversine" => Ok(DistanceMetric::Haversine),
		other => bail!("unknown distance metric '{other}' (expected planar or haversine)"),
	}
}

/// Accept either a plain level name or a full filter directive such as
/// `place_picker=debug`.
pub(super) fn parse_level(value: Option<&str>) -> Result<String> {
	let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
		return Ok("info".to_string());
	};
	let lowered = value.to_ascii_lowercase();
	if LEVELS.contains(&lowered.as_str()) {
		return Ok(lowered);
	}
	if value.contains('=') {
		return Ok(value.to_string());
	}
	bail!("unknown log level '{value}' (expected one of: {})", LEVELS.join(", "))
}

/// Resolve relative paths against the current working directory.
pub(super) fn absolutize(path: PathBuf) -> Result<PathBuf> {
	if path.is_absolute() {
		return Ok(path);
	}
	let cwd = env::current_dir().context("failed to resolve current directory")?;
	Ok(cwd.join(path))
}

#[cfg(test)]
mod tests {
	use std::path::Path;

	use super::*;

	#[test]
	fn blank_text_is_dropped() {
		assert_eq!(sanitize_text(Some("  hi ".into())), Some("hi".into()));
		assert_eq!(sanitize_text(Some("   ".into())), None);
		assert_eq!(sanitize_text(None), None);
	}

	#[test]
	fn metric_names_are_case_insensitive() {
		assert_eq!(parse_metric(None).unwrap(), DistanceMetric::Planar);
		assert_eq!(parse_metric(Some("")).unwrap(), DistanceMetric::Planar);
		assert_eq!(
			parse_metric(Some("HaverSine")).unwrap(),
			DistanceMetric::Haversine
		);
		assert!(parse_metric(Some("taxicab")).is_err());
	}

	#[test]
	fn levels_accept_names_and_directives() {
		assert_eq!(parse_level(None).unwrap(), "info");
		assert_eq!(parse_level(Some("WARN")).unwrap(), "warn");
		assert_eq!(
			parse_level(Some("place_picker=trace")).unwrap(),
			"place_picker=trace"
		);
		assert!(parse_level(Some("loud")).is_err());
	}

	#[test]
	fn relative_paths_are_anchored_to_cwd() {
		let absolute = absolutize(PathBuf::from("/srv/places.json")).unwrap();
		assert_eq!(absolute, Path::new("/srv/places.json"));

		let relative = absolutize(PathBuf::from("places.json")).unwrap();
		assert!(relative.is_absolute());
		assert!(relative.ends_with("places.json"));
	}
}
