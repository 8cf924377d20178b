use std::path::PathBuf;

use anyhow::{Result, bail};
use place_picker::geolocation::validate_origin;
use place_picker::{Coordinates, DistanceMetric};
use serde::Deserialize;

use super::super::util::{absolutize, parse_metric};
use crate::cli::CliArgs;

/// Where the place catalog is read from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CatalogSection {
	pub(super) path: Option<PathBuf>,
}

impl CatalogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.catalog.clone() {
			self.path = Some(path);
		}
	}

	pub(super) fn resolve(self) -> Result<Option<PathBuf>> {
		self.path.map(absolutize).transpose()
	}
}

/// The user's position and how distances from it are measured.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LocationSection {
	pub(super) latitude: Option<f64>,
	pub(super) longitude: Option<f64>,
	pub(super) metric: Option<String>,
}

impl LocationSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(origin) = cli.origin {
			self.latitude = Some(origin.latitude);
			self.longitude = Some(origin.longitude);
		}
		if let Some(metric) = cli.metric {
			self.metric = Some(metric.as_str().to_string());
		}
	}

	pub(super) fn resolve(self) -> Result<(Option<Coordinates>, DistanceMetric)> {
		let origin = match (self.latitude, self.longitude) {
			(Some(latitude), Some(longitude)) => Some(validate_origin(latitude, longitude)?),
			(None, None) => None,
			_ => bail!("location needs both latitude and longitude"),
		};
		let metric = parse_metric(self.metric.as_deref())?;
		Ok((origin, metric))
	}
}
