//! One-shot position requests.
//!
//! A [`PositionSource`] is queried once on a background thread and the fix, if
//! any, is delivered over a channel that the UI polls between frames. A source
//! that cannot produce a position simply drops the sender.

use std::sync::mpsc::{self, Receiver};
use std::thread;

use place_picker_core::Coordinates;
use thiserror::Error;

/// Something that can report the user's current position.
pub trait PositionSource: Send + 'static {
	/// Block until a position is known, or return `None` if it never will be.
	fn locate(&self) -> Option<Coordinates>;
}

/// A position supplied up front through configuration.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Coordinates);

impl PositionSource for FixedPosition {
	fn locate(&self) -> Option<Coordinates> {
		Some(self.0)
	}
}

/// Stands in when no position is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl PositionSource for Unavailable {
	fn locate(&self) -> Option<Coordinates> {
		None
	}
}

/// Issue a single position request and return the channel the answer arrives on.
pub fn request_position<P: PositionSource>(source: P) -> Receiver<Coordinates> {
	let (tx, rx) = mpsc::channel();
	let spawned = thread::Builder::new()
		.name("position-request".into())
		.spawn(move || match source.locate() {
			Some(coords) => {
				tracing::debug!(
					latitude = coords.latitude,
					longitude = coords.longitude,
					"position resolved"
				);
				let _ = tx.send(coords);
			}
			None => tracing::info!("no position available, keeping catalog order"),
		});
	if let Err(err) = spawned {
		tracing::warn!(error = %err, "failed to start position request");
	}
	rx
}

/// Reasons an origin string is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum OriginError {
	#[error("expected LAT,LON but got '{0}'")]
	Format(String),

	#[error("'{0}' is not a number")]
	Number(String),

	#[error("latitude {0} is outside -90..=90")]
	Latitude(f64),

	#[error("longitude {0} is outside -180..=180")]
	Longitude(f64),
}

/// Parse a `LAT,LON` pair in decimal degrees.
pub fn parse_origin(value: &str) -> Result<Coordinates, OriginError> {
	let (lat, lon) = value
		.split_once(',')
		.ok_or_else(|| OriginError::Format(value.to_string()))?;
	let parse = |part: &str| {
		let part = part.trim();
		part.parse::<f64>()
			.map_err(|_| OriginError::Number(part.to_string()))
	};
	validate_origin(parse(lat)?, parse(lon)?)
}

/// Check that a latitude/longitude pair lies on the globe.
pub fn validate_origin(latitude: f64, longitude: f64) -> Result<Coordinates, OriginError> {
	if !(-90.0..=90.0).contains(&latitude) {
		return Err(OriginError::Latitude(latitude));
	}
	if !(-180.0..=180.0).contains(&longitude) {
		return Err(OriginError::Longitude(longitude));
	}
	Ok(Coordinates::new(latitude, longitude))
}
