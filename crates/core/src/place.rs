use serde::{Deserialize, Serialize};

/// Image metadata carried with each place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceImage {
	pub src: String,
	pub alt: String,
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
	pub latitude: f64,
	pub longitude: f64,
}

impl Coordinates {
	#[must_use]
	pub const fn new(latitude: f64, longitude: f64) -> Self {
		Self {
			latitude,
			longitude,
		}
	}

	/// Whether both components are finite numbers.
	#[must_use]
	pub fn is_finite(&self) -> bool {
		self.latitude.is_finite() && self.longitude.is_finite()
	}
}

/// A single entry of the catalog.
///
/// Coordinates are optional; a place without them can still be picked but sorts
/// after every located place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
	pub id: String,
	pub title: String,
	pub image: PlaceImage,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub lat: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub lon: Option<f64>,
}

impl Place {
	/// Build a place without coordinates.
	#[must_use]
	pub fn new(id: impl Into<String>, title: impl Into<String>, image: PlaceImage) -> Self {
		Self {
			id: id.into(),
			title: title.into(),
			image,
			lat: None,
			lon: None,
		}
	}

	/// Attach coordinates to the place.
	#[must_use]
	pub fn at(mut self, lat: f64, lon: f64) -> Self {
		self.lat = Some(lat);
		self.lon = Some(lon);
		self
	}

	/// Return the place coordinates when both components are present.
	#[must_use]
	pub fn coordinates(&self) -> Option<Coordinates> {
		match (self.lat, self.lon) {
			(Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
			_ => None,
		}
	}
}
