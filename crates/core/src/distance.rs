//! Proximity ordering for the available-places list.

use serde::{Deserialize, Serialize};

use crate::place::{Coordinates, Place};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// How the distance between two coordinates is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
	/// Straight line over raw latitude/longitude degrees.
	#[default]
	Planar,
	/// Great-circle distance in kilometres.
	Haversine,
}

impl DistanceMetric {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Planar => "planar",
			Self::Haversine => "haversine",
		}
	}

	/// Distance between two points. Non-finite input or output yields infinity.
	#[must_use]
	pub fn between(self, from: Coordinates, to: Coordinates) -> f64 {
		if !from.is_finite() || !to.is_finite() {
			return f64::INFINITY;
		}
		let distance = match self {
			Self::Planar => planar(from, to),
			Self::Haversine => haversine(from, to),
		};
		if distance.is_finite() { distance } else { f64::INFINITY }
	}
}

fn planar(from: Coordinates, to: Coordinates) -> f64 {
	let dlat = to.latitude - from.latitude;
	let dlon = to.longitude - from.longitude;
	dlat.hypot(dlon)
}

fn haversine(from: Coordinates, to: Coordinates) -> f64 {
	let dlat = (to.latitude - from.latitude).to_radians();
	let dlon = (to.longitude - from.longitude).to_radians();
	let a = (dlat / 2.0).sin().powi(2)
		+ from.latitude.to_radians().cos()
			* to.latitude.to_radians().cos()
			* (dlon / 2.0).sin().powi(2);
	// Rounding can push `a` past 1 for near-antipodal points.
	let a = a.clamp(0.0, 1.0);
	2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Return a new list ordered by ascending distance from `origin`.
///
/// The sort is stable. Places without usable coordinates count as infinitely
/// far away and keep their relative order at the end.
#[must_use]
pub fn sort_by_distance(places: &[Place], origin: Coordinates, metric: DistanceMetric) -> Vec<Place> {
	let mut keyed: Vec<(f64, &Place)> = places
		.iter()
		.map(|place| {
			let distance = place
				.coordinates()
				.map_or(f64::INFINITY, |coords| metric.between(origin, coords));
			(distance, place)
		})
		.collect();
	keyed.sort_by(|(a, _), (b, _)| a.total_cmp(b));
	keyed.into_iter().map(|(_, place)| place.clone()).collect()
}
