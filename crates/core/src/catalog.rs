use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::CatalogError;
use crate::place::Place;

/// The fixed list of selectable places.
///
/// A catalog is validated once when it is built and never changes afterwards.
/// Cloning is cheap; clones share the same backing slice.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	places: Arc<[Place]>,
}

impl Catalog {
	/// Build a catalog, rejecting empty or duplicate identifiers.
	pub fn from_places(places: Vec<Place>) -> Result<Self, CatalogError> {
		let mut seen = HashSet::with_capacity(places.len());
		for (index, place) in places.iter().enumerate() {
			if place.id.trim().is_empty() {
				return Err(CatalogError::EmptyId { index });
			}
			if !seen.insert(place.id.as_str()) {
				return Err(CatalogError::DuplicateId(place.id.clone()));
			}
		}
		Ok(Self {
			places: places.into(),
		})
	}

	/// Parse a catalog from a JSON array of places.
	pub fn from_json(json: &str) -> Result<Self, CatalogError> {
		let places: Vec<Place> = serde_json::from_str(json)?;
		Self::from_places(places)
	}

	/// Read and parse a catalog file.
	pub fn load(path: &Path) -> Result<Self, CatalogError> {
		let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_json(&json)
	}

	#[must_use]
	pub fn find(&self, id: &str) -> Option<&Place> {
		self.places.iter().find(|place| place.id == id)
	}

	#[must_use]
	pub fn contains(&self, id: &str) -> bool {
		self.find(id).is_some()
	}

	#[must_use]
	pub fn places(&self) -> &[Place] {
		&self.places
	}

	pub fn iter(&self) -> impl Iterator<Item = &Place> {
		self.places.iter()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.places.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.places.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::place::PlaceImage;

	fn place(id: &str) -> Place {
		Place::new(
			id,
			id.to_uppercase(),
			PlaceImage {
				src: format!("{id}.jpg"),
				alt: id.to_string(),
			},
		)
	}

	#[test]
	fn duplicate_ids_are_rejected() {
		let err = Catalog::from_places(vec![place("a"), place("b"), place("a")]).unwrap_err();
		assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
	}

	#[test]
	fn empty_ids_are_rejected() {
		let err = Catalog::from_places(vec![place("a"), place(" ")]).unwrap_err();
		assert!(matches!(err, CatalogError::EmptyId { index: 1 }));
	}

	#[test]
	fn lookup_preserves_catalog_order() {
		let catalog = Catalog::from_places(vec![place("b"), place("a")]).unwrap();
		let ids: Vec<_> = catalog.iter().map(|place| place.id.as_str()).collect();
		assert_eq!(ids, ["b", "a"]);
		assert_eq!(catalog.find("a").map(|place| place.title.as_str()), Some("A"));
		assert!(!catalog.contains("ghost"));
	}

	#[test]
	fn malformed_json_is_a_parse_error() {
		let err = Catalog::from_json("{\"id\": 1}").unwrap_err();
		assert!(matches!(err, CatalogError::Parse(_)));
	}

	#[test]
	fn load_reads_catalog_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("places.json");
		std::fs::write(
			&path,
			r#"[{"id":"p1","title":"Forest","image":{"src":"f.jpg","alt":"trees"},"lat":1.5,"lon":2.5}]"#,
		)
		.unwrap();

		let catalog = Catalog::load(&path).unwrap();
		assert_eq!(catalog.len(), 1);
		assert!(catalog.find("p1").and_then(Place::coordinates).is_some());
	}

	#[test]
	fn missing_file_is_an_io_error() {
		let dir = tempfile::tempdir().unwrap();
		let err = Catalog::load(&dir.path().join("missing.json")).unwrap_err();
		assert!(matches!(err, CatalogError::Io { .. }));
	}
}
