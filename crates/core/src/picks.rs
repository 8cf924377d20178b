//! The ordered set of picked places and its persisted projection.

use serde_json::Value;

use crate::catalog::Catalog;
use crate::place::Place;
use crate::storage::KeyValueStore;

/// Storage key holding the JSON array of picked identifiers.
pub const PICKED_PLACES_KEY: &str = "pickedPlaces";

/// Picked places, most recently picked first.
///
/// The in-memory list is the single source of truth. After every
/// [`select`](Self::select) or [`remove`](Self::remove) the storage slot is
/// rewritten with exactly the identifiers of that list, in the same order.
/// Storage failures are logged and otherwise ignored.
#[derive(Debug)]
pub struct PickStore<S> {
	catalog: Catalog,
	picked: Vec<Place>,
	storage: S,
	key: String,
}

impl<S: KeyValueStore> PickStore<S> {
	/// Restore the picked set from the default storage key.
	pub fn load(catalog: Catalog, storage: S) -> Self {
		Self::load_with_key(catalog, storage, PICKED_PLACES_KEY)
	}

	/// Restore the picked set from `key`.
	///
	/// Identifiers are resolved in stored order. Identifiers missing from the
	/// catalog are dropped and repeated identifiers keep their first position.
	pub fn load_with_key(catalog: Catalog, storage: S, key: impl Into<String>) -> Self {
		let key = key.into();
		let raw = storage.get(&key).unwrap_or_else(|err| {
			tracing::warn!(%key, error = %err, "failed to read picked places");
			None
		});

		let mut picked: Vec<Place> = Vec::new();
		for id in decode_identifiers(raw.as_deref()) {
			if picked.iter().any(|place| place.id == id) {
				continue;
			}
			match catalog.find(&id) {
				Some(place) => picked.push(place.clone()),
				None => tracing::debug!(%id, "dropping stored id missing from catalog"),
			}
		}
		tracing::info!(count = picked.len(), "restored picked places");

		Self {
			catalog,
			picked,
			storage,
			key,
		}
	}

	/// Add the place with `id` to the front of the list.
	///
	/// Already-picked and unknown identifiers leave the in-memory list
	/// untouched. Storage is rewritten from the list either way, so stale
	/// identifiers left over from an earlier session are dropped on disk.
	/// Returns whether the list changed.
	pub fn select(&mut self, id: &str) -> bool {
		let changed = if self.is_picked(id) {
			false
		} else if let Some(place) = self.catalog.find(id) {
			self.picked.insert(0, place.clone());
			tracing::info!(%id, "picked place");
			true
		} else {
			tracing::debug!(%id, "ignoring selection of unknown place");
			false
		};
		self.persist();
		changed
	}

	/// Drop the place with `id` from the list. Returns whether it was present.
	///
	/// Like [`select`](Self::select), storage is rewritten even when `id` was
	/// not picked.
	pub fn remove(&mut self, id: &str) -> bool {
		let before = self.picked.len();
		self.picked.retain(|place| place.id != id);
		let changed = self.picked.len() != before;
		if changed {
			tracing::info!(%id, "removed picked place");
		}
		self.persist();
		changed
	}

	#[must_use]
	pub fn picked(&self) -> &[Place] {
		&self.picked
	}

	#[must_use]
	pub fn ids(&self) -> Vec<&str> {
		self.picked.iter().map(|place| place.id.as_str()).collect()
	}

	#[must_use]
	pub fn is_picked(&self, id: &str) -> bool {
		self.picked.iter().any(|place| place.id == id)
	}

	#[must_use]
	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	#[must_use]
	pub fn storage(&self) -> &S {
		&self.storage
	}

	/// Decode the identifiers currently held in storage.
	#[must_use]
	pub fn persisted_ids(&self) -> Vec<String> {
		let raw = self.storage.get(&self.key).ok().flatten();
		decode_identifiers(raw.as_deref())
	}

	fn persist(&mut self) {
		let encoded = match serde_json::to_string(&self.ids()) {
			Ok(encoded) => encoded,
			Err(err) => {
				tracing::warn!(error = %err, "failed to encode picked places");
				return;
			}
		};
		if let Err(err) = self.storage.set(&self.key, &encoded) {
			tracing::warn!(key = %self.key, error = %err, "failed to persist picked places");
		}
	}
}

/// Parse a stored JSON array of identifiers.
///
/// Absent or malformed values decode to an empty list; non-string entries are
/// skipped.
#[must_use]
pub fn decode_identifiers(raw: Option<&str>) -> Vec<String> {
	let Some(raw) = raw else {
		return Vec::new();
	};
	match serde_json::from_str::<Vec<Value>>(raw) {
		Ok(values) => values
			.into_iter()
			.filter_map(|value| match value {
				Value::String(id) => Some(id),
				_ => None,
			})
			.collect(),
		Err(err) => {
			tracing::warn!(error = %err, "stored picked places are malformed, ignoring");
			Vec::new()
		}
	}
}
