use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing the persistent key-value slot.
#[derive(Debug, Error)]
pub enum StorageError {
	/// The backing file could not be read or written.
	#[error("storage file {path} is not accessible: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The stored values could not be encoded.
	#[error("failed to encode storage contents: {0}")]
	Encode(#[from] serde_json::Error),
}

/// Errors raised while loading a place catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// The catalog file could not be read.
	#[error("failed to read catalog {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The catalog contents are not a JSON array of places.
	#[error("catalog is not a valid list of places: {0}")]
	Parse(#[from] serde_json::Error),

	/// Two entries share the same identifier.
	#[error("place id '{0}' appears more than once in the catalog")]
	DuplicateId(String),

	/// An entry has an empty identifier.
	#[error("catalog entry {index} has an empty id")]
	EmptyId { index: usize },
}
