//! Persistent key-value slots, the terminal counterpart of browser local
//! storage.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// A string-to-string store that outlives the process.
pub trait KeyValueStore {
	/// Read the value stored under `key`.
	fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

	/// Replace the value stored under `key`.
	fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
	fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
		(**self).get(key)
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
		(**self).set(key, value)
	}
}

/// Volatile store used by tests and `--ephemeral` sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	values: BTreeMap<String, String>,
}

impl MemoryStore {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Seed the store with an initial value.
	#[must_use]
	pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.values.insert(key.into(), value.into());
		self
	}
}

impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
		Ok(self.values.get(key).cloned())
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
		self.values.insert(key.to_string(), value.to_string());
		Ok(())
	}
}

/// Store backed by a single JSON object file.
///
/// The file is read once when opened. Every `set` rewrites the whole file via a
/// sibling temporary file and a rename, so readers never see a partial write.
#[derive(Debug)]
pub struct FileStore {
	path: PathBuf,
	values: BTreeMap<String, String>,
}

impl FileStore {
	/// Open the store at `path`. A missing, unreadable or malformed file is
	/// treated as an empty store.
	#[must_use]
	pub fn open(path: impl Into<PathBuf>) -> Self {
		let path = path.into();
		let values = read_values(&path);
		Self { path, values }
	}

	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn flush(&self) -> Result<(), StorageError> {
		let io_error = |source: io::Error| StorageError::Io {
			path: self.path.clone(),
			source,
		};

		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent).map_err(io_error)?;
		}

		let encoded = serde_json::to_string_pretty(&self.values)?;
		let staging = self.path.with_extension("json.tmp");
		fs::write(&staging, encoded).map_err(io_error)?;
		fs::rename(&staging, &self.path).map_err(io_error)
	}
}

impl KeyValueStore for FileStore {
	fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
		Ok(self.values.get(key).cloned())
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
		self.values.insert(key.to_string(), value.to_string());
		self.flush()
	}
}

fn read_values(path: &Path) -> BTreeMap<String, String> {
	let contents = match fs::read_to_string(path) {
		Ok(contents) => contents,
		Err(err) if err.kind() == io::ErrorKind::NotFound => return BTreeMap::new(),
		Err(err) => {
			tracing::warn!(path = %path.display(), error = %err, "storage file unreadable, starting empty");
			return BTreeMap::new();
		}
	};

	match serde_json::from_str(&contents) {
		Ok(values) => values,
		Err(err) => {
			tracing::warn!(path = %path.display(), error = %err, "storage file malformed, starting empty");
			BTreeMap::new()
		}
	}
}
