//! Domain core for `place-picker`.
//!
//! The crate owns everything that does not depend on a terminal: the place
//! catalog, the ordered set of picked places and its persisted projection, the
//! two-step removal flow and the distance ordering used for the available list.
//! Front ends drive these types from their event loop and provide the
//! [`KeyValueStore`] and [`Modal`] capabilities.

pub mod catalog;
pub mod distance;
pub mod error;
pub mod picks;
pub mod place;
pub mod removal;
pub mod storage;

pub use catalog::Catalog;
pub use distance::{DistanceMetric, sort_by_distance};
pub use error::{CatalogError, StorageError};
pub use picks::{PICKED_PLACES_KEY, PickStore};
pub use place::{Coordinates, Place, PlaceImage};
pub use removal::{Modal, RemovalFlow, RemovalState};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
