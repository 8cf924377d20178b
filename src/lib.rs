//! Library side of the `place-picker` terminal application.
//!
//! The domain types live in `place-picker-core` and are re-exported here so
//! embedders can build an [`App`](ui::App) without depending on both crates.

pub mod app_dirs;
pub mod catalog;
pub mod geolocation;
pub mod logging;
pub mod ui;

pub use place_picker_core::{
	Catalog, Coordinates, DistanceMetric, FileStore, KeyValueStore, MemoryStore, Modal,
	PICKED_PLACES_KEY, PickStore, Place, PlaceImage, RemovalFlow, RemovalState, sort_by_distance,
};
pub use ui::{App, Focus, PaneUiConfig, PickerOutcome, UiConfig, run};
