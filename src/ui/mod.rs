//! Interactive terminal UI for `place-picker`.
//!
//! [`App`] owns the pick store, the removal flow and both list selections. The
//! remaining submodules implement the event loop, key handling, rendering and
//! the widgets/style definitions used to draw them.

mod actions;
pub mod components;
mod config;
mod render;
mod runtime;
mod state;
pub mod style;

pub use config::{PaneUiConfig, UiConfig};
pub use runtime::run;
pub use state::{App, Focus, PickerOutcome, UiPickStore};
