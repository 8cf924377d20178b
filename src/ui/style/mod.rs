//! Visual styling utilities.
//!
//! Themes are the colour schemes applied to the terminal UI.

pub mod theme;

pub use theme::{Theme, ThemeDefinition, by_name, default_theme, names};
