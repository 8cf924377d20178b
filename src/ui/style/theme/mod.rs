mod builtins;
mod types;

pub use types::{Theme, ThemeDefinition};

use builtins::BUILT_IN_DEFINITIONS;

/// Theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
	BUILT_IN_DEFINITIONS[0].theme
}

/// Look up a theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let needle = name.trim().to_ascii_lowercase();
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| definition.matches(&needle))
		.map(|definition| definition.theme)
}

/// Names of every bundled theme, in display order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
