/// Labels for one of the two place lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneUiConfig {
	pub title: String,
	pub fallback: String,
}

impl PaneUiConfig {
	/// Construct a new [`PaneUiConfig`] with custom labels.
	#[must_use]
	pub fn new(title: impl Into<String>, fallback: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			fallback: fallback.into(),
		}
	}
}

/// Text used by the UI when rendering the header, lists and dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	pub heading: String,
	pub tagline: String,
	pub picked: PaneUiConfig,
	pub available: PaneUiConfig,
	pub sorting_label: String,
	pub dialog_title: String,
	pub dialog_message: String,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			heading: "PlacePicker".to_string(),
			tagline: "Create your personal collection of places you would like to visit or you have visited."
				.to_string(),
			picked: PaneUiConfig::new(
				"I'd like to visit ...",
				"Select the places you would like to visit below.",
			),
			available: PaneUiConfig::new("Available Places", "Sorting places by distance ..."),
			sorting_label: "Sorting places by distance ...".to_string(),
			dialog_title: "Are you sure?".to_string(),
			dialog_message: "Do you really want to remove this place?".to_string(),
		}
	}
}
