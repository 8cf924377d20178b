use ratatui::style::{Color, Style};

/// Colours applied to the place lists, header and dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
	pub header: Style,
	pub row_highlight: Style,
	pub accent: Style,
	pub empty: Style,
	pub border: Style,
	pub focused_border: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn accent_style(&self) -> Style {
		self.accent
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn border_style(&self, focused: bool) -> Style {
		if focused {
			self.focused_border
		} else {
			self.border
		}
	}

	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn header_bg(&self) -> Color {
		self.header.bg.unwrap_or(Color::Reset)
	}
}

/// Definition for a built-in theme bundled with the application.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	/// Whether `needle` (already lowercased) names this theme.
	pub(super) fn matches(&self, needle: &str) -> bool {
		self.name == needle || self.aliases.contains(&needle)
	}
}
