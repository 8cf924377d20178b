use ratatui::style::{Color, Modifier, Style};

use super::types::{Theme, ThemeDefinition};

const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	accent: Style::new().fg(Color::LightCyan).add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::DarkGray),
	border: Style::new().fg(Color::Rgb(71, 85, 105)),
	focused_border: Style::new().fg(Color::Rgb(250, 204, 21)),
};

const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(191, 219, 254))
		.fg(Color::Rgb(30, 64, 175)),
	accent: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::Gray),
	border: Style::new().fg(Color::Rgb(148, 163, 184)),
	focused_border: Style::new().fg(Color::Rgb(37, 99, 235)),
};

const SOLARIZED: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(147, 161, 161))
		.bg(Color::Rgb(7, 54, 66)),
	row_highlight: Style::new()
		.bg(Color::Rgb(7, 54, 66))
		.fg(Color::Rgb(181, 137, 0)),
	accent: Style::new()
		.fg(Color::Rgb(42, 161, 152))
		.add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::Rgb(88, 110, 117)),
	border: Style::new().fg(Color::Rgb(88, 110, 117)),
	focused_border: Style::new().fg(Color::Rgb(203, 75, 22)),
};

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition::new("slate", SLATE).with_aliases(&["dark", "default"]),
	ThemeDefinition::new("light", LIGHT),
	ThemeDefinition::new("solarized", SOLARIZED).with_aliases(&["solarized-dark"]),
];
