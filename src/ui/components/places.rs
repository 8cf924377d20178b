use place_picker_core::{Coordinates, DistanceMetric, Place};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Cell, HighlightSpacing, Paragraph, Row, Table, TableState, Wrap};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::ui::style::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;
const HEADER_HEIGHT: u16 = 1;

/// Everything needed to draw one of the two place lists.
pub struct PlacesPane<'a> {
	pub title: &'a str,
	pub fallback: &'a str,
	pub places: &'a [Place],
	/// Position the distance column is measured from, once known.
	pub origin: Option<Coordinates>,
	pub metric: DistanceMetric,
	pub focused: bool,
	/// Label and spinner shown in the title while a position is pending.
	pub pending: Option<(&'a str, &'a ThrobberState)>,
}

/// Render a bordered list of places, or its fallback text when empty.
pub fn render_places(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	pane: PlacesPane<'_>,
	theme: &Theme,
) {
	let mut title = Line::from(Span::styled(format!(" {} ", pane.title), theme.accent_style()));
	if let Some((label, throbber_state)) = pane.pending {
		let muted = theme.empty_style();
		let spinner = Throbber::default().style(muted).throbber_style(muted);
		title.spans.push(spinner.to_symbol_span(throbber_state));
		title.spans.push(Span::styled(format!("{label} "), muted));
	}

	let block = Block::bordered()
		.title(title)
		.border_style(theme.border_style(pane.focused));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if pane.places.is_empty() {
		let empty = Paragraph::new(pane.fallback)
			.alignment(Alignment::Center)
			.style(theme.empty_style())
			.wrap(Wrap { trim: true });
		frame.render_widget(empty, inner);
		return;
	}

	let mut headers = vec!["Place", "Image"];
	let mut widths = vec![Constraint::Fill(2), Constraint::Fill(3)];
	if pane.origin.is_some() {
		headers.push("Distance");
		widths.push(Constraint::Length(10));
	}

	let rows = pane.places.iter().map(|place| {
		let mut cells = vec![
			Cell::from(place.title.as_str()),
			Cell::from(place.image.alt.as_str()).style(theme.empty_style()),
		];
		if let Some(origin) = pane.origin {
			cells.push(Cell::from(format_distance(place, origin, pane.metric)));
		}
		Row::new(cells)
	});

	let header = Row::new(headers.into_iter().map(Cell::from).collect::<Vec<_>>())
		.style(theme.header_style())
		.height(HEADER_HEIGHT)
		.bottom_margin(1);

	let mut table = Table::new(rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always);
	if pane.focused {
		table = table
			.row_highlight_style(theme.row_highlight_style())
			.highlight_symbol(HIGHLIGHT_SYMBOL);
	}
	frame.render_stateful_widget(table, inner, table_state);

	render_header_separator(frame, inner, theme);
}

fn format_distance(place: &Place, origin: Coordinates, metric: DistanceMetric) -> String {
	let Some(coords) = place.coordinates() else {
		return "n/a".to_string();
	};
	let distance = metric.between(origin, coords);
	if !distance.is_finite() {
		return "n/a".to_string();
	}
	match metric {
		DistanceMetric::Planar => format!("{distance:.1}°"),
		DistanceMetric::Haversine => format!("{distance:.0} km"),
	}
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if HEADER_HEIGHT >= area.height {
		return;
	}
	let width = area.width as usize;
	if width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: area.y + HEADER_HEIGHT,
		width: area.width,
		height: 1,
	};
	let header_bg = theme.header_bg();
	let base_style = Style::new().bg(header_bg);
	if width <= 2 {
		let para = Paragraph::new(" ".repeat(width)).style(base_style);
		frame.render_widget(para, sep_rect);
		return;
	}

	let middle = "─".repeat(width - 2);
	let middle_style = Style::new().bg(header_bg).fg(theme.header_fg());
	let spans = vec![
		Span::styled(" ", base_style),
		Span::styled(middle, middle_style),
		Span::styled(" ", base_style),
	];
	frame.render_widget(Paragraph::new(Text::from(Line::from(spans))), sep_rect);
}

#[cfg(test)]
mod tests {
	use place_picker_core::PlaceImage;

	use super::*;

	fn place() -> Place {
		Place::new(
			"p1",
			"Forest",
			PlaceImage {
				src: String::new(),
				alt: String::new(),
			},
		)
	}

	#[test]
	fn distance_labels_follow_metric() {
		let origin = Coordinates::new(0.0, 0.0);
		let located = place().at(3.0, 4.0);
		assert_eq!(format_distance(&located, origin, DistanceMetric::Planar), "5.0°");
		assert!(format_distance(&located, origin, DistanceMetric::Haversine).ends_with(" km"));
		assert_eq!(format_distance(&place(), origin, DistanceMetric::Planar), "n/a");
	}
}
