use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
	text::{Line, Span},
	widgets::Paragraph,
};

use super::App;
use super::components::{DialogText, PlacesPane, render_dialog, render_places};
use super::state::Focus;

const KEY_HINTS: &str = "Tab switch list   Enter pick / remove   q quit";

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(2),
				Constraint::Percentage(40),
				Constraint::Min(4),
				Constraint::Length(1),
			])
			.split(area);

		self.render_header(frame, layout[0]);
		self.render_picked(frame, layout[1]);
		self.render_available(frame, layout[2]);

		let hints = Paragraph::new(KEY_HINTS)
			.alignment(Alignment::Center)
			.style(self.theme.empty_style());
		frame.render_widget(hints, layout[3]);

		let text = DialogText {
			title: &self.ui.dialog_title,
			message: &self.ui.dialog_message,
			target: self.pending_title(),
		};
		render_dialog(frame, area, self.removal.modal(), text, &self.theme);
	}

	fn render_header(&self, frame: &mut Frame, area: Rect) {
		let lines = vec![
			Line::from(Span::styled(self.ui.heading.as_str(), self.theme.accent_style())),
			Line::from(Span::styled(self.ui.tagline.as_str(), self.theme.empty_style())),
		];
		frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
	}

	fn render_picked(&mut self, frame: &mut Frame, area: Rect) {
		let pane = PlacesPane {
			title: &self.ui.picked.title,
			fallback: &self.ui.picked.fallback,
			places: self.picks.picked(),
			origin: None,
			metric: self.metric,
			focused: self.focus == Focus::Picked,
			pending: None,
		};
		render_places(frame, area, &mut self.picked_state, pane, &self.theme);
	}

	fn render_available(&mut self, frame: &mut Frame, area: Rect) {
		let pending = self
			.is_locating()
			.then_some((self.ui.sorting_label.as_str(), &self.throbber_state));
		let pane = PlacesPane {
			title: &self.ui.available.title,
			fallback: &self.ui.available.fallback,
			places: &self.available,
			origin: self.origin,
			metric: self.metric,
			focused: self.focus == Focus::Available,
			pending,
		};
		render_places(frame, area, &mut self.available_state, pane, &self.theme);
	}
}
