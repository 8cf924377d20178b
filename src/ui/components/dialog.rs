use place_picker_core::Modal;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::ui::style::Theme;

const HORIZONTAL_PADDING: u16 = 6;
const BUTTON_GAP: &str = "   ";

/// The two choices offered by the confirmation dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogButton {
	#[default]
	No,
	Yes,
}

impl DialogButton {
	#[must_use]
	pub fn toggle(self) -> Self {
		match self {
			Self::No => Self::Yes,
			Self::Yes => Self::No,
		}
	}

	fn label(self) -> &'static str {
		match self {
			Self::No => "[ No ]",
			Self::Yes => "[ Yes ]",
		}
	}
}

/// Terminal implementation of [`Modal`]: a centred overlay with No/Yes buttons.
///
/// Opening always focuses "No" so a stray Enter never removes anything.
#[derive(Debug, Default)]
pub struct ConfirmDialog {
	visible: bool,
	focused: DialogButton,
}

impl ConfirmDialog {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	#[must_use]
	pub fn focused(&self) -> DialogButton {
		self.focused
	}

	pub fn toggle_focus(&mut self) {
		self.focused = self.focused.toggle();
	}
}

impl Modal for ConfirmDialog {
	fn open(&mut self) {
		self.visible = true;
		self.focused = DialogButton::No;
	}

	fn close(&mut self) {
		self.visible = false;
	}
}

/// Strings shown inside the dialog.
pub struct DialogText<'a> {
	pub title: &'a str,
	pub message: &'a str,
	/// Title of the place awaiting removal.
	pub target: Option<&'a str>,
}

/// Draw the dialog centred in `area` when it is visible.
pub fn render_dialog(frame: &mut Frame, area: Rect, dialog: &ConfirmDialog, text: DialogText<'_>, theme: &Theme) {
	if !dialog.is_visible() {
		return;
	}

	let buttons = format!("{}{BUTTON_GAP}{}", DialogButton::No.label(), DialogButton::Yes.label());
	let content_width = [
		text.title.width(),
		text.message.width(),
		text.target.map_or(0, UnicodeWidthStr::width),
		buttons.width(),
	]
	.into_iter()
	.max()
	.unwrap_or(0);

	let mut lines = vec![Line::from(text.message)];
	if let Some(target) = text.target {
		lines.push(Line::from(Span::styled(target, theme.accent_style())));
	}
	lines.push(Line::default());
	lines.push(button_line(dialog.focused(), theme));

	let width = u16::try_from(content_width)
		.unwrap_or(u16::MAX)
		.saturating_add(HORIZONTAL_PADDING);
	let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
	let popup = centered(area, width, height);

	let block = Block::bordered()
		.title(Line::from(Span::styled(format!(" {} ", text.title), theme.accent_style())))
		.border_style(theme.border_style(true));
	let body = Paragraph::new(lines).alignment(Alignment::Center).block(block);

	frame.render_widget(Clear, popup);
	frame.render_widget(body, popup);
}

fn button_line(focused: DialogButton, theme: &Theme) -> Line<'static> {
	let style_for = |button: DialogButton| {
		if button == focused {
			theme.row_highlight_style()
		} else {
			theme.empty_style()
		}
	};
	Line::from(vec![
		Span::styled(DialogButton::No.label(), style_for(DialogButton::No)),
		Span::raw(BUTTON_GAP),
		Span::styled(DialogButton::Yes.label(), style_for(DialogButton::Yes)),
	])
}

/// A `width` x `height` rectangle centred in `area`, clipped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
	let width = width.min(area.width);
	let height = height.min(area.height);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 2,
		width,
		height,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opening_resets_focus_to_no() {
		let mut dialog = ConfirmDialog::new();
		dialog.open();
		dialog.toggle_focus();
		assert_eq!(dialog.focused(), DialogButton::Yes);

		dialog.close();
		assert!(!dialog.is_visible());
		dialog.open();
		assert!(dialog.is_visible());
		assert_eq!(dialog.focused(), DialogButton::No);
	}

	#[test]
	fn centred_rect_is_clipped_to_area() {
		let area = Rect::new(0, 0, 20, 10);
		assert_eq!(centered(area, 10, 4), Rect::new(5, 3, 10, 4));
		assert_eq!(centered(area, 40, 40), area);
	}
}
