use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::components::DialogButton;
use super::state::{Focus, PickerOutcome};

impl App {
	/// React to a key press. Returns the outcome once the user quits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<PickerOutcome> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Some(self.outcome());
		}

		if self.removal.is_confirming() {
			self.handle_dialog_key(key);
			return None;
		}

		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => return Some(self.outcome()),
			KeyCode::Tab | KeyCode::BackTab => self.switch_focus(),
			KeyCode::Up | KeyCode::Char('k') => self.move_selection_up(),
			KeyCode::Down | KeyCode::Char('j') => self.move_selection_down(),
			KeyCode::Enter | KeyCode::Char(' ') => self.activate_selection(),
			KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('d') if self.focus == Focus::Picked => {
				self.start_removal_of_selection();
			}
			_ => {}
		}
		None
	}

	fn handle_dialog_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Char('y') | KeyCode::Char('Y') => self.confirm_removal(),
			KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.removal.cancel(),
			KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
				self.removal.modal_mut().toggle_focus();
			}
			KeyCode::Enter => match self.removal.modal().focused() {
				DialogButton::Yes => self.confirm_removal(),
				DialogButton::No => self.removal.cancel(),
			},
			_ => {}
		}
	}

	fn activate_selection(&mut self) {
		match self.focus {
			Focus::Available => {
				if let Some(id) = self.selected_id().map(str::to_owned) {
					self.picks.select(&id);
					self.ensure_selection();
				}
			}
			Focus::Picked => self.start_removal_of_selection(),
		}
	}

	fn start_removal_of_selection(&mut self) {
		if let Some(id) = self.selected_id().map(str::to_owned) {
			self.removal.start_removal(id);
		}
	}

	fn confirm_removal(&mut self) {
		self.removal.confirm(&mut self.picks);
		self.ensure_selection();
	}

	fn move_selection_up(&mut self) {
		let state = self.focused_state_mut();
		if let Some(selected) = state.selected()
			&& selected > 0
		{
			state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		let len = self.focused_len();
		let state = self.focused_state_mut();
		if let Some(selected) = state.selected()
			&& selected + 1 < len
		{
			state.select(Some(selected + 1));
		}
	}
}

#[cfg(test)]
mod tests;
