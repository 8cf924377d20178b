use std::sync::mpsc::{Receiver, TryRecvError};

use place_picker_core::{
	Coordinates, DistanceMetric, KeyValueStore, PickStore, Place, RemovalFlow, sort_by_distance,
};
use ratatui::widgets::TableState;
use serde::Serialize;
use throbber_widgets_tui::ThrobberState;

use super::components::ConfirmDialog;
use super::config::UiConfig;
pub use super::style::Theme;

/// Which list receives navigation keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
	Picked,
	#[default]
	Available,
}

impl Focus {
	fn toggle(self) -> Self {
		match self {
			Self::Picked => Self::Available,
			Self::Available => Self::Picked,
		}
	}
}

/// Result handed back to the caller when the UI exits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickerOutcome {
	pub picked: Vec<Place>,
}

/// Picked-place store as held by the UI.
pub type UiPickStore = PickStore<Box<dyn KeyValueStore>>;

pub struct App {
	pub(crate) picks: UiPickStore,
	pub(crate) available: Vec<Place>,
	pub(crate) removal: RemovalFlow<ConfirmDialog>,
	pub(crate) focus: Focus,
	pub(crate) picked_state: TableState,
	pub(crate) available_state: TableState,
	pub(crate) ui: UiConfig,
	pub theme: Theme,
	pub(crate) metric: DistanceMetric,
	pub(crate) origin: Option<Coordinates>,
	pub(crate) position_updates: Option<Receiver<Coordinates>>,
	pub(crate) throbber_state: ThrobberState,
}

impl App {
	/// Build the UI around a restored pick store. The available list starts in
	/// catalog order.
	pub fn new(picks: UiPickStore) -> Self {
		let available = picks.catalog().places().to_vec();
		let mut app = Self {
			picks,
			available,
			removal: RemovalFlow::new(ConfirmDialog::new()),
			focus: Focus::default(),
			picked_state: TableState::default(),
			available_state: TableState::default(),
			ui: UiConfig::default(),
			theme: Theme::default(),
			metric: DistanceMetric::default(),
			origin: None,
			position_updates: None,
			throbber_state: ThrobberState::default(),
		};
		app.ensure_selection();
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_ui_config(&mut self, ui: UiConfig) {
		self.ui = ui;
	}

	pub fn set_metric(&mut self, metric: DistanceMetric) {
		self.metric = metric;
	}

	/// Attach the channel a one-shot position request answers on.
	pub fn set_position_updates(&mut self, updates: Receiver<Coordinates>) {
		self.position_updates = Some(updates);
	}

	#[must_use]
	pub fn picked(&self) -> &[Place] {
		self.picks.picked()
	}

	#[must_use]
	pub fn available(&self) -> &[Place] {
		&self.available
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	#[must_use]
	pub fn outcome(&self) -> PickerOutcome {
		PickerOutcome {
			picked: self.picks.picked().to_vec(),
		}
	}

	/// Whether a position request is still outstanding.
	#[must_use]
	pub fn is_locating(&self) -> bool {
		self.origin.is_none() && self.position_updates.is_some()
	}

	/// Apply a position fix if one has arrived. The first fix wins.
	pub(crate) fn pump_position(&mut self) {
		let Some(updates) = &self.position_updates else {
			return;
		};
		match updates.try_recv() {
			Ok(coords) => {
				self.position_updates = None;
				self.apply_position(coords);
			}
			Err(TryRecvError::Empty) => {}
			Err(TryRecvError::Disconnected) => {
				tracing::debug!("position request finished without a fix");
				self.position_updates = None;
			}
		}
	}

	/// Re-order the available list by distance from `origin`.
	pub fn apply_position(&mut self, origin: Coordinates) {
		self.available = sort_by_distance(self.picks.catalog().places(), origin, self.metric);
		self.origin = Some(origin);
		tracing::info!(
			latitude = origin.latitude,
			longitude = origin.longitude,
			metric = self.metric.as_str(),
			"sorted available places by distance"
		);
		self.ensure_selection();
	}

	pub(crate) fn switch_focus(&mut self) {
		self.focus = self.focus.toggle();
		self.ensure_selection();
	}

	/// Identifier of the highlighted row in the focused list.
	pub(crate) fn selected_id(&self) -> Option<&str> {
		let (places, state) = match self.focus {
			Focus::Picked => (self.picks.picked(), &self.picked_state),
			Focus::Available => (self.available.as_slice(), &self.available_state),
		};
		places.get(state.selected()?).map(|place| place.id.as_str())
	}

	/// Title of the place awaiting removal, for the dialog body.
	pub(crate) fn pending_title(&self) -> Option<&str> {
		let id = self.removal.pending()?;
		self.picks
			.catalog()
			.find(id)
			.map(|place| place.title.as_str())
	}

	pub(crate) fn focused_len(&self) -> usize {
		match self.focus {
			Focus::Picked => self.picks.picked().len(),
			Focus::Available => self.available.len(),
		}
	}

	pub(crate) fn focused_state_mut(&mut self) -> &mut TableState {
		match self.focus {
			Focus::Picked => &mut self.picked_state,
			Focus::Available => &mut self.available_state,
		}
	}

	/// Keep both selections inside their lists.
	pub(crate) fn ensure_selection(&mut self) {
		clamp_selection(&mut self.picked_state, self.picks.picked().len());
		clamp_selection(&mut self.available_state, self.available.len());
	}
}

fn clamp_selection(state: &mut TableState, len: usize) {
	if len == 0 {
		state.select(None);
	} else if let Some(selected) = state.selected() {
		if selected >= len {
			state.select(Some(len - 1));
		}
	} else {
		state.select(Some(0));
	}
}
