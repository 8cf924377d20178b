//! Two-step removal of a picked place, gated by a confirmation dialog.

use crate::picks::PickStore;
use crate::storage::KeyValueStore;

/// An imperatively shown and hidden dialog surface.
pub trait Modal {
	/// Make the dialog visible and take over input.
	fn open(&mut self);

	/// Hide the dialog and release input.
	fn close(&mut self);
}

impl<M: Modal + ?Sized> Modal for &mut M {
	fn open(&mut self) {
		(**self).open();
	}

	fn close(&mut self) {
		(**self).close();
	}
}

/// Observable state of a [`RemovalFlow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalState<'a> {
	Idle,
	Confirming { target: &'a str },
}

/// Idle/confirming state machine in front of [`PickStore::remove`].
#[derive(Debug, Default)]
pub struct RemovalFlow<M> {
	modal: M,
	pending: Option<String>,
}

impl<M: Modal> RemovalFlow<M> {
	#[must_use]
	pub fn new(modal: M) -> Self {
		Self {
			modal,
			pending: None,
		}
	}

	/// Ask for confirmation before removing `id`.
	///
	/// Calling this while already confirming replaces the pending target.
	pub fn start_removal(&mut self, id: impl Into<String>) {
		let id = id.into();
		tracing::debug!(%id, "confirming removal");
		self.pending = Some(id);
		self.modal.open();
	}

	/// Dismiss the dialog without touching the picked set.
	pub fn cancel(&mut self) {
		if self.pending.take().is_some() {
			self.modal.close();
		}
	}

	/// Remove the pending target from `picks` and dismiss the dialog.
	///
	/// Returns the identifier that was resolved, or `None` when idle.
	pub fn confirm<S: KeyValueStore>(&mut self, picks: &mut PickStore<S>) -> Option<String> {
		let target = self.pending.take()?;
		picks.remove(&target);
		self.modal.close();
		Some(target)
	}

	#[must_use]
	pub fn state(&self) -> RemovalState<'_> {
		match &self.pending {
			Some(target) => RemovalState::Confirming { target },
			None => RemovalState::Idle,
		}
	}

	#[must_use]
	pub fn is_confirming(&self) -> bool {
		self.pending.is_some()
	}

	#[must_use]
	pub fn pending(&self) -> Option<&str> {
		self.pending.as_deref()
	}

	#[must_use]
	pub fn modal(&self) -> &M {
		&self.modal
	}

	pub fn modal_mut(&mut self) -> &mut M {
		&mut self.modal
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::Catalog;
	use crate::picks::PICKED_PLACES_KEY;
	use crate::place::{Place, PlaceImage};
	use crate::storage::MemoryStore;

	#[derive(Debug, Default)]
	struct RecordingModal {
		visible: bool,
		calls: Vec<&'static str>,
	}

	impl Modal for RecordingModal {
		fn open(&mut self) {
			self.visible = true;
			self.calls.push("open");
		}

		fn close(&mut self) {
			self.visible = false;
			self.calls.push("close");
		}
	}

	fn picks_with(ids: &str) -> PickStore<MemoryStore> {
		let image = PlaceImage {
			src: String::new(),
			alt: String::new(),
		};
		let catalog = Catalog::from_places(vec![
			Place::new("x", "X", image.clone()),
			Place::new("y", "Y", image),
		])
		.unwrap();
		PickStore::load(catalog, MemoryStore::new().with_value(PICKED_PLACES_KEY, ids))
	}

	#[test]
	fn cancel_leaves_picks_untouched() {
		let mut picks = picks_with(r#"["x"]"#);
		let mut flow = RemovalFlow::new(RecordingModal::default());

		flow.start_removal("x");
		assert_eq!(flow.state(), RemovalState::Confirming { target: "x" });
		assert!(flow.modal().visible);

		flow.cancel();
		assert_eq!(flow.state(), RemovalState::Idle);
		assert!(!flow.modal().visible);
		assert_eq!(picks.ids(), ["x"]);
		assert_eq!(flow.confirm(&mut picks), None);
		assert_eq!(picks.ids(), ["x"]);
	}

	#[test]
	fn confirm_removes_pending_target() {
		let mut picks = picks_with(r#"["y","x"]"#);
		let mut flow = RemovalFlow::new(RecordingModal::default());

		flow.start_removal("x");
		assert_eq!(flow.confirm(&mut picks).as_deref(), Some("x"));

		assert_eq!(picks.ids(), ["y"]);
		assert_eq!(picks.persisted_ids(), ["y"]);
		assert!(!flow.is_confirming());
		assert_eq!(flow.modal().calls, ["open", "close"]);
	}

	#[test]
	fn second_start_overwrites_target() {
		let mut picks = picks_with(r#"["y","x"]"#);
		let mut flow = RemovalFlow::new(RecordingModal::default());

		flow.start_removal("x");
		flow.start_removal("y");
		assert_eq!(flow.pending(), Some("y"));

		flow.confirm(&mut picks);
		assert_eq!(picks.ids(), ["x"]);
	}

	#[test]
	fn idle_cancel_does_not_touch_modal() {
		let mut flow = RemovalFlow::new(RecordingModal::default());
		flow.cancel();
		assert!(flow.modal().calls.is_empty());
	}

	#[test]
	fn borrowed_modal_is_driven_through_reference() {
		let mut modal = RecordingModal::default();
		let mut picks = picks_with(r#"["x"]"#);
		{
			let mut flow = RemovalFlow::new(&mut modal);
			flow.start_removal("x");
			flow.confirm(&mut picks);
		}
		assert_eq!(modal.calls, ["open", "close"]);
		assert!(picks.picked().is_empty());
	}
}
