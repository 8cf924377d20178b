//! Widgets composed by [`App::draw`](crate::ui::App::draw).

mod dialog;
mod places;

pub use dialog::{ConfirmDialog, DialogButton, DialogText, render_dialog};
pub use places::{PlacesPane, render_places};
