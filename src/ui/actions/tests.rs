use place_picker_core::{Catalog, KeyValueStore, MemoryStore, PICKED_PLACES_KEY, PickStore, Place, PlaceImage};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::App;
use crate::ui::components::DialogButton;
use crate::ui::state::Focus;

fn catalog() -> Catalog {
	let image = PlaceImage {
		src: String::new(),
		alt: String::new(),
	};
	Catalog::from_places(vec![
		Place::new("x", "Xanadu", image.clone()),
		Place::new("y", "Yosemite", image.clone()),
		Place::new("z", "Zanzibar", image),
	])
	.unwrap()
}

fn app_with(stored: &str) -> App {
	let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new().with_value(PICKED_PLACES_KEY, stored));
	App::new(PickStore::load(catalog(), store))
}

fn press(app: &mut App, code: KeyCode) -> bool {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).is_some()
}

fn picked_ids(app: &App) -> Vec<&str> {
	app.picked().iter().map(|place| place.id.as_str()).collect()
}

#[test]
fn enter_on_available_place_picks_it() {
	let mut app = app_with("[]");
	press(&mut app, KeyCode::Down);
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Up);
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Enter);

	assert_eq!(picked_ids(&app), ["x", "y"]);
	assert_eq!(app.picks.persisted_ids(), ["x", "y"]);
}

#[test]
fn removal_requires_confirmation() {
	let mut app = app_with(r#"["x"]"#);
	press(&mut app, KeyCode::Tab);
	assert_eq!(app.focus(), Focus::Picked);

	press(&mut app, KeyCode::Enter);
	assert!(app.removal.modal().is_visible());
	assert_eq!(app.removal.pending(), Some("x"));
	assert_eq!(app.pending_title(), Some("Xanadu"));

	press(&mut app, KeyCode::Char('n'));
	assert!(!app.removal.modal().is_visible());
	assert_eq!(picked_ids(&app), ["x"]);

	press(&mut app, KeyCode::Delete);
	press(&mut app, KeyCode::Char('y'));
	assert!(picked_ids(&app).is_empty());
	assert!(app.picks.persisted_ids().is_empty());
	assert_eq!(app.picked_state.selected(), None);
}

#[test]
fn enter_in_dialog_follows_button_focus() {
	let mut app = app_with(r#"["y","x"]"#);
	press(&mut app, KeyCode::Tab);
	press(&mut app, KeyCode::Enter);
	assert_eq!(app.removal.modal().focused(), DialogButton::No);

	press(&mut app, KeyCode::Enter);
	assert_eq!(picked_ids(&app), ["y", "x"]);

	press(&mut app, KeyCode::Down);
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Right);
	assert_eq!(app.removal.modal().focused(), DialogButton::Yes);
	press(&mut app, KeyCode::Enter);
	assert_eq!(picked_ids(&app), ["y"]);
}

#[test]
fn dialog_swallows_navigation_and_quit_keys() {
	let mut app = app_with(r#"["x"]"#);
	press(&mut app, KeyCode::Tab);
	press(&mut app, KeyCode::Enter);

	assert!(!press(&mut app, KeyCode::Char('q')));
	press(&mut app, KeyCode::Esc);
	assert!(!app.removal.is_confirming());
	assert_eq!(picked_ids(&app), ["x"]);
}

#[test]
fn delete_key_is_ignored_on_available_list() {
	let mut app = app_with("[]");
	press(&mut app, KeyCode::Delete);
	assert!(!app.removal.is_confirming());
}

#[test]
fn quitting_returns_picked_places() {
	let mut app = app_with(r#"["z"]"#);
	let outcome = app
		.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE))
		.unwrap();
	assert_eq!(outcome.picked.len(), 1);
	assert_eq!(outcome.picked[0].id, "z");

	let interrupted = app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
	assert!(interrupted.is_some());
}

#[test]
fn selection_stops_at_list_edges() {
	let mut app = app_with("[]");
	press(&mut app, KeyCode::Up);
	assert_eq!(app.selected_id(), Some("x"));
	for _ in 0..5 {
		press(&mut app, KeyCode::Char('j'));
	}
	assert_eq!(app.selected_id(), Some("z"));
}
