use place_picker_core::{
	Catalog, Coordinates, DistanceMetric, FileStore, KeyValueStore, Modal, PICKED_PLACES_KEY,
	PickStore, Place, PlaceImage, RemovalFlow, sort_by_distance,
};

#[derive(Default)]
struct Dialog {
	visible: bool,
}

impl Modal for Dialog {
	fn open(&mut self) {
		self.visible = true;
	}

	fn close(&mut self) {
		self.visible = false;
	}
}

fn catalog() -> Catalog {
	let image = |name: &str| PlaceImage {
		src: format!("{name}.jpg"),
		alt: name.to_string(),
	};
	Catalog::from_places(vec![
		Place::new("p1", "Forest Waterfall", image("forest")).at(44.5588, -80.344),
		Place::new("p2", "Sahara Desert Dunes", image("desert")).at(25.0, 0.0),
		Place::new("p3", "Majestic Mountains", image("mountain")).at(46.5197, 7.8725),
	])
	.unwrap()
}

#[test]
fn picks_survive_a_restart() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("storage.json");

	{
		let mut picks = PickStore::load(catalog(), FileStore::open(&path));
		picks.select("p1");
		picks.select("p3");
		picks.select("p1");
	}

	let picks = PickStore::load(catalog(), FileStore::open(&path));
	assert_eq!(picks.ids(), ["p3", "p1"]);
	assert_eq!(
		picks.storage().get(PICKED_PLACES_KEY).unwrap().as_deref(),
		Some(r#"["p3","p1"]"#)
	);
}

#[test]
fn confirmed_removal_survives_a_restart() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("storage.json");

	{
		let mut picks = PickStore::load(catalog(), FileStore::open(&path));
		picks.select("p2");
		picks.select("p1");

		let mut flow = RemovalFlow::new(Dialog::default());
		flow.start_removal("p2");
		assert!(flow.modal().visible);
		flow.confirm(&mut picks);
		assert!(!flow.modal().visible);
	}

	let picks = PickStore::load(catalog(), FileStore::open(&path));
	assert_eq!(picks.ids(), ["p1"]);
}

#[test]
fn catalog_order_is_untouched_by_sorting() {
	let catalog = catalog();
	let zurich = Coordinates::new(47.3769, 8.5417);

	let sorted = sort_by_distance(catalog.places(), zurich, DistanceMetric::Haversine);
	let sorted_ids: Vec<_> = sorted.iter().map(|place| place.id.as_str()).collect();
	assert_eq!(sorted_ids, ["p3", "p2", "p1"]);

	let catalog_ids: Vec<_> = catalog.iter().map(|place| place.id.as_str()).collect();
	assert_eq!(catalog_ids, ["p1", "p2", "p3"]);
}
