use anyhow::Result;
use place_picker::PickerOutcome;
use serde_json::json;

/// Format the picked places as one `id<TAB>title` line each.
pub(crate) fn format_plain(outcome: &PickerOutcome) -> String {
	if outcome.picked.is_empty() {
		return "No places picked".to_string();
	}
	outcome
		.picked
		.iter()
		.map(|place| format!("{}\t{}", place.id, place.title))
		.collect::<Vec<_>>()
		.join("\n")
}

/// Print a plain-text representation of the picked places.
pub(crate) fn print_plain(outcome: &PickerOutcome) {
	println!("{}", format_plain(outcome));
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &PickerOutcome) -> Result<String> {
	let payload = json!({
		"count": outcome.picked.len(),
		"picked": outcome.picked,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the picked places.
pub(crate) fn print_json(outcome: &PickerOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
