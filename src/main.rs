mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use place_picker::{PickerOutcome, logging, ui::style};
use settings::ResolvedConfig;
use workflow::PickerWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;
	let log_file = logging::initialize(&resolved.data_dir, &resolved.log_level);

	if cli.print_config {
		resolved.print_summary(log_file.as_deref());
	}

	if cli.list_picked {
		let workflow = PickerWorkflow::from_config(resolved)?;
		return print_outcome(cli.output, &workflow.snapshot());
	}

	run_picker(cli.output, resolved)
}

/// Execute the picker and print the final picks in the chosen format.
fn run_picker(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = PickerWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;
	print_outcome(format, &outcome)
}

fn print_outcome(format: OutputFormat, outcome: &PickerOutcome) -> Result<()> {
	match format {
		OutputFormat::Plain => print_plain(outcome),
		OutputFormat::Json => print_json(outcome)?,
	}
	Ok(())
}
