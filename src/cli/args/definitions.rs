use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};
use place_picker::Coordinates;
use place_picker::geolocation::parse_origin;

use super::options::{LevelArg, MetricArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `place-picker` binary.
#[derive(Parser, Debug)]
#[command(
	name = "place-picker",
	version,
	long_version = long_version(),
	about = "Pick the places you would like to visit",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "PLACE_PICKER_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "FILE",
		help = "Load the place catalog from a JSON file (default: bundled catalog)"
	)]
	pub(crate) catalog: Option<PathBuf>,
	#[arg(
		short = 'o',
		long,
		value_name = "LAT,LON",
		value_parser = parse_origin,
		allow_hyphen_values = true,
		help = "Current position used to sort available places (default: unsorted)"
	)]
	pub(crate) origin: Option<Coordinates>,
	#[arg(
		short = 'm',
		long,
		value_enum,
		help = "Distance metric for sorting (default: planar)"
	)]
	pub(crate) metric: Option<MetricArg>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'd',
		long = "data-dir",
		value_name = "DIR",
		help = "Directory holding the picked places and the log (default: platform data directory)"
	)]
	pub(crate) data_dir: Option<PathBuf>,
	#[arg(
		short = 'e',
		long,
		help = "Keep picks in memory only for this session (default: disabled)"
	)]
	pub(crate) ephemeral: bool,
	#[arg(
		long = "log-level",
		value_enum,
		help = "Log verbosity written to the log file (default: info)"
	)]
	pub(crate) log_level: Option<LevelArg>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long = "list-picked",
		help = "Print the stored picks without starting the UI (default: disabled)"
	)]
	pub(crate) list_picked: bool,
	#[arg(
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the picked places on exit"
	)]
	pub(crate) output: OutputFormat,
}
