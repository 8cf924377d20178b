use clap::{CommandFactory, FromArgMatches, Parser};
use place_picker::Coordinates;

use super::options::MetricArg;
use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["place-picker"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert_eq!(parsed.origin, None);
	assert!(!parsed.ephemeral);
}

#[test]
fn origin_accepts_negative_coordinates() {
	let parsed = CliArgs::try_parse_from(["place-picker", "--origin", "-33.86,151.21", "-m", "haversine"])
		.expect("parses");
	assert_eq!(parsed.origin, Some(Coordinates::new(-33.86, 151.21)));
	assert_eq!(parsed.metric, Some(MetricArg::Haversine));
}

#[test]
fn origin_out_of_range_is_rejected() {
	assert!(CliArgs::try_parse_from(["place-picker", "--origin", "100,0"]).is_err());
}
