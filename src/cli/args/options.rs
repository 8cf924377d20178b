use clap::ValueEnum;
use place_picker::DistanceMetric;

/// Distance metrics accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum MetricArg {
	Planar,
	Haversine,
}

impl MetricArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		self.metric().as_str()
	}

	fn metric(self) -> DistanceMetric {
		match self {
			MetricArg::Planar => DistanceMetric::Planar,
			MetricArg::Haversine => DistanceMetric::Haversine,
		}
	}
}

/// Log levels selectable from the CLI.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LevelArg {
	Off,
	Error,
	Warn,
	Info,
	Debug,
	Trace,
}

impl LevelArg {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			LevelArg::Off => "off",
			LevelArg::Error => "error",
			LevelArg::Warn => "warn",
			LevelArg::Info => "info",
			LevelArg::Debug => "debug",
			LevelArg::Trace => "trace",
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
