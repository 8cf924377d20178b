//! File-backed `tracing` setup.
//!
//! The terminal UI owns stdout and stderr while it runs, so log events are
//! written to a file in the data directory instead.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_NAME: &str = "place-picker.log";

/// Build the event filter. `RUST_LOG` wins over the configured level.
fn env_filter(level: &str) -> EnvFilter {
	EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(level))
		.unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Route log events to `<log_dir>/place-picker.log`.
///
/// Returns the log path when file logging is active. If the file cannot be
/// opened, or a subscriber is already installed, events are dropped rather
/// than written to the terminal. Must run before the terminal UI starts.
pub fn initialize(log_dir: &Path, level: &str) -> Option<PathBuf> {
	let path = log_dir.join(LOG_FILE_NAME);
	let file = fs::create_dir_all(log_dir)
		.and_then(|()| OpenOptions::new().create(true).append(true).open(&path));

	let file = match file {
		Ok(file) => file,
		Err(err) => {
			eprintln!("warning: logging disabled, cannot open {}: {err}", path.display());
			return None;
		}
	};

	tracing_subscriber::registry()
		.with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
		.with(env_filter(level))
		.try_init()
		.ok()?;

	tracing::info!(path = %path.display(), "logging initialized");
	Some(path)
}

/// Levels accepted by `--log-level` and `[logging] level`.
pub const LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];
