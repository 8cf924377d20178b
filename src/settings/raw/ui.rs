use anyhow::{Result, bail};
use place_picker::UiConfig;
use place_picker::ui::style;
use serde::Deserialize;

use super::super::util::sanitize_text;
use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) heading: Option<String>,
	pub(super) tagline: Option<String>,
	pub(super) picked: Option<PaneSection>,
	pub(super) available: Option<PaneSection>,
	pub(super) dialog_title: Option<String>,
	pub(super) dialog_message: Option<String>,
}

/// Raw labels for one of the place lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PaneSection {
	pub(super) title: Option<String>,
	pub(super) fallback: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) ui: UiConfig,
	pub(super) theme: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}

	pub(super) fn resolve(self) -> Result<UiResolution> {
		let theme = sanitize_text(self.theme);
		if let Some(name) = &theme
			&& style::by_name(name).is_none()
		{
			bail!(
				"unknown theme '{name}' (available: {})",
				style::names().join(", ")
			);
		}

		let mut ui = UiConfig::default();
		if let Some(value) = sanitize_text(self.heading) {
			ui.heading = value;
		}
		if let Some(value) = sanitize_text(self.tagline) {
			ui.tagline = value;
		}
		if let Some(pane) = self.picked {
			apply_pane(&mut ui.picked, pane);
		}
		if let Some(pane) = self.available {
			apply_pane(&mut ui.available, pane);
		}
		if let Some(value) = sanitize_text(self.dialog_title) {
			ui.dialog_title = value;
		}
		if let Some(value) = sanitize_text(self.dialog_message) {
			ui.dialog_message = value;
		}

		Ok(UiResolution { ui, theme })
	}
}

fn apply_pane(target: &mut place_picker::PaneUiConfig, pane: PaneSection) {
	if let Some(value) = sanitize_text(pane.title) {
		target.title = value;
	}
	if let Some(value) = sanitize_text(pane.fallback) {
		target.fallback = value;
	}
}
