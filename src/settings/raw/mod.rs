use std::env;
use std::path::PathBuf;

use anyhow::{Error, Result};
use cboy_menu::{DEFAULT_EMULATOR, DEFAULT_MAX_ENTRIES};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource, SourceConfig};

pub(super) const DEFAULT_ROOTS: [&str; 2] = ["/var/root/games/", "/mnt/sd"];
pub(super) const DEFAULT_PATTERNS: [&str; 2] = ["*.gb", "*.gbc"];

/// Configuration as read from files and the environment, before CLI
/// overrides, defaults and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pub(super) emulator: Option<String>,
	pub(super) max_entries: Option<usize>,
	pub(super) sources: Option<Vec<SourceSection>>,
}

/// One `[[sources]]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SourceSection {
	pub(super) root: PathBuf,
	pub(super) patterns: Vec<String>,
}

impl RawConfig {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(emulator) = &cli.emulator {
			self.emulator = Some(emulator.clone());
		}
		if let Some(max_entries) = cli.max_entries {
			self.max_entries = Some(max_entries);
		}
	}

	/// Fill defaults and validate.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			emulator: detect_source(
				cli.emulator.is_some(),
				self.emulator.is_some(),
				"CBOY_MENU__EMULATOR",
				"--emulator",
				"emulator",
			),
			max_entries: detect_source(
				cli.max_entries.is_some(),
				self.max_entries.is_some(),
				"CBOY_MENU__MAX_ENTRIES",
				"--max-entries",
				"max_entries",
			),
		};

		let sources_list = match self.sources {
			Some(sections) => sections
				.into_iter()
				.map(|section| SourceConfig {
					root: section.root,
					patterns: section.patterns,
				})
				.collect(),
			None => default_sources(),
		};

		let config = ResolvedConfig {
			emulator: self
				.emulator
				.map(|emulator| emulator.trim().to_string())
				.unwrap_or_else(|| DEFAULT_EMULATOR.to_string()),
			max_entries: self.max_entries.unwrap_or(DEFAULT_MAX_ENTRIES),
			sources: sources_list,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

pub(super) fn default_sources() -> Vec<SourceConfig> {
	DEFAULT_ROOTS
		.iter()
		.map(|root| SourceConfig {
			root: PathBuf::from(root),
			patterns: DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect(),
		})
		.collect()
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
