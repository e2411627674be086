use std::io;
use std::path::PathBuf;

use cboy_menu::RomSource;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// A root directory and the file name globs searched under it, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SourceConfig {
	pub(crate) root: PathBuf,
	pub(crate) patterns: Vec<String>,
}

/// Application-ready configuration.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	pub(crate) emulator: String,
	pub(crate) max_entries: usize,
	pub(crate) sources: Vec<SourceConfig>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Expand every source into one (root, pattern) pair per pattern, keeping
	/// declaration order.
	pub(crate) fn rom_sources(&self) -> Vec<RomSource> {
		self.sources
			.iter()
			.flat_map(|source| {
				source
					.patterns
					.iter()
					.map(|pattern| RomSource::new(source.root.clone(), pattern.clone()))
			})
			.collect()
	}

	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) -> io::Result<()> {
		summary::print_summary(self)
	}
}
