use anyhow::{Context, Result};
use cboy_menu::{Candidate, CandidateBuilder, CandidateList, Launcher, menu};
use tracing::info;

use crate::settings::ResolvedConfig;

/// How a menu session ended.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
	Quit,
	Launched(Candidate),
}

/// Discovery, selection and launch wired together from configuration.
pub(crate) struct MenuWorkflow {
	builder: CandidateBuilder,
	launcher: Launcher,
}

impl MenuWorkflow {
	pub(crate) fn from_config(config: &ResolvedConfig) -> Result<Self> {
		let builder = CandidateBuilder::new(&config.rom_sources())
			.context("invalid rom source configuration")?
			.with_max_entries(config.max_entries);
		let launcher = Launcher::new(&config.emulator);
		Ok(Self { builder, launcher })
	}

	pub(crate) fn candidates(&self) -> CandidateList {
		self.builder.build()
	}

	/// Show the menu, then launch the chosen ROM once the terminal has been
	/// handed back.
	pub(crate) fn run(mut self) -> Result<Outcome> {
		let list = self.candidates();
		info!(entries = list.len(), "opening menu");

		let Some(candidate) = menu::run(list)? else {
			return Ok(Outcome::Quit);
		};

		self.launcher.launch(&candidate)?;
		Ok(Outcome::Launched(candidate))
	}
}
