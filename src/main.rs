mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use tracing::info;

use cli::{parse_cli, print_candidates};
use workflow::{MenuWorkflow, Outcome};

fn main() -> Result<()> {
	let cli = parse_cli();
	let _log_guard = cboy_menu::logging::initialize();

	let config = settings::load(&cli)?;

	if cli.print_config {
		config.print_summary()?;
		return Ok(());
	}

	let workflow = MenuWorkflow::from_config(&config)?;

	if cli.list {
		print_candidates(&workflow.candidates())?;
		return Ok(());
	}

	match workflow.run()? {
		Outcome::Quit => info!("exiting without launching"),
		Outcome::Launched(candidate) => {
			info!(rom = %candidate.path().display(), "emulator returned");
		}
	}

	Ok(())
}
