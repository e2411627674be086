//! Hand the chosen ROM to the emulator.

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::Path;
use std::process::Command;

use thiserror::Error;
use tracing::info;

use crate::discovery::Candidate;
use crate::menu::Selection;

/// Default emulator executable, resolved through `PATH`.
pub const DEFAULT_EMULATOR: &str = "cboy";

#[derive(Debug, Error)]
#[error("failed to launch `{}`: {source}", .program.to_string_lossy())]
pub struct LaunchError {
	pub program: OsString,
	#[source]
	pub source: io::Error,
}

/// Runs a program with one argument and waits for it to exit.
pub trait CommandRunner {
	fn run(&mut self, program: &OsStr, argument: &Path) -> io::Result<()>;
}

/// Spawns real processes that inherit the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
	fn run(&mut self, program: &OsStr, argument: &Path) -> io::Result<()> {
		let status = Command::new(program).arg(argument).status()?;
		info!(%status, "emulator exited");
		Ok(())
	}
}

/// Starts the configured emulator for a confirmed selection.
#[derive(Debug, Clone)]
pub struct Launcher<R = SystemRunner> {
	program: OsString,
	runner: R,
}

impl Launcher {
	pub fn new(program: impl Into<OsString>) -> Self {
		Self::with_runner(program, SystemRunner)
	}
}

impl<R: CommandRunner> Launcher<R> {
	pub fn with_runner(program: impl Into<OsString>, runner: R) -> Self {
		Self {
			program: program.into(),
			runner,
		}
	}

	pub fn program(&self) -> &OsStr {
		&self.program
	}

	pub fn runner(&self) -> &R {
		&self.runner
	}

	/// Run the emulator on `candidate` and block until it exits.
	///
	/// The emulator's exit status is not inspected.
	pub fn launch(&mut self, candidate: &Candidate) -> Result<(), LaunchError> {
		info!(
			program = %self.program.to_string_lossy(),
			rom = %candidate.path().display(),
			"launching emulator"
		);
		self.runner
			.run(&self.program, candidate.path())
			.map_err(|source| LaunchError {
				program: self.program.clone(),
				source,
			})
	}

	/// Launch when something was selected. Returns whether a launch happened.
	pub fn launch_selection(&mut self, selection: &Selection) -> Result<bool, LaunchError> {
		match selection {
			Some(candidate) => self.launch(candidate).map(|()| true),
			None => Ok(false),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::*;

	#[derive(Default)]
	struct RecordingRunner {
		calls: Vec<(OsString, PathBuf)>,
	}

	impl CommandRunner for RecordingRunner {
		fn run(&mut self, program: &OsStr, argument: &Path) -> io::Result<()> {
			self.calls.push((program.to_os_string(), argument.to_path_buf()));
			Ok(())
		}
	}

	struct FailingRunner;

	impl CommandRunner for FailingRunner {
		fn run(&mut self, _program: &OsStr, _argument: &Path) -> io::Result<()> {
			Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
		}
	}

	#[test]
	fn launch_passes_the_full_path_as_the_only_argument() {
		let mut launcher = Launcher::with_runner("cboy", RecordingRunner::default());
		launcher
			.launch(&Candidate::new("/mnt/sd/mario.gb"))
			.unwrap();

		assert_eq!(
			launcher.runner().calls,
			vec![(OsString::from("cboy"), PathBuf::from("/mnt/sd/mario.gb"))]
		);
	}

	#[test]
	fn no_selection_launches_nothing() {
		let mut launcher = Launcher::with_runner("cboy", RecordingRunner::default());
		assert!(!launcher.launch_selection(&None).unwrap());
		assert!(launcher.runner().calls.is_empty());
	}

	#[test]
	fn spawn_failures_propagate() {
		let mut launcher = Launcher::with_runner("missing-emulator", FailingRunner);
		let err = launcher
			.launch_selection(&Some(Candidate::new("/roms/a.gb")))
			.unwrap_err();

		assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
		assert!(err.to_string().contains("missing-emulator"));
	}

	#[cfg(unix)]
	#[test]
	fn system_runner_ignores_exit_status() {
		let mut launcher = Launcher::new("false");
		launcher.launch(&Candidate::new("/roms/a.gb")).unwrap();
	}

	#[cfg(unix)]
	#[test]
	fn system_runner_reports_missing_programs() {
		let mut launcher = Launcher::new("cboy-menu-test-no-such-emulator");
		let err = launcher.launch(&Candidate::new("/roms/a.gb")).unwrap_err();
		assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
	}
}
