//! File-backed `tracing` setup.
//!
//! The menu owns the terminal, so nothing is ever logged to stdout or
//! stderr. Events go to `cboy-menu.log` in the data directory, filtered by
//! `CBOY_MENU_LOG` (default `info`).

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::app_dirs::AppDir;

pub const LOG_FILTER_ENV: &str = "CBOY_MENU_LOG";
const LOG_FILE_PREFIX: &str = "cboy-menu";
const LOG_FILE_SUFFIX: &str = "log";

/// Keeps the background log writer alive; flushes on drop.
#[must_use = "dropping the guard stops log output"]
pub struct LogGuard(Option<WorkerGuard>);

impl LogGuard {
	pub fn is_active(&self) -> bool {
		self.0.is_some()
	}
}

/// Install the global subscriber. Failures leave logging disabled.
pub fn initialize() -> LogGuard {
	match AppDir::Data.path() {
		Ok(dir) => initialize_in(&dir),
		Err(_) => LogGuard(None),
	}
}

/// Install the global subscriber writing under `dir`.
pub fn initialize_in(dir: &Path) -> LogGuard {
	if fs::create_dir_all(dir).is_err() {
		return LogGuard(None);
	}

	let Ok(appender) = RollingFileAppender::builder()
		.rotation(Rotation::NEVER)
		.filename_prefix(LOG_FILE_PREFIX)
		.filename_suffix(LOG_FILE_SUFFIX)
		.build(dir)
	else {
		return LogGuard(None);
	};

	let (writer, guard) = tracing_appender::non_blocking(appender);
	let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

	let installed = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(writer)
		.with_ansi(false)
		.with_target(false)
		.try_init()
		.is_ok();

	LogGuard(installed.then_some(guard))
}
