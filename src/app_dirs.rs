//! Where `cboy-menu` keeps its config file and its log.
//!
//! On the handheld both live under the platform's local directories for
//! `io.winglet.cboy-menu`. Each can be moved with an environment variable,
//! which is how test images and read-only roots relocate them.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

/// One of the two directories the menu writes or reads outside the ROM roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppDir {
	/// Holds `config.toml`.
	Config,
	/// Holds `cboy-menu.log`.
	Data,
}

impl AppDir {
	/// Variable that relocates this directory when set to a non-empty value.
	pub const fn env_var(self) -> &'static str {
		match self {
			Self::Config => "CBOY_MENU_CONFIG_DIR",
			Self::Data => "CBOY_MENU_DATA_DIR",
		}
	}

	pub fn path(self) -> Result<PathBuf> {
		relocated(env::var_os(self.env_var()), || self.platform_path())
	}

	fn platform_path(self) -> Result<PathBuf> {
		let dirs = ProjectDirs::from("io", "winglet", "cboy-menu")
			.context("no home directory to place cboy-menu files under")?;
		let dir = match self {
			Self::Config => dirs.config_local_dir(),
			Self::Data => dirs.data_local_dir(),
		};
		Ok(dir.to_path_buf())
	}
}

fn relocated(
	value: Option<OsString>,
	platform: impl FnOnce() -> Result<PathBuf>,
) -> Result<PathBuf> {
	match value {
		Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
		_ => platform(),
	}
}

#[cfg(test)]
mod tests {
	use anyhow::bail;

	use super::*;

	fn platform() -> Result<PathBuf> {
		Ok(PathBuf::from("/home/user/.local/share/cboy-menu"))
	}

	#[test]
	fn variable_relocates_the_directory() {
		let dir = relocated(Some(OsString::from("/media/ro/logs")), platform).unwrap();
		assert_eq!(dir, PathBuf::from("/media/ro/logs"));
	}

	#[test]
	fn unset_or_empty_variable_uses_platform_location() {
		assert_eq!(relocated(None, platform).unwrap(), platform().unwrap());
		assert_eq!(
			relocated(Some(OsString::new()), platform).unwrap(),
			platform().unwrap()
		);
	}

	#[test]
	fn relocation_skips_platform_lookup() {
		let dir = relocated(Some(OsString::from("/tmp/cfg")), || bail!("no home")).unwrap();
		assert_eq!(dir, PathBuf::from("/tmp/cfg"));

		let err = relocated(None, || bail!("no home")).unwrap_err();
		assert_eq!(err.to_string(), "no home");
	}

	#[test]
	fn each_directory_has_its_own_variable() {
		assert_eq!(AppDir::Config.env_var(), "CBOY_MENU_CONFIG_DIR");
		assert_eq!(AppDir::Data.env_var(), "CBOY_MENU_DATA_DIR");
	}
}
