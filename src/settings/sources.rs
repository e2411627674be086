use std::path::PathBuf;

use anyhow::{Result, anyhow};
use cboy_menu::app_dirs::AppDir;
use config::{Config, ConfigError, Environment, File, Map};

use crate::cli::CliArgs;

pub(super) const ENV_PREFIX: &str = "CBOY_MENU";
pub(super) const ENV_SEPARATOR: &str = "__";

/// Build a [`Config`] from the default file, `--config` files and the
/// environment. `env_override` replaces the process environment (tests).
pub(super) fn build_config(
	cli: &CliArgs,
	env_override: Option<Map<String, String>>,
) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		Environment::with_prefix(ENV_PREFIX)
			.prefix_separator(ENV_SEPARATOR)
			.separator(ENV_SEPARATOR)
			.try_parsing(true)
			.source(env_override),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Default configuration file locations.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	AppDir::Config.path()
		.map(|dir| vec![dir.join("config.toml")])
		.unwrap_or_default()
}
