use anyhow::{Result, anyhow};
use config::Map;
use tracing::debug;

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining config files, environment variables and
/// CLI arguments.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	load_with_env(cli, None)
}

pub(super) fn load_with_env(
	cli: &CliArgs,
	env_override: Option<Map<String, String>>,
) -> Result<ResolvedConfig> {
	let builder = build_config(cli, env_override)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	let resolved = raw.resolve(cli)?;
	debug!(?resolved, "configuration resolved");
	Ok(resolved)
}
