use std::fmt;

/// Where a configuration value came from, for error messages.
#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
	ConfigFile,
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
			Self::ConfigFile => write!(f, "configuration file"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) emulator: Option<SettingSource>,
	pub(crate) max_entries: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_emulator(&self) -> SettingSource {
		self.emulator
			.clone()
			.unwrap_or(SettingSource::ConfigKey("emulator"))
	}

	pub(crate) fn source_for_max_entries(&self) -> SettingSource {
		self.max_entries
			.clone()
			.unwrap_or(SettingSource::ConfigKey("max_entries"))
	}
}
