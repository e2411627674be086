use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	if config.emulator.is_empty() {
		return Err(ConfigError::invalid(
			"emulator",
			config.emulator.clone(),
			sources.source_for_emulator(),
			"must name an executable",
		));
	}

	if config.max_entries == 0 {
		return Err(ConfigError::invalid(
			"max_entries",
			config.max_entries.to_string(),
			sources.source_for_max_entries(),
			"must be at least 1 to fit the quit entry",
		));
	}

	for (index, source) in config.sources.iter().enumerate() {
		if source.root.as_os_str().is_empty() {
			return Err(ConfigError::invalid(
				format!("sources[{index}].root"),
				"",
				SettingSource::ConfigFile,
				"must not be empty",
			));
		}
		if source.patterns.is_empty() {
			return Err(ConfigError::invalid(
				format!("sources[{index}].patterns"),
				"[]",
				SettingSource::ConfigFile,
				"must list at least one pattern",
			));
		}
		if let Some(pattern) = source.patterns.iter().find(|p| p.trim().is_empty()) {
			return Err(ConfigError::invalid(
				format!("sources[{index}].patterns"),
				pattern.clone(),
				SettingSource::ConfigFile,
				"patterns must not be blank",
			));
		}
	}

	Ok(())
}
