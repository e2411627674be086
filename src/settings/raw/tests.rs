use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use config::Map;
use tempfile::tempdir;

use super::{DEFAULT_PATTERNS, DEFAULT_ROOTS, RawConfig};
use crate::cli::CliArgs;
use crate::settings::loader::load_with_env;

fn cli(args: &[&str]) -> CliArgs {
	let mut argv = vec!["cboy-menu", "--no-config"];
	argv.extend_from_slice(args);
	CliArgs::parse_from(argv)
}

fn no_env() -> Option<Map<String, String>> {
	Some(Map::new())
}

fn env(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
	Some(
		pairs
			.iter()
			.map(|(key, value)| (key.to_string(), value.to_string()))
			.collect(),
	)
}

fn write_config(dir: &Path, name: &str, contents: &str) -> PathBuf {
	let path = dir.join(name);
	fs::write(&path, contents).unwrap();
	path
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = cli(&["--emulator", "mgba", "--max-entries", "10"]);

	let mut config = RawConfig {
		emulator: Some("cboy".into()),
		max_entries: Some(25),
		sources: None,
	};
	config.apply_cli_overrides(&cli);

	assert_eq!(config.emulator.as_deref(), Some("mgba"));
	assert_eq!(config.max_entries, Some(10));
}

#[test]
fn defaults_match_the_handheld_layout() {
	let resolved = load_with_env(&cli(&[]), no_env()).unwrap();

	assert_eq!(resolved.emulator, "cboy");
	assert_eq!(resolved.max_entries, 25);

	let pairs: Vec<(PathBuf, String)> = resolved
		.rom_sources()
		.into_iter()
		.map(|source| (source.root, source.pattern))
		.collect();
	let expected: Vec<(PathBuf, String)> = DEFAULT_ROOTS
		.iter()
		.flat_map(|root| {
			DEFAULT_PATTERNS
				.iter()
				.map(move |pattern| (PathBuf::from(root), pattern.to_string()))
		})
		.collect();
	assert_eq!(pairs, expected);
	assert_eq!(pairs[0].0, PathBuf::from("/var/root/games/"));
	assert_eq!(pairs[1].1, "*.gbc");
	assert_eq!(pairs[2].0, PathBuf::from("/mnt/sd"));
}

#[test]
fn config_file_replaces_sources() {
	let dir = tempdir().unwrap();
	let path = write_config(
		dir.path(),
		"menu.toml",
		r#"
emulator = "sameboy"
max_entries = 12

[[sources]]
root = "/srv/roms"
patterns = ["*.GB", "*.gb"]
"#,
	);

	let cli = cli(&["--config", path.to_str().unwrap()]);
	let resolved = load_with_env(&cli, no_env()).unwrap();

	assert_eq!(resolved.emulator, "sameboy");
	assert_eq!(resolved.max_entries, 12);
	let patterns: Vec<String> = resolved
		.rom_sources()
		.into_iter()
		.map(|source| source.pattern)
		.collect();
	assert_eq!(patterns, vec!["*.GB", "*.gb"]);
}

#[test]
fn environment_overrides_files_and_cli_overrides_environment() {
	let dir = tempdir().unwrap();
	let path = write_config(
		dir.path(),
		"menu.toml",
		"emulator = \"sameboy\"\nmax_entries = 12\n",
	);
	let vars = env(&[
		("CBOY_MENU__EMULATOR", "mgba"),
		("CBOY_MENU__MAX_ENTRIES", "8"),
	]);

	let from_env = load_with_env(&cli(&["-c", path.to_str().unwrap()]), vars.clone()).unwrap();
	assert_eq!(from_env.emulator, "mgba");
	assert_eq!(from_env.max_entries, 8);

	let from_cli = load_with_env(
		&cli(&["-c", path.to_str().unwrap(), "--max-entries", "5"]),
		vars,
	)
	.unwrap();
	assert_eq!(from_cli.emulator, "mgba");
	assert_eq!(from_cli.max_entries, 5);
}

#[test]
fn missing_explicit_config_file_is_an_error() {
	let dir = tempdir().unwrap();
	let missing = dir.path().join("absent.toml");

	let result = load_with_env(&cli(&["--config", missing.to_str().unwrap()]), no_env());
	assert!(result.is_err());
}

#[test]
fn zero_max_entries_is_rejected() {
	let err = load_with_env(&cli(&["--max-entries", "0"]), no_env()).unwrap_err();
	let message = err.to_string();
	assert!(message.contains("max_entries"));
	assert!(message.contains("--max-entries"));
}

#[test]
fn blank_emulator_is_rejected() {
	let err = load_with_env(&cli(&["--emulator", "   "]), no_env()).unwrap_err();
	assert!(err.to_string().contains("emulator"));
}
