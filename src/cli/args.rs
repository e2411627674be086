use std::fmt::Write;
use std::path::PathBuf;

use cboy_menu::app_dirs::AppDir;
use clap::{
	ArgAction, ColorChoice, Parser,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};

/// Version banner including the config and log directories.
fn long_version() -> &'static str {
	let config_dir = match AppDir::Config.path() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match AppDir::Data.path() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("cboy-menu {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "log directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "cboy-menu",
	version,
	long_version = long_version(),
	about = "Pick a Game Boy ROM from local storage or the SD card and launch it",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `cboy-menu` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "CBOY_MENU_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading the default configuration file"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'e',
		long,
		value_name = "PROGRAM",
		help = "Emulator executable to launch (default: cboy)"
	)]
	pub(crate) emulator: Option<String>,
	#[arg(
		short = 'm',
		long = "max-entries",
		value_name = "N",
		help = "Maximum number of menu entries, quit entry included (default: 25)"
	)]
	pub(crate) max_entries: Option<usize>,
	#[arg(long = "print-config", help = "Print the effective configuration and exit")]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long,
		help = "Print the discovered ROMs instead of opening the menu"
	)]
	pub(crate) list: bool,
}
