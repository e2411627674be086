use std::io::{self, Write};

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) -> io::Result<()> {
	let mut stdout = io::stdout().lock();
	write_summary(&mut stdout, config)?;
	stdout.flush()
}

fn write_summary(out: &mut impl Write, config: &ResolvedConfig) -> io::Result<()> {
	writeln!(out, "Effective configuration:")?;
	writeln!(out, "  Emulator: {}", config.emulator)?;
	writeln!(out, "  Max entries: {}", config.max_entries)?;
	if config.sources.is_empty() {
		writeln!(out, "  Sources: (none)")?;
	}
	for source in &config.sources {
		writeln!(
			out,
			"  Source: {} [{}]",
			source.root.display(),
			source.patterns.join(", ")
		)?;
	}
	Ok(())
}
