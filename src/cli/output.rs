use std::io::{self, Write};

use cboy_menu::CandidateList;

/// Write one full ROM path per line, quit entry omitted.
pub(crate) fn write_candidates(out: &mut impl Write, list: &CandidateList) -> io::Result<()> {
	for candidate in list.candidates() {
		writeln!(out, "{}", candidate.path().display())?;
	}
	Ok(())
}

pub(crate) fn print_candidates(list: &CandidateList) -> io::Result<()> {
	let stdout = io::stdout();
	let mut lock = stdout.lock();
	write_candidates(&mut lock, list)?;
	lock.flush()
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::*;

	#[test]
	fn listing_skips_the_quit_entry() {
		let list = CandidateList::from_matches(
			["/var/root/games/a.gb", "/mnt/sd/b.gbc"].map(PathBuf::from),
			25,
		);

		let mut out = Vec::new();
		write_candidates(&mut out, &list).unwrap();

		assert_eq!(
			String::from_utf8(out).unwrap(),
			"/var/root/games/a.gb\n/mnt/sd/b.gbc\n"
		);
	}
}
