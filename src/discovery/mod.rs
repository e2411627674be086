//! ROM discovery: recursive glob matching under a set of roots and the
//! bounded menu list built from the matches.

mod candidates;
mod locator;

pub use candidates::{
	Candidate, CandidateBuilder, CandidateList, DEFAULT_MAX_ENTRIES, Entry, QUIT_LABEL, RomSource,
};
pub use locator::{FileLocator, LocateError, Matches};
