use std::borrow::Cow;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::locator::{FileLocator, LocateError};

/// Label shown for the entry that exits without launching anything.
pub const QUIT_LABEL: &str = "Quit";

/// Default bound on the number of menu entries, the quit entry included.
pub const DEFAULT_MAX_ENTRIES: usize = 25;

/// A discovered ROM file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate(PathBuf);

impl Candidate {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self(path.into())
	}

	pub fn path(&self) -> &Path {
		&self.0
	}

	/// Base file name used for display.
	pub fn label(&self) -> Cow<'_, str> {
		match self.0.file_name() {
			Some(name) => name.to_string_lossy(),
			None => self.0.to_string_lossy(),
		}
	}

	pub fn into_path(self) -> PathBuf {
		self.0
	}
}

/// One row of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
	Quit,
	Rom(Candidate),
}

impl Entry {
	pub fn label(&self) -> Cow<'_, str> {
		match self {
			Self::Quit => Cow::Borrowed(QUIT_LABEL),
			Self::Rom(candidate) => candidate.label(),
		}
	}

	pub fn candidate(&self) -> Option<&Candidate> {
		match self {
			Self::Quit => None,
			Self::Rom(candidate) => Some(candidate),
		}
	}
}

/// Ordered, bounded menu contents. Index 0 is always [`Entry::Quit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
	entries: Vec<Entry>,
	truncated: bool,
}

impl CandidateList {
	/// Build a list from matches in discovery order.
	///
	/// At most `max_entries - 1` matches are taken; a bound of zero is treated
	/// as one so the quit entry always fits.
	pub fn from_matches<I>(matches: I, max_entries: usize) -> Self
	where
		I: IntoIterator<Item = PathBuf>,
	{
		let capacity = max_entries.max(1);
		let mut entries = Vec::with_capacity(capacity);
		entries.push(Entry::Quit);

		let mut matches = matches.into_iter();
		entries.extend(
			matches
				.by_ref()
				.take(capacity - 1)
				.map(|path| Entry::Rom(Candidate::new(path))),
		);
		let truncated = matches.next().is_some();

		Self { entries, truncated }
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `false`: the quit entry is always present.
	pub fn is_empty(&self) -> bool {
		false
	}

	/// Whether the list holds nothing but the quit entry.
	pub fn has_only_quit(&self) -> bool {
		self.entries.len() == 1
	}

	pub fn get(&self, index: usize) -> Option<&Entry> {
		self.entries.get(index)
	}

	pub fn entries(&self) -> &[Entry] {
		&self.entries
	}

	/// Discovered ROMs, quit entry excluded.
	pub fn candidates(&self) -> impl Iterator<Item = &Candidate> {
		self.entries.iter().filter_map(Entry::candidate)
	}

	/// Whether matches were dropped to honour the bound.
	pub fn truncated(&self) -> bool {
		self.truncated
	}
}

/// A root directory paired with the file name glob to look for under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomSource {
	pub root: PathBuf,
	pub pattern: String,
}

impl RomSource {
	pub fn new(root: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
		Self {
			root: root.into(),
			pattern: pattern.into(),
		}
	}
}

/// Aggregates locator results across sources into a [`CandidateList`].
#[derive(Debug, Clone)]
pub struct CandidateBuilder {
	locators: Vec<FileLocator>,
	max_entries: usize,
}

impl CandidateBuilder {
	pub fn new(sources: &[RomSource]) -> Result<Self, LocateError> {
		let locators = sources
			.iter()
			.map(|source| FileLocator::new(&source.root, &source.pattern))
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Self {
			locators,
			max_entries: DEFAULT_MAX_ENTRIES,
		})
	}

	pub fn with_max_entries(mut self, max_entries: usize) -> Self {
		self.max_entries = max_entries;
		self
	}

	pub fn max_entries(&self) -> usize {
		self.max_entries
	}

	/// Walk every source in order and collect the bounded list.
	///
	/// Traversal stops once the bound is exceeded.
	pub fn build(&self) -> CandidateList {
		let matches = self.locators.iter().flat_map(|locator| {
			debug!(
				root = %locator.root().display(),
				pattern = locator.pattern(),
				"scanning for roms"
			);
			locator.walk()
		});

		let list = CandidateList::from_matches(matches, self.max_entries);
		if list.truncated() {
			info!(
				shown = list.len() - 1,
				"more roms were found than fit in the menu; extra entries dropped"
			);
		} else {
			debug!(found = list.len() - 1, "rom discovery finished");
		}
		list
	}
}
