use std::cmp::Ordering;
use std::io;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use ignore::{DirEntry, Walk, WalkBuilder};
use thiserror::Error;
use tracing::debug;

/// Errors raised while preparing a [`FileLocator`].
///
/// Walking never fails: unreadable or missing directories simply produce no
/// matches.
#[derive(Debug, Error)]
pub enum LocateError {
	#[error("invalid file pattern {pattern:?}: {source}")]
	Pattern {
		pattern: String,
		#[source]
		source: globset::Error,
	},
	#[error("failed to resolve search root {}: {source}", .root.display())]
	Root {
		root: PathBuf,
		#[source]
		source: io::Error,
	},
}

/// Finds files below a root directory whose file name matches a glob.
#[derive(Debug, Clone)]
pub struct FileLocator {
	root: PathBuf,
	pattern: String,
	matcher: GlobMatcher,
}

impl FileLocator {
	pub fn new(root: impl AsRef<Path>, pattern: &str) -> Result<Self, LocateError> {
		let root = root.as_ref();
		let root = std::path::absolute(root).map_err(|source| LocateError::Root {
			root: root.to_path_buf(),
			source,
		})?;
		let matcher = GlobBuilder::new(pattern)
			.case_insensitive(cfg!(windows))
			.literal_separator(true)
			.build()
			.map_err(|source| LocateError::Pattern {
				pattern: pattern.to_string(),
				source,
			})?
			.compile_matcher();

		Ok(Self {
			root,
			pattern: pattern.to_string(),
			matcher,
		})
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Start a fresh traversal of the root.
	///
	/// Each directory's own files come before anything in its
	/// subdirectories; both are visited in name order.
	pub fn walk(&self) -> Matches {
		let walk = WalkBuilder::new(&self.root)
			.standard_filters(false)
			.follow_links(false)
			.sort_by_file_path(files_first)
			.build();

		Matches {
			walk,
			matcher: self.matcher.clone(),
		}
	}

	fn is_match(matcher: &GlobMatcher, entry: &DirEntry) -> bool {
		// The root is only ever searched, never offered itself.
		if entry.depth() == 0 {
			return false;
		}
		let Some(file_type) = entry.file_type() else {
			return false;
		};
		let is_file = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
		is_file && matcher.is_match(entry.file_name())
	}
}

fn files_first(a: &Path, b: &Path) -> Ordering {
	(a.is_dir(), a.file_name()).cmp(&(b.is_dir(), b.file_name()))
}

/// Lazy sequence of matching paths produced by [`FileLocator::walk`].
pub struct Matches {
	walk: Walk,
	matcher: GlobMatcher,
}

impl Iterator for Matches {
	type Item = PathBuf;

	fn next(&mut self) -> Option<Self::Item> {
		for entry in self.walk.by_ref() {
			match entry {
				Ok(entry) if FileLocator::is_match(&self.matcher, &entry) => {
					return Some(entry.into_path());
				}
				Ok(_) => {}
				Err(err) => debug!(error = %err, "skipping unreadable path"),
			}
		}
		None
	}
}
