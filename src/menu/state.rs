use crate::discovery::{Candidate, CandidateList, Entry};

/// What the menu produced: the chosen ROM, or nothing when the user quit.
pub type Selection = Option<Candidate>;

/// Menu contents plus the highlighted row.
///
/// `highlight` always indexes an existing entry.
#[derive(Debug, Clone)]
pub struct MenuState {
	list: CandidateList,
	highlight: usize,
}

impl MenuState {
	pub fn new(list: CandidateList) -> Self {
		Self { list, highlight: 0 }
	}

	pub fn list(&self) -> &CandidateList {
		&self.list
	}

	pub fn highlight(&self) -> usize {
		self.highlight
	}

	pub fn highlighted_entry(&self) -> &Entry {
		&self.list.entries()[self.highlight]
	}

	pub fn move_up(&mut self) {
		if self.highlight > 0 {
			self.highlight -= 1;
		}
	}

	pub fn move_down(&mut self) {
		if self.highlight + 1 < self.list.len() {
			self.highlight += 1;
		}
	}

	/// The ROM under the highlight, or `None` on the quit entry.
	pub fn selection(&self) -> Selection {
		self.highlighted_entry().candidate().cloned()
	}
}
