//! Core of the `cboy-menu` ROM picker.
//!
//! [`discovery`] finds ROM files and builds the bounded menu list, [`menu`]
//! runs the terminal selection loop, and [`launcher`] hands the chosen file
//! to the emulator.

pub mod app_dirs;
pub mod discovery;
pub mod launcher;
pub mod logging;
pub mod menu;

pub use discovery::{
	Candidate, CandidateBuilder, CandidateList, DEFAULT_MAX_ENTRIES, Entry, FileLocator,
	LocateError, RomSource,
};
pub use launcher::{CommandRunner, DEFAULT_EMULATOR, LaunchError, Launcher, SystemRunner};
pub use menu::{InputSource, MenuState, Palette, Selection};
