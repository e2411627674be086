//! The interactive selection loop.
//!
//! [`run`] owns the terminal for the lifetime of the menu; [`run_with`] is
//! the same loop over any ratatui backend and [`InputSource`], which is how
//! the tests drive it.

mod actions;
mod render;
mod runtime;
mod state;
mod style;
mod terminal;

pub use render::{HELP_LINES, TITLE};
pub use runtime::{run, run_with};
pub use state::{MenuState, Selection};
pub use style::Palette;
pub use terminal::{InputSource, TerminalInput, TerminalSession};
