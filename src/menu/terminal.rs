use std::io;

use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event};
use tracing::warn;

/// Blocking source of terminal events.
pub trait InputSource {
	fn next_event(&mut self) -> io::Result<Event>;
}

/// Reads events from the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
	fn next_event(&mut self) -> io::Result<Event> {
		event::read()
	}
}

/// Exclusive hold on the terminal in raw mode on the alternate screen.
///
/// Dropping the session restores the terminal, so every exit path out of
/// the menu (including unwinding) leaves the user's shell usable. A panic
/// hook installed on acquisition restores it before the panic is reported.
pub struct TerminalSession {
	terminal: DefaultTerminal,
}

impl TerminalSession {
	pub fn acquire() -> io::Result<Self> {
		let terminal = ratatui::try_init()?;
		Ok(Self { terminal })
	}

	pub fn terminal_mut(&mut self) -> &mut DefaultTerminal {
		&mut self.terminal
	}
}

impl Drop for TerminalSession {
	fn drop(&mut self) {
		if let Err(err) = ratatui::try_restore() {
			warn!(error = %err, "failed to restore terminal");
		}
	}
}
