use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::MenuState;

/// What the loop does after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
	Continue,
	Confirm,
	Abort,
}

impl MenuState {
	/// Arrows act on presses and auto-repeats. Confirm and abort only act on
	/// presses.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Action {
		if key.kind == KeyEventKind::Release {
			return Action::Continue;
		}
		let pressed = key.kind == KeyEventKind::Press;

		match key.code {
			KeyCode::Enter if pressed => Action::Confirm,
			KeyCode::Char('c') if pressed && key.modifiers.contains(KeyModifiers::CONTROL) => {
				Action::Abort
			}
			KeyCode::Up => {
				self.move_up();
				Action::Continue
			}
			KeyCode::Down => {
				self.move_down();
				Action::Continue
			}
			_ => Action::Continue,
		}
	}
}
