use anyhow::{Context, Result};
use ratatui::{Terminal, backend::Backend, crossterm::event::Event};
use tracing::{debug, info};

use super::actions::Action;
use super::render;
use super::state::{MenuState, Selection};
use super::style::Palette;
use super::terminal::{InputSource, TerminalInput, TerminalSession};
use crate::discovery::CandidateList;

/// Show the menu on the controlling terminal until the user confirms.
///
/// The terminal is restored before this returns, whatever the outcome.
pub fn run(list: CandidateList) -> Result<Selection> {
	let mut session = TerminalSession::acquire().context("failed to acquire the terminal")?;
	let selection = run_with(
		session.terminal_mut(),
		&mut TerminalInput,
		MenuState::new(list),
		&Palette::default(),
	);
	drop(session);
	selection
}

/// Drive the render/input cycle over any backend and event source.
pub fn run_with<B, I>(
	terminal: &mut Terminal<B>,
	input: &mut I,
	mut state: MenuState,
	palette: &Palette,
) -> Result<Selection>
where
	B: Backend,
	I: InputSource,
{
	terminal.clear()?;

	loop {
		terminal.draw(|frame| render::draw(frame, &state, palette))?;

		let event = input.next_event().context("failed to read terminal input")?;
		let Event::Key(key) = event else {
			continue;
		};

		match state.handle_key(key) {
			Action::Continue => {}
			Action::Confirm => {
				let selection = state.selection();
				match &selection {
					Some(candidate) => {
						info!(path = %candidate.path().display(), "rom selected");
					}
					None => info!("quit entry confirmed"),
				}
				return Ok(selection);
			}
			Action::Abort => {
				debug!(highlight = state.highlight(), "menu interrupted");
				return Ok(None);
			}
		}
	}
}
