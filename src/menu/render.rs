use ratatui::{
	Frame,
	layout::{Constraint, Direction, Layout},
	text::{Line, Span},
	widgets::{List, ListItem, ListState, Paragraph},
};

use super::state::MenuState;
use super::style::Palette;

pub const TITLE: &str = "Select Gameboy Game";
pub const HELP_LINES: [&str; 2] = [
	"You can insert an SD to load more games",
	"Press Power + Encoder to exit emulator!",
];

const ENTRY_PREFIX: &str = " - ";
const HEADER_HEIGHT: u16 = 1 + HELP_LINES.len() as u16;

/// Redraw the whole menu from `state`.
pub(crate) fn draw(frame: &mut Frame, state: &MenuState, palette: &Palette) {
	let layout = Layout::default()
		.direction(Direction::Vertical)
		.constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
		.split(frame.area());

	let mut header = vec![Line::from(Span::styled(TITLE, palette.title))];
	header.extend(HELP_LINES.iter().map(|line| Line::raw(*line)));
	frame.render_widget(Paragraph::new(header), layout[0]);

	let items: Vec<ListItem> = state
		.list()
		.entries()
		.iter()
		.enumerate()
		.map(|(index, entry)| {
			let style = palette.entry_style(index == state.highlight());
			ListItem::new(Line::from(vec![
				Span::raw(ENTRY_PREFIX),
				Span::styled(entry.label(), style),
			]))
		})
		.collect();

	// Selection only drives scrolling; entries carry their own styles.
	let mut list_state = ListState::default().with_selected(Some(state.highlight()));
	frame.render_stateful_widget(List::new(items), layout[1], &mut list_state);
}
