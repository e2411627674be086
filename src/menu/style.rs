use ratatui::style::{Color, Modifier, Style};

/// The styles the menu draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
	pub normal: Style,
	pub highlighted: Style,
	pub title: Style,
}

impl Default for Palette {
	fn default() -> Self {
		Self {
			normal: Style::default().fg(Color::White).bg(Color::Black),
			highlighted: Style::default().fg(Color::Black).bg(Color::White),
			title: Style::default().add_modifier(Modifier::UNDERLINED),
		}
	}
}

impl Palette {
	pub fn entry_style(&self, highlighted: bool) -> Style {
		if highlighted {
			self.highlighted
		} else {
			self.normal
		}
	}
}
