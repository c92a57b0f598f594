//! Help bar with the form's key bindings.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

/// Render the help bar with the given text, centered in a bordered block.
pub fn render_help_bar(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(theme::help_text_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, area);
}

pub const HELP_TEXT_FORM: &str =
    "Tab: next field | ↑↓: browse | Enter: pick | Esc: close | Ctrl+U: clear | Ctrl+C: quit";
