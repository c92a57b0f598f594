use ledger_model::{Account, AccountType};
use ratatui::{
    layout::{Margin, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::state::dropdown::{Dropdown, DropdownItem, DropdownRow};
use crate::state::{AccountInputState, Focus};
use crate::ui::theme;

/// Where an open dropdown is drawn and how far it is scrolled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownGeometry {
    pub area: Rect,
    /// Index of the first row shown
    pub offset: usize,
}

impl DropdownGeometry {
    /// Rows that fit inside the border
    pub fn visible_rows(&self) -> usize {
        self.area.height.saturating_sub(2) as usize
    }

    /// Dropdown row under a terminal cell, if the cell is inside the border
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = self.area.inner(Margin::new(1, 1));
        if inner.contains(Position::new(column, row)) {
            Some(self.offset + (row - inner.y) as usize)
        } else {
            None
        }
    }
}

/// Place the dropdown below the input (above when there is no room) and scroll
/// it so the focused item stays in view
pub fn dropdown_geometry(
    dropdown: &Dropdown,
    focus: Option<Focus>,
    input_area: Rect,
    frame_area: Rect,
    max_height_percent: u16,
) -> DropdownGeometry {
    let content_height = dropdown.rows.len() as u16;
    let max_height = (frame_area.height as u32 * max_height_percent as u32 / 100) as u16;
    let dropdown_height = (content_height + 2).min(max_height.max(3));
    let dropdown_width = input_area.width.max(theme::DROPDOWN_MIN_WIDTH);

    let x = input_area.x;
    let y = input_area.y + 1;
    let frame_bottom = frame_area.y + frame_area.height;

    let (final_y, final_height) = if y + dropdown_height > frame_bottom {
        // Not enough room below, position above if possible
        if input_area.y >= frame_area.y + dropdown_height {
            (input_area.y - dropdown_height, dropdown_height)
        } else {
            // Truncate to fit
            (y, frame_bottom.saturating_sub(y).max(3))
        }
    } else {
        (y, dropdown_height)
    };

    let final_width = dropdown_width.min(frame_area.width.saturating_sub(x));
    let area = Rect::new(x, final_y, final_width, final_height);

    let visible_rows = final_height.saturating_sub(2) as usize;
    let focused_row = match focus {
        Some(Focus::Item(index)) => dropdown.row_of_item(index),
        _ => None,
    };
    let offset = match focused_row {
        Some(row) if visible_rows > 0 && row >= visible_rows => row + 1 - visible_rows,
        _ => 0,
    };

    DropdownGeometry { area, offset }
}

/// A text input with a grouped account dropdown overlay
pub struct AccountInput<'a> {
    state: &'a AccountInputState,
    accounts: &'a [Account],
    account_types: &'a [AccountType],
    max_height_percent: u16,
}

impl<'a> AccountInput<'a> {
    pub fn new(
        state: &'a AccountInputState,
        accounts: &'a [Account],
        account_types: &'a [AccountType],
    ) -> Self {
        Self {
            state,
            accounts,
            account_types,
            max_height_percent: 60,
        }
    }

    pub fn max_height_percent(mut self, percent: u16) -> Self {
        self.max_height_percent = percent;
        self
    }

    /// Render the text field and place the cursor when it has focus
    pub fn render_field(&self, f: &mut Frame, area: Rect) {
        let focused = self.state.focus == Some(Focus::Field);
        let style = if self.state.is_focused() {
            theme::form_field_focused_style()
        } else {
            theme::form_field_style()
        };

        let span = if self.state.text.is_empty() {
            Span::styled(self.state.placeholder.as_str(), theme::placeholder_style())
        } else {
            Span::raw(self.state.text.as_str())
        };

        f.render_widget(Clear, area);
        f.render_widget(Paragraph::new(Line::from(span)).style(style), area);

        if focused {
            let text_width = Span::raw(self.state.text.as_str()).width() as u16;
            let x = (area.x + text_width).min(area.x + area.width.saturating_sub(1));
            f.set_cursor_position(Position::new(x, area.y));
        }
    }

    /// Render the dropdown overlay anchored to `input_area`, if it is open
    pub fn render_dropdown(&self, f: &mut Frame, input_area: Rect) {
        let Some(dropdown) = self.state.open_dropdown(self.accounts, self.account_types) else {
            return;
        };

        let geometry = dropdown_geometry(
            &dropdown,
            self.state.focus,
            input_area,
            f.area(),
            self.max_height_percent,
        );
        let inner_width = geometry.area.width.saturating_sub(2);
        let focused_row = match self.state.focus {
            Some(Focus::Item(index)) => dropdown.row_of_item(index),
            _ => None,
        };

        let lines: Vec<Line> = dropdown
            .rows
            .iter()
            .enumerate()
            .skip(geometry.offset)
            .take(geometry.visible_rows())
            .map(|(i, row)| row_line(row, inner_width, focused_row == Some(i)))
            .collect();

        f.render_widget(Clear, geometry.area);
        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme::muted_style()),
            ),
            geometry.area,
        );
    }
}

fn row_line(row: &DropdownRow, width: u16, focused: bool) -> Line<'static> {
    match row {
        DropdownRow::Header { title, count } => {
            let title = Span::styled(title.clone(), theme::header_style());
            match count {
                Some((shown, total)) => {
                    let count = Span::styled(
                        format!("Showing {} out of {}", shown, total),
                        theme::help_text_style(),
                    );
                    let pad = (width as usize)
                        .saturating_sub(title.width() + count.width())
                        .max(1);
                    Line::from(vec![title, Span::raw(" ".repeat(pad)), count])
                }
                None => Line::from(title),
            }
        }
        DropdownRow::Divider => Line::from(Span::styled(
            "─".repeat(width as usize),
            theme::muted_style(),
        )),
        DropdownRow::Item(item) => {
            let line = item_line(item);
            if focused {
                line.style(theme::selection_style())
            } else {
                line
            }
        }
    }
}

fn item_line(item: &DropdownItem) -> Line<'static> {
    let base = if item.active {
        theme::active_item_style()
    } else if item.inactive_account {
        theme::inactive_item_style()
    } else {
        Style::default()
    };

    let mut spans = vec![Span::raw(item.indent())];
    match &item.highlight {
        Some(range) if !range.is_empty() => {
            let label = &item.label;
            spans.push(Span::styled(label[..range.start].to_string(), base));
            spans.push(Span::styled(
                label[range.clone()].to_string(),
                base.patch(theme::match_style()),
            ));
            spans.push(Span::styled(label[range.end..].to_string(), base));
        }
        _ => spans.push(Span::styled(item.label.clone(), base)),
    }

    Line::from(spans)
}
