//! Layout builders for the posting form.
//!
//! Rendering and mouse hit-testing both go through these functions, so a click
//! always lands on the same rectangle that was drawn.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{FORM_LABEL_WIDTH, HELP_BAR_HEIGHT, SCREEN_MARGIN, TITLE_HEIGHT};
use crate::state::FormField;

/// Areas of the posting form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub title: Rect,
    pub debit_label: Rect,
    pub debit_input: Rect,
    pub credit_label: Rect,
    pub credit_input: Rect,
    pub status: Rect,
    pub help: Rect,
}

impl FormLayout {
    pub fn label(&self, field: FormField) -> Rect {
        match field {
            FormField::Debit => self.debit_label,
            FormField::Credit => self.credit_label,
        }
    }

    pub fn input(&self, field: FormField) -> Rect {
        match field {
            FormField::Debit => self.debit_input,
            FormField::Credit => self.credit_input,
        }
    }
}

/// Title, two labelled fields, a status line and the help bar.
pub fn form_layout(area: Rect) -> FormLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(HELP_BAR_HEIGHT),
        ])
        .split(area);

    let (debit_label, debit_input) = labelled_row(chunks[2]);
    let (credit_label, credit_input) = labelled_row(chunks[4]);

    FormLayout {
        title: chunks[0],
        debit_label,
        debit_input,
        credit_label,
        credit_input,
        status: chunks[6],
        help: chunks[8],
    }
}

/// Split a form row into label and input.
///
/// Returns (label_area, input_area)
fn labelled_row(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(FORM_LABEL_WIDTH), Constraint::Min(10)])
        .split(area);

    (chunks[0], chunks[1])
}
