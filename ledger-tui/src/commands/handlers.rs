use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::{AppState, FormField};
use crate::ui::{self, Hit};

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Priority 0: Ctrl+C always quits
    if event.modifiers.ctrl && key == Key::Char('c') {
        return Some(AppCommand::Quit);
    }

    // Priority 1: nothing focused, only traversal and quit
    if state.focused_field.is_none() {
        return match key {
            Key::Tab => Some(AppCommand::FocusField(FormField::Debit)),
            Key::BackTab => Some(AppCommand::FocusField(FormField::Credit)),
            Key::Esc | Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Priority 2: focus traversal leaves the picker
    match key {
        Key::Tab => return Some(AppCommand::FocusNextField),
        Key::BackTab => return Some(AppCommand::FocusPreviousField),
        // Esc closes an open dropdown first, the next Esc quits
        Key::Esc if !state.focused_dropdown_open() => return Some(AppCommand::Quit),
        _ => {}
    }

    // Priority 3: everything else goes to the focused picker
    Some(AppCommand::PickerKey(event))
}

/// Map a left click to an AppCommand
pub fn handle_mouse_click(column: u16, row: u16, state: &AppState) -> Option<AppCommand> {
    match ui::hit_test(state, column, row) {
        Hit::DropdownItem { field, index } => Some(AppCommand::PressDropdownItem { field, index }),
        // Headers and dividers are not clickable
        Hit::Dropdown(_) => None,
        Hit::Field(field) => Some(AppCommand::FocusField(field)),
        Hit::Outside => state.focused_field.map(|_| AppCommand::BlurForm),
    }
}
