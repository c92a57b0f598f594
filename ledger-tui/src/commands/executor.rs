use ratatui::layout::Rect;

use crate::events::{AccountChanged, AppCommand};
use crate::state::{AppState, Focus, FormField, KeyOutcome};

/// Apply a command to the form. Returns the change event when a pick was made.
pub fn execute_command(command: AppCommand, state: &mut AppState) -> Option<AccountChanged> {
    let change = match command {
        AppCommand::FocusNextField => {
            let target = state.focused_field.map_or(FormField::Debit, |f| f.next());
            focus_field(state, target);
            None
        }

        AppCommand::FocusPreviousField => {
            let target = state
                .focused_field
                .map_or(FormField::Credit, |f| f.previous());
            focus_field(state, target);
            None
        }

        AppCommand::FocusField(field) => {
            focus_field(state, field);
            None
        }

        AppCommand::BlurForm => {
            if let Some(field) = state.focused_field.take() {
                tracing::debug!(?field, "form blurred");
                state.picker_mut(field).blur();
            }
            None
        }

        AppCommand::PickerKey(event) => {
            let field = state.focused_field?;
            let (picker, chart) = state.picker_with_chart(field);
            match picker.handle_key(event, &chart.accounts, &chart.account_types) {
                KeyOutcome::Changed(change) => Some(change),
                KeyOutcome::Consumed | KeyOutcome::Ignored => None,
            }
        }

        AppCommand::PressDropdownItem { field, index } => {
            if let Some(previous) = state.focused_field.filter(|f| *f != field) {
                state.picker_mut(previous).blur();
            }
            state.focused_field = Some(field);
            let (picker, chart) = state.picker_with_chart(field);
            picker.press_item(index, &chart.accounts, &chart.account_types)
        }

        AppCommand::Resize { width, height } => {
            state.viewport = Rect::new(0, 0, width, height);
            None
        }

        AppCommand::Quit => {
            state.should_quit = true;
            None
        }
    };

    if let Some(change) = &change {
        state.record_change(change);
    }

    change
}

/// Run deferred picker actions. Returns whether anything changed.
pub fn settle(state: &mut AppState) -> bool {
    let mut settled = false;
    for field in FormField::ALL {
        settled |= state.picker_mut(field).settle();
    }
    settled
}

fn focus_field(state: &mut AppState, field: FormField) {
    if state.focused_field == Some(field) {
        // Already focused: only pull focus back from the dropdown
        let picker = state.picker_mut(field);
        if picker.focus != Some(Focus::Field) {
            picker.focus_field();
        }
        return;
    }

    if let Some(previous) = state.focused_field {
        state.picker_mut(previous).blur();
    }
    state.focused_field = Some(field);
    state.picker_mut(field).focus_field();
    tracing::debug!(?field, "field focused");
}
