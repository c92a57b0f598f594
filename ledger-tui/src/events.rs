use ledger_model::AccountId;

use crate::input::KeyEvent;
use crate::state::FormField;

/// Commands to execute (user input → state transitions)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Focus traversal
    FocusNextField,
    FocusPreviousField,
    FocusField(FormField),
    BlurForm,

    // Account picker
    PickerKey(KeyEvent),
    PressDropdownItem { field: FormField, index: usize },

    // Terminal
    Resize { width: u16, height: u16 },

    // System
    Quit,
}

/// Emitted once each time the user finalizes a pick in an account input
#[derive(Debug, Clone, PartialEq)]
pub struct AccountChanged {
    /// Identifier of the input that produced the change
    pub input_id: String,
    pub account_id: AccountId,
}
