use crate::commands::{executor, handlers};
use crate::events::{AccountChanged, AppCommand};
use crate::input::KeyEvent;
use crate::state::AppState;

/// Receives account change events from the pickers
///
/// Production logs them, tests record them.
pub trait ChangeHandler {
    fn on_change(&mut self, change: &AccountChanged);
}

/// Testable application core without terminal dependencies
///
/// Every entry point translates input to a command, executes it, reports any
/// change to the handler and then settles deferred picker actions, so a
/// blur followed by a focus within one event never closes a dropdown.
pub struct AppCore<H: ChangeHandler> {
    ui_state: AppState,
    handler: H,
}

impl<H: ChangeHandler> AppCore<H> {
    pub fn new(ui_state: AppState, handler: H) -> Self {
        Self { ui_state, handler }
    }

    /// Handle keyboard input and execute the resulting command
    pub fn handle_key(&mut self, event: KeyEvent) {
        let command = handlers::handle_key_input(event, &self.ui_state);
        self.dispatch(command);
    }

    /// Handle a left mouse press at a terminal cell
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let command = handlers::handle_mouse_click(column, row, &self.ui_state);
        self.dispatch(command);
    }

    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.dispatch(Some(AppCommand::Resize { width, height }));
    }

    /// Run pending deferred actions; returns whether anything changed
    pub fn settle(&mut self) -> bool {
        executor::settle(&mut self.ui_state)
    }

    fn dispatch(&mut self, command: Option<AppCommand>) {
        if let Some(command) = command {
            tracing::debug!(?command, "executing command");
            if let Some(change) = executor::execute_command(command, &mut self.ui_state) {
                self.handler.on_change(&change);
            }
        }
        self.settle();
    }

    /// Get read-only access to the current UI state (for rendering or assertions)
    pub fn state(&self) -> &AppState {
        &self.ui_state
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.ui_state.should_quit
    }
}
