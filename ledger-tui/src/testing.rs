use ledger_model::{AccountId, Chart};

use crate::app_core::{AppCore, ChangeHandler};
use crate::events::AccountChanged;
use crate::input::{Key, KeyEvent};
use crate::settings::Settings;
use crate::state::{AppState, FormField};

/// Change handler that keeps every event for later assertions
#[derive(Debug, Default)]
pub struct RecordingHandler {
    pub changes: Vec<AccountChanged>,
}

impl ChangeHandler for RecordingHandler {
    fn on_change(&mut self, change: &AccountChanged) {
        self.changes.push(change.clone());
    }
}

pub struct TestApp {
    core: AppCore<RecordingHandler>,
}

impl TestApp {
    /// Create a test app over the given chart with default settings
    pub fn with_chart(chart: Chart) -> Self {
        Self::with_settings(chart, &Settings::default())
    }

    pub fn with_settings(chart: Chart, settings: &Settings) -> Self {
        Self {
            core: AppCore::new(AppState::new(chart, settings), RecordingHandler::default()),
        }
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type text into the focused picker, one key per character
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    /// Left mouse press at a terminal cell
    pub fn click(&mut self, column: u16, row: u16) {
        self.core.handle_click(column, row);
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.core.handle_resize(width, height);
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// Change events received so far, oldest first
    pub fn changes(&self) -> &[AccountChanged] {
        &self.core.handler().changes
    }

    /// Account ids currently listed in a picker's dropdown, in row order
    pub fn dropdown_account_ids(&self, field: FormField) -> Vec<AccountId> {
        let state = self.state();
        state
            .picker(field)
            .open_dropdown(&state.chart.accounts, &state.chart.account_types)
            .map(|d| d.items().map(|item| item.account_id).collect())
            .unwrap_or_default()
    }

    pub fn assert_dropdown_open(&self, field: FormField) {
        assert!(
            self.state().picker(field).show,
            "Expected {:?} dropdown to be open",
            field
        );
    }

    pub fn assert_dropdown_closed(&self, field: FormField) {
        assert!(
            !self.state().picker(field).show,
            "Expected {:?} dropdown to be closed",
            field
        );
    }

    /// Assert that the app should quit
    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    /// Assert that the app should NOT quit
    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}
