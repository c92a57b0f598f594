//! Account picker state: query text, selection, dropdown visibility and focus.

use ledger_model::{Account, AccountId, AccountType};

use super::deferred::Deferred;
use super::dropdown::Dropdown;
use crate::events::AccountChanged;
use crate::input::{Key, KeyEvent};

/// Where keyboard focus sits inside the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field,
    /// A dropdown item, by item index (headers and dividers are not counted)
    Item(usize),
}

/// Coarse picker state, derived from text and selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPhase {
    Idle,
    Typing,
    Selected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    CloseDropdown,
}

/// Result of offering a key to the picker
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    /// The key was handled and must not reach the host
    Consumed,
    /// The key activated a dropdown item
    Changed(AccountChanged),
    Ignored,
}

#[derive(Debug, Clone)]
pub struct AccountInputState {
    pub id: String,
    pub placeholder: String,
    pub text: String,
    pub show: bool,
    pub selected_account_id: Option<AccountId>,
    /// `None` while focus is outside the picker
    pub focus: Option<Focus>,
    pending: Deferred<DeferredAction>,
}

impl AccountInputState {
    pub fn new(id: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            placeholder: placeholder.into(),
            text: String::new(),
            show: false,
            selected_account_id: None,
            focus: None,
            pending: Deferred::new(),
        }
    }

    pub fn phase(&self) -> InputPhase {
        if self.selected_account_id.is_some() {
            InputPhase::Selected
        } else if self.text.is_empty() {
            InputPhase::Idle
        } else {
            InputPhase::Typing
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focus.is_some()
    }

    pub fn has_pending_close(&self) -> bool {
        self.pending.is_pending()
    }

    /// The dropdown for the current text, whether or not it is shown
    pub fn dropdown(
        &self,
        accounts: &[Account],
        account_types: &[AccountType],
    ) -> Option<Dropdown> {
        Dropdown::build(&self.text, self.selected_account_id, accounts, account_types)
    }

    /// The dropdown if it is currently open
    pub fn open_dropdown(
        &self,
        accounts: &[Account],
        account_types: &[AccountType],
    ) -> Option<Dropdown> {
        if self.show {
            self.dropdown(accounts, account_types)
        } else {
            None
        }
    }

    // ============================================================================
    // Text editing
    // ============================================================================

    /// Replace the text, resolving the selection against account labels
    pub fn edit(&mut self, text: impl Into<String>, accounts: &[Account]) {
        self.text = text.into();
        self.selected_account_id = accounts
            .iter()
            .find(|a| a.label() == self.text)
            .map(|a| a.account_id);
        self.show = true;
        tracing::trace!(
            input = %self.id,
            text = %self.text,
            selected = ?self.selected_account_id,
            "text edited"
        );
    }

    pub fn insert_char(&mut self, c: char, accounts: &[Account]) {
        let mut text = self.text.clone();
        text.push(c);
        self.edit(text, accounts);
    }

    pub fn delete_char(&mut self, accounts: &[Account]) {
        let mut text = self.text.clone();
        text.pop();
        self.edit(text, accounts);
    }

    pub fn clear(&mut self, accounts: &[Account]) {
        self.edit(String::new(), accounts);
    }

    // ============================================================================
    // Focus
    // ============================================================================

    /// The text field gains focus
    pub fn focus_field(&mut self) {
        self.focus = Some(Focus::Field);
        self.pending.cancel();
        self.show = true;
    }

    /// A dropdown item gains focus
    pub fn focus_item(&mut self, index: usize) {
        self.focus = Some(Focus::Item(index));
        self.pending.cancel();
        self.show = true;
    }

    /// Focus leaves the field or the dropdown; closing waits for the next settle
    pub fn blur(&mut self) {
        self.focus = None;
        self.pending.schedule(DeferredAction::CloseDropdown);
    }

    /// Run the pending deferred action, if any. Returns whether one ran.
    pub fn settle(&mut self) -> bool {
        match self.pending.fire() {
            Some(DeferredAction::CloseDropdown) => {
                self.show = false;
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.show = false;
    }

    // ============================================================================
    // Selection
    // ============================================================================

    /// Pick an account: fill in its label, close the dropdown and report the change
    pub fn click(
        &mut self,
        account_id: AccountId,
        accounts: &[Account],
    ) -> Option<AccountChanged> {
        let Some(account) = accounts.iter().find(|a| a.account_id == account_id) else {
            tracing::warn!(input = %self.id, %account_id, "clicked account is not in the list");
            return None;
        };

        self.selected_account_id = Some(account.account_id);
        self.text = account.label();
        self.show = false;
        if self.focus.is_some() {
            self.focus = Some(Focus::Field);
        }

        tracing::debug!(input = %self.id, %account_id, "account selected");

        Some(AccountChanged {
            input_id: self.id.clone(),
            account_id: account.account_id,
        })
    }

    /// A pointer press on a dropdown item: the field blurs, the item takes
    /// focus, then the click lands
    pub fn press_item(
        &mut self,
        index: usize,
        accounts: &[Account],
        account_types: &[AccountType],
    ) -> Option<AccountChanged> {
        let account_id = self
            .dropdown(accounts, account_types)?
            .item(index)?
            .account_id;

        self.blur();
        self.focus_item(index);
        self.click(account_id, accounts)
    }

    // ============================================================================
    // Keyboard
    // ============================================================================

    pub fn handle_key(
        &mut self,
        event: KeyEvent,
        accounts: &[Account],
        account_types: &[AccountType],
    ) -> KeyOutcome {
        let Some(focus) = self.focus else {
            return KeyOutcome::Ignored;
        };

        match (focus, event.key) {
            (_, Key::Esc) => {
                self.close();
                // A hidden dropdown cannot hold focus
                self.focus = Some(Focus::Field);
                KeyOutcome::Consumed
            }

            (_, Key::Down) => {
                let next = match focus {
                    Focus::Field => 0,
                    Focus::Item(index) => index + 1,
                };
                let item_count = self
                    .dropdown(accounts, account_types)
                    .map_or(0, |d| d.item_count());
                if next < item_count {
                    self.focus_item(next);
                }
                KeyOutcome::Consumed
            }

            (Focus::Item(0), Key::Up) => {
                self.focus_field();
                KeyOutcome::Consumed
            }
            (Focus::Item(index), Key::Up) => {
                self.focus_item(index - 1);
                KeyOutcome::Consumed
            }

            (Focus::Item(_), Key::Backspace) => {
                self.focus_field();
                KeyOutcome::Consumed
            }

            (Focus::Item(index), Key::Enter) => {
                let account_id = self
                    .dropdown(accounts, account_types)
                    .and_then(|d| d.item(index).map(|item| item.account_id));
                match account_id.and_then(|id| self.click(id, accounts)) {
                    Some(change) => KeyOutcome::Changed(change),
                    None => KeyOutcome::Consumed,
                }
            }

            (Focus::Field, Key::Backspace) => {
                self.delete_char(accounts);
                KeyOutcome::Consumed
            }
            (Focus::Field, Key::Char('u')) if event.modifiers.ctrl => {
                self.clear(accounts);
                KeyOutcome::Consumed
            }
            (Focus::Field, _) => match event.text_char() {
                Some(c) => {
                    self.insert_char(c, accounts);
                    KeyOutcome::Consumed
                }
                None => KeyOutcome::Ignored,
            },

            _ => KeyOutcome::Ignored,
        }
    }
}
