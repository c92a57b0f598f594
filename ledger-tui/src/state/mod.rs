pub mod account_input;
pub mod deferred;
pub mod dropdown;
pub mod matcher;

use ledger_model::{Account, AccountId, Chart};
use ratatui::layout::Rect;

use crate::events::AccountChanged;
use crate::settings::Settings;
pub use account_input::{AccountInputState, Focus, InputPhase, KeyOutcome};

/// Account fields of the posting form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Debit,
    Credit,
}

impl FormField {
    pub const ALL: [FormField; 2] = [FormField::Debit, FormField::Credit];

    pub fn next(&self) -> Self {
        match self {
            Self::Debit => Self::Credit,
            Self::Credit => Self::Debit,
        }
    }

    pub fn previous(&self) -> Self {
        // Two fields: previous and next coincide
        self.next()
    }

    /// Identifier reported with change events
    pub fn input_id(&self) -> &'static str {
        match self {
            Self::Debit => "debit-account",
            Self::Credit => "credit-account",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Debit => "Debit account",
            Self::Credit => "Credit account",
        }
    }
}

/// Host form state: two account pickers sharing one chart
#[derive(Debug, Clone)]
pub struct AppState {
    pub chart: Chart,
    pub debit: AccountInputState,
    pub credit: AccountInputState,
    pub focused_field: Option<FormField>,

    /// Accounts reported through change events
    pub debit_account_id: Option<AccountId>,
    pub credit_account_id: Option<AccountId>,

    /// Last known terminal size, used for mouse hit-testing
    pub viewport: Rect,
    pub dropdown_height_percent: u16,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(chart: Chart, settings: &Settings) -> Self {
        Self {
            chart,
            debit: AccountInputState::new(
                FormField::Debit.input_id(),
                settings.debit_placeholder.clone(),
            ),
            credit: AccountInputState::new(
                FormField::Credit.input_id(),
                settings.credit_placeholder.clone(),
            ),
            focused_field: None,
            debit_account_id: None,
            credit_account_id: None,
            viewport: Rect::new(0, 0, 80, 24),
            dropdown_height_percent: settings.dropdown_height_percent,
            should_quit: false,
        }
    }

    pub fn picker(&self, field: FormField) -> &AccountInputState {
        match field {
            FormField::Debit => &self.debit,
            FormField::Credit => &self.credit,
        }
    }

    pub fn picker_mut(&mut self, field: FormField) -> &mut AccountInputState {
        match field {
            FormField::Debit => &mut self.debit,
            FormField::Credit => &mut self.credit,
        }
    }

    /// A picker together with the chart it reads from
    pub fn picker_with_chart(&mut self, field: FormField) -> (&mut AccountInputState, &Chart) {
        match field {
            FormField::Debit => (&mut self.debit, &self.chart),
            FormField::Credit => (&mut self.credit, &self.chart),
        }
    }

    pub fn field_for_input(&self, input_id: &str) -> Option<FormField> {
        FormField::ALL
            .into_iter()
            .find(|f| self.picker(*f).id == input_id)
    }

    /// Whether the focused picker currently shows its dropdown
    pub fn focused_dropdown_open(&self) -> bool {
        self.focused_field.is_some_and(|field| {
            self.picker(field)
                .open_dropdown(&self.chart.accounts, &self.chart.account_types)
                .is_some()
        })
    }

    /// Apply a change event to the form's chosen accounts
    pub fn record_change(&mut self, change: &AccountChanged) {
        match self.field_for_input(&change.input_id) {
            Some(FormField::Debit) => self.debit_account_id = Some(change.account_id),
            Some(FormField::Credit) => self.credit_account_id = Some(change.account_id),
            None => tracing::warn!(input = %change.input_id, "change from unknown input"),
        }
    }

    pub fn chosen_account(&self, field: FormField) -> Option<&Account> {
        let account_id = match field {
            FormField::Debit => self.debit_account_id,
            FormField::Credit => self.credit_account_id,
        }?;
        self.chart.account(account_id)
    }
}
