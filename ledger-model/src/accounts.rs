use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(i64);

impl AccountId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn inner(&self) -> i64 {
        self.0
    }
}

impl From<i64> for AccountId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountTypeId(i64);

impl AccountTypeId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn inner(&self) -> i64 {
        self.0
    }
}

impl From<i64> for AccountTypeId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for AccountTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Ledger flag marking whether an account still accepts postings
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveFlag {
    #[default]
    #[serde(rename = "Y")]
    Active,
    #[serde(rename = "N")]
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_id: AccountId,
    pub account_type_id: AccountTypeId,
    /// Parent in the chart tree, `None` for top-level accounts
    #[serde(default)]
    pub parent_account_id: Option<AccountId>,
    pub account_code: String,
    pub account_name: String,
    #[serde(default)]
    pub active_flag: ActiveFlag,
}

impl Account {
    pub fn new(
        account_id: i64,
        account_code: impl Into<String>,
        account_name: impl Into<String>,
        account_type_id: i64,
    ) -> Self {
        Self {
            account_id: AccountId(account_id),
            account_type_id: AccountTypeId(account_type_id),
            parent_account_id: None,
            account_code: account_code.into(),
            account_name: account_name.into(),
            active_flag: ActiveFlag::Active,
        }
    }

    pub fn with_parent(mut self, parent_account_id: i64) -> Self {
        self.parent_account_id = Some(AccountId(parent_account_id));
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active_flag = ActiveFlag::Inactive;
        self
    }

    /// Display label, `code - name`
    pub fn label(&self) -> String {
        format!("{} - {}", self.account_code, self.account_name)
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_account_id.is_none()
    }

    pub fn is_active(&self) -> bool {
        self.active_flag == ActiveFlag::Active
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountType {
    pub account_type_id: AccountTypeId,
    pub account_type_code: String,
    pub account_type_name: String,
}

impl AccountType {
    pub fn new(
        account_type_id: i64,
        account_type_code: impl Into<String>,
        account_type_name: impl Into<String>,
    ) -> Self {
        Self {
            account_type_id: AccountTypeId(account_type_id),
            account_type_code: account_type_code.into(),
            account_type_name: account_type_name.into(),
        }
    }

    /// Header label, `code - name`
    pub fn label(&self) -> String {
        format!("{} - {}", self.account_type_code, self.account_type_name)
    }
}
