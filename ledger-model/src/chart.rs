//! A chart of accounts: the account types plus the flat, parent-linked account list.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;
use std::path::Path;

use crate::accounts::{Account, AccountId, AccountType, AccountTypeId};
use crate::error::ChartError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    #[serde(default)]
    pub account_types: Vec<AccountType>,
    #[serde(default)]
    pub accounts: Vec<Account>,
}

/// Structural problems that do not prevent the chart from being used
#[derive(Debug, Clone, PartialEq)]
pub enum ChartWarning {
    DanglingParent {
        account_id: AccountId,
        parent_account_id: AccountId,
    },
    UnknownAccountType {
        account_id: AccountId,
        account_type_id: AccountTypeId,
    },
}

impl Display for ChartWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DanglingParent {
                account_id,
                parent_account_id,
            } => write!(
                f,
                "account {} references missing parent {}",
                account_id, parent_account_id
            ),
            Self::UnknownAccountType {
                account_id,
                account_type_id,
            } => write!(
                f,
                "account {} has unknown account type {}",
                account_id, account_type_id
            ),
        }
    }
}

impl Chart {
    pub fn new(account_types: Vec<AccountType>, accounts: Vec<Account>) -> Self {
        Self {
            account_types,
            accounts,
        }
    }

    /// Parse a chart from JSON and reject duplicate ids
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        let chart: Chart = serde_json::from_str(json)?;
        chart.check_unique_ids()?;
        Ok(chart)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ChartError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn account(&self, account_id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.account_id == account_id)
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty() || self.account_types.is_empty()
    }

    fn check_unique_ids(&self) -> Result<(), ChartError> {
        let mut seen_types = HashSet::new();
        for account_type in &self.account_types {
            if !seen_types.insert(account_type.account_type_id) {
                return Err(ChartError::DuplicateAccountTypeId(
                    account_type.account_type_id,
                ));
            }
        }

        let mut seen_accounts = HashSet::new();
        for account in &self.accounts {
            if !seen_accounts.insert(account.account_id) {
                return Err(ChartError::DuplicateAccountId(account.account_id));
            }
        }

        Ok(())
    }

    /// Dangling parent links and unknown account types, in account order
    pub fn warnings(&self) -> Vec<ChartWarning> {
        let account_ids: HashSet<AccountId> =
            self.accounts.iter().map(|a| a.account_id).collect();
        let type_ids: HashSet<AccountTypeId> = self
            .account_types
            .iter()
            .map(|t| t.account_type_id)
            .collect();

        let mut warnings = Vec::new();
        for account in &self.accounts {
            if let Some(parent_account_id) = account.parent_account_id {
                if !account_ids.contains(&parent_account_id) {
                    warnings.push(ChartWarning::DanglingParent {
                        account_id: account.account_id,
                        parent_account_id,
                    });
                }
            }
            if !type_ids.contains(&account.account_type_id) {
                warnings.push(ChartWarning::UnknownAccountType {
                    account_id: account.account_id,
                    account_type_id: account.account_type_id,
                });
            }
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHART_JSON: &str = r#"{
        "accountTypes": [
            { "accountTypeId": 1, "accountTypeCode": "A", "accountTypeName": "Assets" }
        ],
        "accounts": [
            { "accountId": 1, "accountTypeId": 1, "accountCode": "1000", "accountName": "Assets" },
            { "accountId": 2, "accountTypeId": 1, "parentAccountId": 1, "accountCode": "1010", "accountName": "Cash" }
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let chart = Chart::from_json(CHART_JSON).unwrap();

        assert_eq!(chart.account_types.len(), 1);
        assert_eq!(chart.accounts.len(), 2);
        assert_eq!(
            chart.account(AccountId::new(2)).map(|a| a.label()),
            Some("1010 - Cash".to_string())
        );
        assert!(chart.warnings().is_empty());
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = Chart::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ChartError::Json(_)));
    }

    #[test]
    fn test_duplicate_account_id_is_an_error() {
        let json = r#"{
            "accountTypes": [
                { "accountTypeId": 1, "accountTypeCode": "A", "accountTypeName": "Assets" }
            ],
            "accounts": [
                { "accountId": 7, "accountTypeId": 1, "accountCode": "1000", "accountName": "Assets" },
                { "accountId": 7, "accountTypeId": 1, "accountCode": "1010", "accountName": "Cash" }
            ]
        }"#;
        let err = Chart::from_json(json).unwrap_err();
        assert!(matches!(err, ChartError::DuplicateAccountId(id) if id == AccountId::new(7)));
    }

    #[test]
    fn test_duplicate_account_type_id_is_an_error() {
        let json = r#"{
            "accountTypes": [
                { "accountTypeId": 1, "accountTypeCode": "A", "accountTypeName": "Assets" },
                { "accountTypeId": 1, "accountTypeCode": "L", "accountTypeName": "Liabilities" }
            ]
        }"#;
        let err = Chart::from_json(json).unwrap_err();
        assert!(matches!(err, ChartError::DuplicateAccountTypeId(_)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Chart::load("/nonexistent/chart.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/chart.json"));
    }

    #[test]
    fn test_warnings_for_dangling_parent_and_unknown_type() {
        let chart = Chart::new(
            vec![AccountType::new(1, "A", "Assets")],
            vec![
                Account::new(1, "1000", "Assets", 1),
                Account::new(2, "1010", "Cash", 1).with_parent(99),
                Account::new(3, "9000", "Suspense", 5),
            ],
        );

        let warnings = chart.warnings();
        assert_eq!(
            warnings,
            vec![
                ChartWarning::DanglingParent {
                    account_id: AccountId::new(2),
                    parent_account_id: AccountId::new(99),
                },
                ChartWarning::UnknownAccountType {
                    account_id: AccountId::new(3),
                    account_type_id: AccountTypeId::new(5),
                },
            ]
        );
        assert_eq!(
            warnings[0].to_string(),
            "account 2 references missing parent 99"
        );
    }

    #[test]
    fn test_empty_chart() {
        assert!(Chart::default().is_empty());
    }
}
