//! Row model for the account dropdown.
//!
//! Rows are built once per render from the visible account set and are also
//! used for keyboard navigation and mouse hit-testing, so all three agree on
//! which item sits where.

use itertools::Itertools;
use ledger_model::{Account, AccountId, AccountType};
use std::collections::HashMap;
use std::ops::Range;

use super::matcher::{compute_visible_accounts, find_ignore_case, visible_account_types};

/// Indentation glyph, repeated once per tree level
pub const INDENT: char = '\u{2003}';

#[derive(Debug, Clone, PartialEq)]
pub enum DropdownRow {
    Header {
        title: String,
        /// `(shown, total)` while filtering is active
        count: Option<(usize, usize)>,
    },
    Divider,
    Item(DropdownItem),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropdownItem {
    pub account_id: AccountId,
    pub label: String,
    pub depth: usize,
    /// Byte range of the query inside `label`
    pub highlight: Option<Range<usize>>,
    /// The input text equals this label exactly
    pub active: bool,
    pub inactive_account: bool,
}

impl DropdownItem {
    pub fn indent(&self) -> String {
        std::iter::repeat_n(INDENT, self.depth).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown {
    pub rows: Vec<DropdownRow>,
    pub filtered: bool,
}

impl Dropdown {
    /// Build the dropdown for the given input, or `None` when nothing would be shown
    pub fn build(
        query: &str,
        selected_account_id: Option<AccountId>,
        accounts: &[Account],
        account_types: &[AccountType],
    ) -> Option<Self> {
        let visible = compute_visible_accounts(query, accounts, selected_account_id);
        let types = visible_account_types(&visible, account_types);
        if visible.is_empty() || types.is_empty() {
            return None;
        }

        let filtered = visible.is_filtered();
        let visible = visible.accounts();

        let (shown_by_type, total_by_type) = if filtered {
            (
                visible.iter().counts_by(|a| a.account_type_id),
                accounts.iter().counts_by(|a| a.account_type_id),
            )
        } else {
            (HashMap::new(), HashMap::new())
        };

        let mut rows = Vec::new();
        for (index, account_type) in types.iter().enumerate() {
            if index > 0 {
                rows.push(DropdownRow::Divider);
            }

            let type_id = account_type.account_type_id;
            rows.push(DropdownRow::Header {
                title: account_type.label(),
                count: filtered.then(|| {
                    (
                        shown_by_type.get(&type_id).copied().unwrap_or(0),
                        total_by_type.get(&type_id).copied().unwrap_or(0),
                    )
                }),
            });

            for account in visible
                .iter()
                .filter(|a| a.account_type_id == type_id && a.is_top_level())
            {
                push_item(&mut rows, account, &visible, query, 0);
            }
        }

        Some(Self { rows, filtered })
    }

    pub fn items(&self) -> impl Iterator<Item = &DropdownItem> {
        self.rows.iter().filter_map(|row| match row {
            DropdownRow::Item(item) => Some(item),
            _ => None,
        })
    }

    pub fn item_count(&self) -> usize {
        self.items().count()
    }

    pub fn item(&self, index: usize) -> Option<&DropdownItem> {
        self.items().nth(index)
    }

    /// Row position of the item at `index`
    pub fn row_of_item(&self, index: usize) -> Option<usize> {
        self.rows
            .iter()
            .positions(|row| matches!(row, DropdownRow::Item(_)))
            .nth(index)
    }

    /// Item index of the row at `row`, if that row is an item
    pub fn item_at_row(&self, row: usize) -> Option<usize> {
        match self.rows.get(row)? {
            DropdownRow::Item(_) => Some(
                self.rows[..row]
                    .iter()
                    .filter(|r| matches!(r, DropdownRow::Item(_)))
                    .count(),
            ),
            _ => None,
        }
    }
}

fn push_item(
    rows: &mut Vec<DropdownRow>,
    account: &Account,
    visible: &[&Account],
    query: &str,
    depth: usize,
) {
    let label = account.label();
    let active = query == label;
    let highlight = if active || query.is_empty() {
        None
    } else {
        find_ignore_case(&label, query)
    };

    rows.push(DropdownRow::Item(DropdownItem {
        account_id: account.account_id,
        label,
        depth,
        highlight,
        active,
        inactive_account: !account.is_active(),
    }));

    for child in visible
        .iter()
        .filter(|a| a.parent_account_id == Some(account.account_id))
    {
        push_item(rows, child, visible, query, depth + 1);
    }
}
