//! Type-ahead matching over the account tree.
//!
//! A text match anywhere in the tree pulls in the matched account's ancestors
//! and descendants so the dropdown keeps the hierarchy around every hit.

use ledger_model::{Account, AccountId, AccountType};
use std::collections::HashSet;
use std::ops::Range;

/// The accounts a dropdown should show for the current input
#[derive(Debug, Clone, PartialEq)]
pub enum VisibleAccounts<'a> {
    /// No filtering is active (empty query or a resolved selection)
    All(&'a [Account]),
    /// Matches plus their ancestors and descendants, in input order
    Filtered(Vec<&'a Account>),
}

impl<'a> VisibleAccounts<'a> {
    pub fn is_filtered(&self) -> bool {
        matches!(self, Self::Filtered(_))
    }

    pub fn accounts(&self) -> Vec<&'a Account> {
        match self {
            Self::All(accounts) => accounts.iter().collect(),
            Self::Filtered(accounts) => accounts.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::All(accounts) => accounts.len(),
            Self::Filtered(accounts) => accounts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compute the visible account set for a query.
///
/// An empty query or an active selection disables filtering entirely.
pub fn compute_visible_accounts<'a>(
    query: &str,
    accounts: &'a [Account],
    selected_account_id: Option<AccountId>,
) -> VisibleAccounts<'a> {
    if query.is_empty() || selected_account_id.is_some() {
        return VisibleAccounts::All(accounts);
    }

    let mut visible: HashSet<AccountId> = HashSet::new();
    for account in accounts
        .iter()
        .filter(|a| find_ignore_case(&a.label(), query).is_some())
    {
        visible.extend(find_ancestors(accounts, account.account_id));
        visible.insert(account.account_id);
        visible.extend(find_descendants(accounts, account.account_id));
    }

    tracing::trace!(query, visible = visible.len(), "filtered accounts");

    VisibleAccounts::Filtered(
        accounts
            .iter()
            .filter(|a| visible.contains(&a.account_id))
            .collect(),
    )
}

/// Account types that have at least one visible account, in input order
pub fn visible_account_types<'a>(
    visible: &VisibleAccounts<'_>,
    account_types: &'a [AccountType],
) -> Vec<&'a AccountType> {
    match visible {
        VisibleAccounts::All(_) => account_types.iter().collect(),
        VisibleAccounts::Filtered(accounts) => account_types
            .iter()
            .filter(|t| {
                accounts
                    .iter()
                    .any(|a| a.account_type_id == t.account_type_id)
            })
            .collect(),
    }
}

/// Strict ancestors of an account, root first.
///
/// A parent id that is not in the list ends the walk. The walk is bounded by
/// the number of accounts so a cyclic chart cannot hang it.
pub fn find_ancestors(accounts: &[Account], account_id: AccountId) -> Vec<AccountId> {
    let mut ancestors = Vec::new();
    let Some(mut account) = accounts.iter().find(|a| a.account_id == account_id) else {
        return ancestors;
    };

    while let Some(parent_id) = account.parent_account_id {
        if ancestors.len() >= accounts.len() {
            tracing::warn!(%account_id, "parent chain does not terminate");
            break;
        }
        match accounts.iter().find(|a| a.account_id == parent_id) {
            Some(parent) => {
                ancestors.insert(0, parent.account_id);
                account = parent;
            }
            None => {
                tracing::debug!(
                    account_id = %account.account_id,
                    %parent_id,
                    "parent account missing, stopping ancestor walk"
                );
                break;
            }
        }
    }

    ancestors
}

/// Strict descendants of an account at every depth, breadth first
pub fn find_descendants(accounts: &[Account], account_id: AccountId) -> Vec<AccountId> {
    let mut seen: HashSet<AccountId> = HashSet::from([account_id]);
    let mut descendants: Vec<AccountId> = Vec::new();
    let mut next = 0;
    let mut parent = Some(account_id);

    while let Some(parent_id) = parent {
        for child in accounts
            .iter()
            .filter(|a| a.parent_account_id == Some(parent_id))
        {
            if seen.insert(child.account_id) {
                descendants.push(child.account_id);
            }
        }
        parent = descendants.get(next).copied();
        next += 1;
    }

    descendants
}

/// Byte range of the first case-insensitive occurrence of `needle` in `haystack`.
///
/// Both sides are lowercased char by char. A hit that starts or ends inside the
/// expansion of one haystack char (`İ` lowercases to `i\u{307}`) covers that
/// whole char.
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return Some(0..0);
    }

    let needle: String = needle.chars().flat_map(char::to_lowercase).collect();

    let mut lowered = String::with_capacity(haystack.len());
    // Source char range for every byte of `lowered`
    let mut origin: Vec<Range<usize>> = Vec::with_capacity(haystack.len());
    for (start, c) in haystack.char_indices() {
        let source = start..start + c.len_utf8();
        for lower in c.to_lowercase() {
            lowered.push(lower);
            origin.extend(std::iter::repeat_n(source.clone(), lower.len_utf8()));
        }
    }

    let hit = lowered.find(&needle)?;
    let last = hit + needle.len() - 1;
    Some(origin[hit].start..origin[last].end)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // Helper Functions
    // ============================================================================

    fn ids(accounts: &[&Account]) -> Vec<i64> {
        accounts.iter().map(|a| a.account_id.inner()).collect()
    }

    fn id(value: i64) -> AccountId {
        AccountId::new(value)
    }

    /// Assets > Current Assets > {Cash, Bank > {Checking, Savings}}, Liabilities > Card
    fn create_test_chart() -> (Vec<AccountType>, Vec<Account>) {
        let account_types = vec![
            AccountType::new(1, "A", "Assets"),
            AccountType::new(2, "L", "Liabilities"),
            AccountType::new(3, "E", "Expenses"),
        ];
        let accounts = vec![
            Account::new(1, "1000", "Assets", 1),
            Account::new(2, "1100", "Current Assets", 1).with_parent(1),
            Account::new(3, "1110", "Cash", 1).with_parent(2),
            Account::new(4, "1120", "Bank", 1).with_parent(2),
            Account::new(5, "1121", "Checking", 1).with_parent(4),
            Account::new(6, "1122", "Savings", 1).with_parent(4),
            Account::new(7, "2000", "Liabilities", 2),
            Account::new(8, "2100", "Credit Card", 2).with_parent(7),
        ];
        (account_types, accounts)
    }

    // ============================================================================
    // Visible set
    // ============================================================================

    #[test]
    fn test_empty_query_shows_everything() {
        let (_, accounts) = create_test_chart();
        let visible = compute_visible_accounts("", &accounts, None);

        assert!(!visible.is_filtered());
        assert_eq!(visible.len(), accounts.len());
    }

    #[test]
    fn test_selection_suppresses_filtering() {
        let (_, accounts) = create_test_chart();
        let visible = compute_visible_accounts("1110 - Cash", &accounts, Some(id(3)));

        assert_eq!(visible, VisibleAccounts::All(&accounts));
    }

    #[test]
    fn test_match_includes_ancestors_and_descendants() {
        let (_, accounts) = create_test_chart();
        let visible = compute_visible_accounts("bank", &accounts, None);

        assert!(visible.is_filtered());
        assert_eq!(ids(&visible.accounts()), vec![1, 2, 4, 5, 6]);
    }

    #[test]
    fn test_output_keeps_input_order() {
        // Child listed before its parent: ancestors are walked first but the
        // result follows the input list
        let accounts = vec![
            Account::new(2, "1010", "Cash", 1).with_parent(1),
            Account::new(1, "1000", "Assets", 1),
        ];
        let visible = compute_visible_accounts("cash", &accounts, None);

        assert_eq!(ids(&visible.accounts()), vec![2, 1]);
    }

    #[test]
    fn test_match_on_code() {
        let (_, accounts) = create_test_chart();
        let visible = compute_visible_accounts("2100", &accounts, None);

        assert_eq!(ids(&visible.accounts()), vec![7, 8]);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let (_, accounts) = create_test_chart();
        let visible = compute_visible_accounts("CHECKING", &accounts, None);

        assert_eq!(ids(&visible.accounts()), vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let (account_types, accounts) = create_test_chart();
        let visible = compute_visible_accounts("zzz", &accounts, None);

        assert!(visible.is_empty());
        assert!(visible_account_types(&visible, &account_types).is_empty());
    }

    #[test]
    fn test_every_visible_account_is_related_to_a_match() {
        let (_, accounts) = create_test_chart();
        let query = "ca";
        let visible = compute_visible_accounts(query, &accounts, None);

        let matches: Vec<AccountId> = accounts
            .iter()
            .filter(|a| find_ignore_case(&a.label(), query).is_some())
            .map(|a| a.account_id)
            .collect();

        for account in visible.accounts() {
            let related = matches.iter().any(|&m| {
                m == account.account_id
                    || find_ancestors(&accounts, m).contains(&account.account_id)
                    || find_descendants(&accounts, m).contains(&account.account_id)
            });
            assert!(related, "{} is unrelated to any match", account.label());
        }
    }

    #[test]
    fn test_example_from_two_account_chart() {
        let accounts = vec![
            Account::new(1, "1000", "Assets", 1),
            Account::new(2, "1010", "Cash", 1).with_parent(1),
        ];
        let visible = compute_visible_accounts("Cash", &accounts, None);

        assert_eq!(ids(&visible.accounts()), vec![1, 2]);
    }

    // ============================================================================
    // Account types
    // ============================================================================

    #[test]
    fn test_types_filtered_to_visible_accounts() {
        let (account_types, accounts) = create_test_chart();
        let visible = compute_visible_accounts("card", &accounts, None);
        let types = visible_account_types(&visible, &account_types);

        assert_eq!(types.len(), 1);
        assert_eq!(types[0].account_type_code, "L");
    }

    #[test]
    fn test_types_unfiltered_without_query() {
        let (account_types, accounts) = create_test_chart();
        let visible = compute_visible_accounts("", &accounts, None);

        // Expenses has no accounts but filtering is off, so it stays
        assert_eq!(visible_account_types(&visible, &account_types).len(), 3);
    }

    // ============================================================================
    // Tree walks
    // ============================================================================

    #[test]
    fn test_find_ancestors_root_first() {
        let (_, accounts) = create_test_chart();
        assert_eq!(find_ancestors(&accounts, id(5)), vec![id(1), id(2), id(4)]);
        assert!(find_ancestors(&accounts, id(1)).is_empty());
    }

    #[test]
    fn test_find_ancestors_stops_at_missing_parent() {
        let accounts = vec![
            Account::new(1, "1000", "Assets", 1).with_parent(42),
            Account::new(2, "1010", "Cash", 1).with_parent(1),
        ];
        assert_eq!(find_ancestors(&accounts, id(2)), vec![id(1)]);
    }

    #[test]
    fn test_find_ancestors_terminates_on_cycle() {
        let accounts = vec![
            Account::new(1, "1000", "Loop A", 1).with_parent(2),
            Account::new(2, "2000", "Loop B", 1).with_parent(1),
        ];
        assert_eq!(find_ancestors(&accounts, id(1)).len(), 2);
    }

    #[test]
    fn test_find_descendants_all_depths() {
        let (_, accounts) = create_test_chart();
        assert_eq!(
            find_descendants(&accounts, id(2)),
            vec![id(3), id(4), id(5), id(6)]
        );
        assert!(find_descendants(&accounts, id(3)).is_empty());
    }

    #[test]
    fn test_find_descendants_terminates_on_cycle() {
        let accounts = vec![
            Account::new(1, "1000", "Loop A", 1).with_parent(2),
            Account::new(2, "2000", "Loop B", 1).with_parent(1),
        ];
        assert_eq!(find_descendants(&accounts, id(1)), vec![id(2)]);
    }

    // ============================================================================
    // Case-insensitive search
    // ============================================================================

    #[test]
    fn test_find_ignore_case() {
        assert_eq!(find_ignore_case("1010 - Cash", "cash"), Some(7..11));
        assert_eq!(find_ignore_case("1010 - Cash", "10"), Some(0..2));
        assert_eq!(find_ignore_case("1010 - Cash", "bank"), None);
        assert_eq!(find_ignore_case("abc", ""), Some(0..0));
        assert_eq!(find_ignore_case("", "a"), None);
    }

    #[test]
    fn test_find_ignore_case_multibyte() {
        let label = "4100 - Ärzte";
        let range = find_ignore_case(label, "ärz").unwrap();
        assert_eq!(&label[range], "Ärz");
    }

    #[test]
    fn test_find_ignore_case_multi_char_lowercase() {
        // 'İ' lowercases to "i\u{307}"; a match inside it covers the whole char
        assert_eq!(find_ignore_case("100 - İzmir", "i"), Some(6..8));
        assert_eq!(find_ignore_case("100 - İzmir", "i\u{307}z"), Some(6..9));
        assert_eq!(find_ignore_case("100 - İzmir", "mir"), Some(9..12));
    }

    #[test]
    fn test_match_through_multi_char_lowercase() {
        let accounts = vec![Account::new(1, "3000", "İstanbul", 1)];

        let visible = compute_visible_accounts("i", &accounts, None);

        assert!(visible.is_filtered());
        assert_eq!(visible.len(), 1);
    }
}
