use ledger_model::{Account, AccountId, AccountType, Chart};
use ledger_tui::input::{Key, KeyEvent};
use ledger_tui::settings::Settings;
use ledger_tui::state::{Focus, FormField, InputPhase};
use ledger_tui::testing::TestApp;

/// Two account types, each with a small tree
fn create_test_chart() -> Chart {
    Chart::new(
        vec![
            AccountType::new(1, "A", "Assets"),
            AccountType::new(2, "L", "Liabilities"),
        ],
        vec![
            Account::new(1, "1000", "Assets", 1),
            Account::new(2, "1010", "Cash", 1).with_parent(1),
            Account::new(3, "1020", "Bank", 1).with_parent(1),
            Account::new(4, "2000", "Liabilities", 2),
            Account::new(5, "2010", "Loans", 2).with_parent(4),
        ],
    )
}

fn ids(values: &[i64]) -> Vec<AccountId> {
    values.iter().copied().map(AccountId::new).collect()
}

fn focused_app() -> TestApp {
    let mut app = TestApp::with_chart(create_test_chart());
    app.send_key(Key::Tab);
    app
}

#[test]
fn test_quit_flow() {
    let mut app = TestApp::with_chart(create_test_chart());

    app.assert_not_quit();
    app.send_key(Key::Char('q'));
    app.assert_should_quit();
}

#[test]
fn test_ctrl_c_quits_while_typing() {
    let mut app = focused_app();
    app.type_text("ca");

    app.send_key_event(KeyEvent::with_ctrl(Key::Char('c')));

    app.assert_should_quit();
}

#[test]
fn test_tab_focuses_debit_and_opens_full_list() {
    let app = focused_app();

    assert_eq!(app.state().focused_field, Some(FormField::Debit));
    app.assert_dropdown_open(FormField::Debit);
    assert_eq!(
        app.dropdown_account_ids(FormField::Debit),
        ids(&[1, 2, 3, 4, 5])
    );
}

#[test]
fn test_typing_filters_with_ancestors() {
    let mut app = focused_app();

    app.type_text("Cash");

    assert_eq!(app.dropdown_account_ids(FormField::Debit), ids(&[1, 2]));
    assert_eq!(app.state().debit.phase(), InputPhase::Typing);
}

#[test]
fn test_typing_parent_surfaces_descendants() {
    let mut app = focused_app();

    app.type_text("liab");

    assert_eq!(app.dropdown_account_ids(FormField::Debit), ids(&[4, 5]));
}

#[test]
fn test_no_match_hides_dropdown() {
    let mut app = focused_app();

    app.type_text("zzz");

    assert!(app.dropdown_account_ids(FormField::Debit).is_empty());
}

#[test]
fn test_keyboard_pick_emits_one_change() {
    let mut app = focused_app();
    app.type_text("ban");

    // Visible: Assets, Bank
    app.send_keys(&[Key::Down, Key::Down, Key::Enter]);

    assert_eq!(app.changes().len(), 1);
    assert_eq!(app.changes()[0].input_id, "debit-account");
    assert_eq!(app.changes()[0].account_id, AccountId::new(3));
    assert_eq!(app.state().debit.text, "1020 - Bank");
    assert_eq!(app.state().debit.phase(), InputPhase::Selected);
    assert_eq!(app.state().debit_account_id, Some(AccountId::new(3)));
    app.assert_dropdown_closed(FormField::Debit);
    assert_eq!(app.state().debit.focus, Some(Focus::Field));
}

#[test]
fn test_selected_text_shows_full_list_again() {
    let mut app = focused_app();
    app.type_text("1010 - Cash");

    app.send_key(Key::Down);

    assert_eq!(app.state().debit.phase(), InputPhase::Selected);
    assert_eq!(
        app.dropdown_account_ids(FormField::Debit),
        ids(&[1, 2, 3, 4, 5])
    );
    // Typing an exact label is not a pick
    assert!(app.changes().is_empty());
}

#[test]
fn test_up_and_backspace_return_to_field() {
    let mut app = focused_app();
    app.send_keys(&[Key::Down, Key::Down]);
    assert_eq!(app.state().debit.focus, Some(Focus::Item(1)));

    app.send_key(Key::Up);
    assert_eq!(app.state().debit.focus, Some(Focus::Item(0)));

    app.send_key(Key::Backspace);
    assert_eq!(app.state().debit.focus, Some(Focus::Field));
    app.assert_dropdown_open(FormField::Debit);
}

#[test]
fn test_escape_closes_then_quits() {
    let mut app = focused_app();

    app.send_key(Key::Esc);
    app.assert_dropdown_closed(FormField::Debit);
    app.assert_not_quit();

    app.send_key(Key::Esc);
    app.assert_should_quit();
}

#[test]
fn test_tab_moves_focus_and_closes_previous_dropdown() {
    let mut app = focused_app();

    app.send_key(Key::Tab);

    assert_eq!(app.state().focused_field, Some(FormField::Credit));
    app.assert_dropdown_closed(FormField::Debit);
    app.assert_dropdown_open(FormField::Credit);
    assert!(!app.state().debit.has_pending_close());

    app.send_key(Key::BackTab);
    assert_eq!(app.state().focused_field, Some(FormField::Debit));
    app.assert_dropdown_closed(FormField::Credit);
}

#[test]
fn test_mouse_click_on_field_focuses_it() {
    let mut app = TestApp::with_chart(create_test_chart());

    // 80x24 viewport: credit input row at y=6, inputs start at x=18
    app.click(20, 6);

    assert_eq!(app.state().focused_field, Some(FormField::Credit));
    app.assert_dropdown_open(FormField::Credit);
}

#[test]
fn test_mouse_click_on_item_picks_it() {
    let mut app = focused_app();
    app.type_text("Cash");

    // Debit input at y=4; border y=5; header y=6; Assets y=7; Cash y=8
    app.click(25, 8);

    assert_eq!(app.changes().len(), 1);
    assert_eq!(app.changes()[0].account_id, AccountId::new(2));
    assert_eq!(app.state().debit.text, "1010 - Cash");
    app.assert_dropdown_closed(FormField::Debit);
    assert!(!app.state().debit.has_pending_close());
}

#[test]
fn test_mouse_click_on_header_keeps_dropdown_open() {
    let mut app = focused_app();

    app.click(25, 6);

    app.assert_dropdown_open(FormField::Debit);
    assert!(app.changes().is_empty());
}

#[test]
fn test_mouse_click_outside_blurs_form() {
    let mut app = focused_app();

    app.click(1, 1);

    assert_eq!(app.state().focused_field, None);
    app.assert_dropdown_closed(FormField::Debit);
    app.assert_not_quit();
}

#[test]
fn test_picks_in_both_fields() {
    let mut app = focused_app();
    app.type_text("cash");
    app.send_keys(&[Key::Down, Key::Down, Key::Enter]);

    app.send_key(Key::Tab);
    app.type_text("loans");
    app.send_keys(&[Key::Down, Key::Down, Key::Enter]);

    let picked: Vec<_> = app
        .changes()
        .iter()
        .map(|c| (c.input_id.as_str(), c.account_id))
        .collect();
    assert_eq!(
        picked,
        vec![
            ("debit-account", AccountId::new(2)),
            ("credit-account", AccountId::new(5)),
        ]
    );
    assert_eq!(
        app.state().chosen_account(FormField::Credit).map(|a| a.label()),
        Some("2010 - Loans".to_string())
    );
}

#[test]
fn test_dropdown_height_cap_limits_hit_area() {
    let settings = Settings {
        dropdown_height_percent: 30,
        ..Settings::default()
    };
    let mut app = TestApp::with_settings(create_test_chart(), &settings);
    app.resize(80, 20);
    app.send_key(Key::Tab);

    // 30% of 20 rows: border y=5 and y=10, rows y=6..=9
    app.click(25, 10);
    assert_eq!(app.state().focused_field, Some(FormField::Debit));

    app.click(25, 11);
    assert_eq!(app.state().focused_field, None);
    assert!(app.changes().is_empty());
}
