//! Tests for handler module

use std::collections::HashMap;

use super::*;
use crate::conversion::{Countdown, InlineError};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::picker::PickerSide;
use crate::state::{AppPhase, AppState, Focus};
use fxconv_core::{CurrencyCatalog, RateTable};

fn code(s: &str) -> CurrencyCode {
    CurrencyCode::parse(s).unwrap()
}

fn usd_rates() -> RateTable {
    RateTable::new(
        code("USD"),
        HashMap::from([(code("EUR"), 0.833041), (code("USD"), 1.0)]),
    )
}

fn eur_rates() -> RateTable {
    RateTable::new(
        code("EUR"),
        HashMap::from([(code("USD"), 1.20042), (code("EUR"), 1.0)]),
    )
}

fn catalog() -> CurrencyCatalog {
    [
        (code("EUR"), "Euro".to_string()),
        (code("GBP"), "British Pound Sterling".to_string()),
        (code("USD"), "United States Dollar".to_string()),
    ]
    .into_iter()
    .collect()
}

/// State converting USD to EUR with the amount "100"
fn usd_eur_state() -> AppState {
    let mut state = AppState::new();
    update(&mut state, Message::SetSource(Some(code("USD"))));
    update(&mut state, Message::SetTarget(Some(code("EUR"))));
    state
}

/// Run `message` and any follow-up messages, returning the actions produced
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

/// Convert and answer the resulting fetch with `table`
fn convert_with(state: &mut AppState, table: RateTable) -> Option<UpdateAction> {
    let Some(UpdateAction::FetchRates { request_id, .. }) = update(state, Message::Convert).action
    else {
        return None;
    };
    update(state, Message::RatesFetched { request_id, table }).action
}

// ─────────────────────────────────────────────────────────
// Lifecycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    update(&mut state, Message::Quit);
    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_quits_even_with_picker_open() {
    let mut state = AppState::new();
    update(&mut state, Message::OpenPicker(PickerSide::Source));

    let msg = handle_key(&state, InputKey::CharCtrl('c'));

    assert!(matches!(msg, Some(Message::Quit)));
}

// ─────────────────────────────────────────────────────────
// Catalog
// ─────────────────────────────────────────────────────────

#[test]
fn test_catalog_is_requested_once() {
    let mut state = AppState::new();

    let first = update(&mut state, Message::LoadCatalog);
    let second = update(&mut state, Message::LoadCatalog);

    assert_eq!(first.action, Some(UpdateAction::LoadCatalog));
    assert!(second.action.is_none());
}

#[test]
fn test_catalog_loaded_labels_selections() {
    let mut state = usd_eur_state();
    assert_eq!(state.source_label(), "USD/");

    update(&mut state, Message::CatalogLoaded(catalog()));

    assert_eq!(state.source_label(), "USD/United States Dollar");
    assert_eq!(state.target_label(), "EUR/Euro");
}

#[test]
fn test_catalog_failure_is_silent() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::CatalogLoadFailed {
            error: "timeout".into(),
        },
    );

    assert!(state.catalog.is_empty());
    assert_eq!(state.conversion.error, None);
    assert_eq!(state.target_label(), "USD/");
}

// ─────────────────────────────────────────────────────────
// Conversion
// ─────────────────────────────────────────────────────────

#[test]
fn test_convert_usd_to_eur() {
    let mut state = usd_eur_state();

    let action = convert_with(&mut state, usd_rates());

    assert!(matches!(
        action,
        Some(UpdateAction::StartCountdown { ticks: 10, .. })
    ));
    let result = state.conversion.visible_result().unwrap();
    assert_eq!(result.formatted(), "83.30");
    assert_eq!(result.summary(), "100 USD is equivalent to 83.30 EUR");
    assert_eq!(state.conversion.expires_in(), Some(10));
}

#[test]
fn test_convert_issues_fetch_for_source() {
    let mut state = usd_eur_state();

    let result = update(&mut state, Message::Convert);

    assert!(matches!(
        result.action,
        Some(UpdateAction::FetchRates { ref base, .. }) if base.as_str() == "USD"
    ));
    assert!(state.conversion.is_converting());
}

#[test]
fn test_swap_then_convert() {
    let mut state = usd_eur_state();
    convert_with(&mut state, usd_rates());

    update(&mut state, Message::Swap);
    assert!(state.conversion.visible_result().is_none());
    assert_eq!(state.conversion.source, code("EUR"));
    assert_eq!(state.conversion.target, code("USD"));

    convert_with(&mut state, eur_rates());
    assert_eq!(
        state.conversion.visible_result().unwrap().formatted(),
        "120.04"
    );
}

#[test]
fn test_swap_does_not_fetch() {
    let mut state = usd_eur_state();
    let result = update(&mut state, Message::Swap);
    assert!(result.action.is_none());
}

#[test]
fn test_invalid_amount_blocks_convert() {
    let mut state = usd_eur_state();

    update(&mut state, Message::AmountChanged("12a".into()));

    assert_eq!(state.conversion.amount_text, "12a");
    assert_eq!(
        state.conversion.error.as_ref().map(ToString::to_string),
        Some("12a is not a valid number".to_string())
    );
    assert!(state.conversion.conversion_disabled());
    assert!(update(&mut state, Message::Convert).action.is_none());

    update(&mut state, Message::AmountChanged("12".into()));
    assert_eq!(state.conversion.error, None);
    assert!(update(&mut state, Message::Convert).action.is_some());
}

#[test]
fn test_amount_change_clears_result() {
    let mut state = usd_eur_state();
    convert_with(&mut state, usd_rates());

    update(&mut state, Message::AmountChanged("1000".into()));

    assert!(state.conversion.visible_result().is_none());
}

#[test]
fn test_rate_not_found_shows_error() {
    let mut state = usd_eur_state();
    convert_with(&mut state, usd_rates());
    update(&mut state, Message::SetTarget(Some(code("JPY"))));

    let action = convert_with(&mut state, usd_rates());

    assert!(action.is_none());
    assert_eq!(state.conversion.error, Some(InlineError::RateUnavailable));
    assert!(state.conversion.visible_result().is_none());
    assert!(!state.conversion.conversion_disabled());
    assert_eq!(state.conversion.amount_text, "100");

    // Picking another target clears the error for a retry
    update(&mut state, Message::SetTarget(Some(code("EUR"))));
    assert_eq!(state.conversion.error, None);
}

#[test]
fn test_fetch_failure_is_logged_only() {
    let mut state = usd_eur_state();
    let Some(UpdateAction::FetchRates { request_id, .. }) =
        update(&mut state, Message::Convert).action
    else {
        panic!("expected fetch");
    };

    update(
        &mut state,
        Message::RatesFetchFailed {
            request_id,
            error: "connection refused".into(),
        },
    );

    assert_eq!(state.conversion.error, None);
    assert!(state.conversion.converted.is_none());
    assert!(!state.conversion.is_converting());
}

#[test]
fn test_response_after_selection_change_is_ignored() {
    let mut state = usd_eur_state();
    let Some(UpdateAction::FetchRates { request_id, .. }) =
        update(&mut state, Message::Convert).action
    else {
        panic!("expected fetch");
    };

    update(&mut state, Message::SetSource(Some(code("GBP"))));
    let result = update(
        &mut state,
        Message::RatesFetched {
            request_id,
            table: usd_rates(),
        },
    );

    assert!(result.action.is_none());
    assert!(state.conversion.converted.is_none());
}

#[test]
fn test_none_selection_is_noop() {
    let mut state = usd_eur_state();
    update(&mut state, Message::SetSource(None));
    update(&mut state, Message::SetTarget(None));
    assert_eq!(state.conversion.source, code("USD"));
    assert_eq!(state.conversion.target, code("EUR"));
}

#[test]
fn test_selection_keeps_result_and_never_fetches() {
    let mut state = usd_eur_state();
    convert_with(&mut state, usd_rates());

    let result = update(&mut state, Message::SetSource(Some(code("GBP"))));

    assert!(result.action.is_none());
    let shown = state.conversion.visible_result().unwrap();
    assert_eq!(shown.summary(), "100 USD is equivalent to 83.30 EUR");
}

// ─────────────────────────────────────────────────────────
// Countdown
// ─────────────────────────────────────────────────────────

#[test]
fn test_countdown_ticks_to_expiry() {
    let mut state = usd_eur_state();
    let Some(UpdateAction::StartCountdown { generation, ticks }) =
        convert_with(&mut state, usd_rates())
    else {
        panic!("expected countdown");
    };

    for _ in 1..ticks {
        update(&mut state, Message::CountdownTick { generation });
    }
    assert_eq!(state.conversion.expires_in(), Some(1));

    update(&mut state, Message::CountdownTick { generation });
    assert_eq!(state.conversion.countdown, Countdown::Idle);
    assert!(state.conversion.visible_result().is_none());
}

#[test]
fn test_configured_expiry() {
    let mut state = usd_eur_state();
    state.settings.conversion.expiry_secs = 3;

    let action = convert_with(&mut state, usd_rates());

    assert!(matches!(
        action,
        Some(UpdateAction::StartCountdown { ticks: 3, .. })
    ));
    assert_eq!(state.conversion.expires_in(), Some(3));
}

#[test]
fn test_stale_tick_is_ignored() {
    let mut state = usd_eur_state();
    let Some(UpdateAction::StartCountdown { generation: old, .. }) =
        convert_with(&mut state, usd_rates())
    else {
        panic!("expected countdown");
    };
    convert_with(&mut state, usd_rates());

    update(&mut state, Message::CountdownTick { generation: old });

    assert_eq!(state.conversion.expires_in(), Some(10));
}

// ─────────────────────────────────────────────────────────
// Keys, Focus & Picker
// ─────────────────────────────────────────────────────────

#[test]
fn test_typing_edits_amount() {
    let mut state = usd_eur_state();

    run(&mut state, Message::Key(InputKey::Backspace));
    run(&mut state, Message::Key(InputKey::Backspace));
    run(&mut state, Message::Key(InputKey::Char('5')));
    run(&mut state, Message::Key(InputKey::Char('x')));

    assert_eq!(state.conversion.amount_text, "15x");
    assert!(state.conversion.conversion_disabled());
}

#[test]
fn test_enter_in_amount_converts() {
    let mut state = usd_eur_state();
    let actions = run(&mut state, Message::Key(InputKey::Enter));
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::FetchRates { .. }]
    ));
}

#[test]
fn test_tab_cycles_focus() {
    let mut state = AppState::new();
    run(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.focus, Focus::Swap);
    run(&mut state, Message::Key(InputKey::BackTab));
    run(&mut state, Message::Key(InputKey::BackTab));
    assert_eq!(state.focus, Focus::Convert);
}

#[test]
fn test_ctrl_x_swaps_from_any_focus() {
    let mut state = usd_eur_state();
    state.focus = Focus::Convert;
    run(&mut state, Message::Key(InputKey::CharCtrl('x')));
    assert_eq!(state.conversion.source, code("EUR"));
}

#[test]
fn test_picker_selects_target() {
    let mut state = usd_eur_state();
    update(&mut state, Message::CatalogLoaded(catalog()));
    state.focus = Focus::Target;

    run(&mut state, Message::Key(InputKey::Enter));
    assert!(state.picker.is_some());

    for c in "gbp".chars() {
        run(&mut state, Message::Key(InputKey::Char(c)));
    }
    run(&mut state, Message::Key(InputKey::Enter));

    assert!(state.picker.is_none());
    assert_eq!(state.conversion.target, code("GBP"));
    assert_eq!(state.target_label(), "GBP/British Pound Sterling");
}

#[test]
fn test_picker_with_no_match_leaves_selection() {
    let mut state = usd_eur_state();
    update(&mut state, Message::CatalogLoaded(catalog()));
    update(&mut state, Message::OpenPicker(PickerSide::Source));

    run(&mut state, Message::PickerInput('q'));
    run(&mut state, Message::PickerConfirm);

    assert!(state.picker.is_none());
    assert_eq!(state.conversion.source, code("USD"));
}

#[test]
fn test_escape_closes_picker_before_quitting() {
    let mut state = AppState::new();
    update(&mut state, Message::OpenPicker(PickerSide::Target));

    run(&mut state, Message::Key(InputKey::Esc));
    assert!(state.picker.is_none());
    assert!(!state.should_quit());

    run(&mut state, Message::Key(InputKey::Esc));
    assert!(state.should_quit());
}

#[test]
fn test_tick_animates_only_while_converting() {
    let mut state = usd_eur_state();
    update(&mut state, Message::Tick);
    assert_eq!(state.animation_frame, 0);

    update(&mut state, Message::Convert);
    update(&mut state, Message::Tick);
    assert_eq!(state.animation_frame, 1);
}
