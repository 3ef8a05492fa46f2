//! Main update function - handles state transitions (TEA pattern)

use fxconv_core::prelude::*;

use crate::conversion::{ConversionOutcome, TickOutcome};
use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{keys::handle_key, picker, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            if state.conversion.is_converting() {
                state.animation_frame = state.animation_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Catalog Messages
        // ─────────────────────────────────────────────────────────
        Message::LoadCatalog => {
            if state.catalog_requested {
                debug!("Currency list already requested");
                return UpdateResult::none();
            }
            state.catalog_requested = true;
            UpdateResult::action(UpdateAction::LoadCatalog)
        }

        Message::CatalogLoaded(catalog) => {
            info!("Loaded {} currencies", catalog.len());
            state.catalog = catalog;
            UpdateResult::none()
        }

        Message::CatalogLoadFailed { error } => {
            warn!("Failed to load currency list: {}", error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Conversion Messages
        // ─────────────────────────────────────────────────────────
        Message::AmountChanged(text) => {
            state.conversion.set_amount(text);
            UpdateResult::none()
        }

        Message::SetSource(Some(code)) => {
            debug!("Source currency set to {}", code);
            state.conversion.set_source(code);
            UpdateResult::none()
        }

        Message::SetTarget(Some(code)) => {
            debug!("Target currency set to {}", code);
            state.conversion.set_target(code);
            UpdateResult::none()
        }

        Message::SetSource(None) | Message::SetTarget(None) => UpdateResult::none(),

        Message::Swap => {
            state.conversion.swap();
            UpdateResult::none()
        }

        Message::Convert => match state.conversion.begin_conversion() {
            Some(pending) => {
                debug!(
                    "Converting {} {} to {} (request {})",
                    pending.amount_text, pending.source, pending.target, pending.id
                );
                UpdateResult::action(UpdateAction::FetchRates {
                    request_id: pending.id,
                    base: pending.source,
                })
            }
            None => UpdateResult::none(),
        },

        Message::RatesFetched { request_id, table } => {
            let expiry = state.settings.conversion.expiry();
            match state
                .conversion
                .complete_conversion(request_id, &table, expiry)
            {
                ConversionOutcome::Converted { generation } => {
                    UpdateResult::action(UpdateAction::StartCountdown {
                        generation,
                        ticks: expiry,
                    })
                }
                ConversionOutcome::RateUnavailable => {
                    info!(
                        "No {} rate in the {} table",
                        state.conversion.target,
                        table.base()
                    );
                    UpdateResult::none()
                }
                ConversionOutcome::Stale => {
                    debug!("Ignoring stale rate response {}", request_id);
                    UpdateResult::none()
                }
            }
        }

        Message::RatesFetchFailed { request_id, error } => {
            if state.conversion.fail_conversion(request_id) {
                warn!("Rate request {} failed: {}", request_id, error);
            } else {
                debug!("Ignoring failure of stale rate request {}", request_id);
            }
            UpdateResult::none()
        }

        Message::CountdownTick { generation } => {
            if state.conversion.tick(generation) == TickOutcome::Expired {
                debug!("Conversion result expired");
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus & Picker Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => picker::handle_focus_next(state),
        Message::FocusPrev => picker::handle_focus_prev(state),
        Message::OpenPicker(side) => picker::handle_open(state, side),
        Message::ClosePicker => picker::handle_close(state),
        Message::PickerInput(c) => picker::handle_input(state, c),
        Message::PickerBackspace => picker::handle_backspace(state),
        Message::PickerUp => picker::handle_up(state),
        Message::PickerDown => picker::handle_down(state),
        Message::PickerConfirm => picker::handle_confirm(state),
    }
}
