//! Events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless front end turns them into NDJSON.

use serde::Serialize;

use crate::conversion::Countdown;
use crate::state::AppState;

/// What a front end shows for the conversion form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionView {
    pub amount: String,
    pub source: String,
    pub target: String,
    /// Inline error message
    pub error: Option<String>,
    /// `"100 USD is equivalent to 83.30 EUR"` while visible
    pub result: Option<String>,
    /// Converted value with two decimals, while visible
    pub converted: Option<String>,
    pub expires_in: Option<u32>,
    pub convert_enabled: bool,
    pub converting: bool,
}

impl ConversionView {
    pub fn capture(state: &AppState) -> Self {
        let conversion = &state.conversion;
        let visible = conversion.visible_result();

        Self {
            amount: conversion.amount_text.clone(),
            source: conversion.source.to_string(),
            target: conversion.target.to_string(),
            error: conversion.error.as_ref().map(ToString::to_string),
            result: visible.map(|r| r.summary()),
            converted: visible.map(|r| r.formatted()),
            expires_in: conversion.expires_in(),
            convert_enabled: !conversion.conversion_disabled(),
            converting: conversion.is_converting(),
        }
    }
}

/// Domain events emitted by the Engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The currency list arrived
    CatalogLoaded { count: usize },

    /// The observable form state changed
    StateChanged(ConversionView),

    /// A result's countdown reached zero
    ResultExpired,

    /// The engine is shutting down
    Shutdown,
}

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing and compared after it.
#[derive(Debug, Clone)]
pub(crate) struct StateSnapshot {
    catalog_len: usize,
    countdown_running: bool,
    result_visible: bool,
    view: ConversionView,
}

impl StateSnapshot {
    pub(crate) fn capture(state: &AppState) -> Self {
        Self {
            catalog_len: state.catalog.len(),
            countdown_running: state.conversion.countdown != Countdown::Idle,
            result_visible: state.conversion.visible_result().is_some(),
            view: ConversionView::capture(state),
        }
    }

    /// Events describing the change from `self` to `post`, in emission order
    pub(crate) fn diff(&self, post: &StateSnapshot) -> Vec<EngineEvent> {
        let mut events = Vec::new();

        if post.catalog_len != self.catalog_len {
            events.push(EngineEvent::CatalogLoaded {
                count: post.catalog_len,
            });
        }

        // Only a final tick stops the countdown. A swap or an edit hides the
        // result while its ticker keeps running, which is not an expiry.
        let countdown_ended = self.countdown_running && !post.countdown_running;
        if countdown_ended && self.result_visible && !post.result_visible {
            events.push(EngineEvent::ResultExpired);
        }

        if post.view != self.view {
            events.push(EngineEvent::StateChanged(post.view.clone()));
        }

        events
    }
}
