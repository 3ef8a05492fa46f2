//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event to message mapping
//! - `picker`: Currency picker and focus handlers

pub(crate) mod keys;
pub(crate) mod picker;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use fxconv_core::CurrencyCode;

use crate::message::Message;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch the currency list in the background
    LoadCatalog,

    /// Fetch the rate table for `base`; the answer carries `request_id`
    FetchRates {
        request_id: u64,
        base: CurrencyCode,
    },

    /// Replace the countdown ticker with one sending `ticks` ticks for `generation`
    StartCountdown { generation: u64, ticks: u32 },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
