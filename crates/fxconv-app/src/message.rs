//! Message types for the application (TEA pattern)

use fxconv_core::{CurrencyCatalog, CurrencyCode, RateTable};

use crate::input_key::InputKey;
use crate::picker::PickerSide;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from the terminal
    Key(InputKey),

    /// Tick event for periodic updates (busy marker animation)
    Tick,

    /// Quit (Esc, Ctrl+C, signal handler, headless `quit`)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Catalog Messages
    // ─────────────────────────────────────────────────────────
    /// Fetch the currency list (honoured once per engine)
    LoadCatalog,
    /// Currency list fetched
    CatalogLoaded(CurrencyCatalog),
    /// Currency list fetch failed; logged only
    CatalogLoadFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Conversion Messages
    // ─────────────────────────────────────────────────────────
    /// Amount field text replaced
    AmountChanged(String),
    /// Source selection; `None` is ignored
    SetSource(Option<CurrencyCode>),
    /// Target selection; `None` is ignored
    SetTarget(Option<CurrencyCode>),
    /// Exchange source and target
    Swap,
    /// Convert the current amount
    Convert,
    /// Rate table arrived for a request
    RatesFetched { request_id: u64, table: RateTable },
    /// Rate request failed; logged only
    RatesFetchFailed { request_id: u64, error: String },
    /// One second elapsed on the countdown ticker
    CountdownTick { generation: u64 },

    // ─────────────────────────────────────────────────────────
    // Focus & Picker Messages
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    OpenPicker(PickerSide),
    ClosePicker,
    PickerInput(char),
    PickerBackspace,
    PickerUp,
    PickerDown,
    /// Select the highlighted option
    PickerConfirm,
}
