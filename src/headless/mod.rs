//! Headless mode - NDJSON events instead of a TUI
//!
//! Commands are read line by line from stdin and every observable change is
//! written to stdout as one JSON object per line. Each object carries an
//! `"event"` field naming its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"ready","source":"GBP","target":"USD","amount":"100","timestamp":1704700001000}
//! {"event":"catalog_loaded","count":170,"timestamp":1704700001200}
//! {"event":"state","amount":"100","source":"GBP","target":"USD","error":null,"result":"100 GBP is equivalent to 126.74 USD","converted":"126.74","expires_in":10,"convert_enabled":true,"converting":false,"timestamp":1704700002000}
//! {"event":"result_expired","timestamp":1704700012000}
//! ```

pub mod command;
pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use fxconv_app::{AppState, ConversionView};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Engine created; commands are accepted from here on
    Ready {
        source: String,
        target: String,
        amount: String,
        timestamp: i64,
    },

    /// Currency list arrived
    CatalogLoaded { count: usize, timestamp: i64 },

    /// The form changed
    State {
        #[serde(flatten)]
        view: ConversionView,
        timestamp: i64,
    },

    /// The shown result's countdown ran out
    ResultExpired { timestamp: i64 },

    /// A stdin line that is not a command
    UnknownCommand { input: String, timestamp: i64 },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn ready(state: &AppState) -> Self {
        Self::Ready {
            source: state.conversion.source.to_string(),
            target: state.conversion.target.to_string(),
            amount: state.conversion.amount_text.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn catalog_loaded(count: usize) -> Self {
        Self::CatalogLoaded {
            count,
            timestamp: Self::now(),
        }
    }

    pub fn state(view: ConversionView) -> Self {
        Self::State {
            view,
            timestamp: Self::now(),
        }
    }

    pub fn result_expired() -> Self {
        Self::ResultExpired {
            timestamp: Self::now(),
        }
    }

    pub fn unknown_command(input: &str) -> Self {
        Self::UnknownCommand {
            input: input.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}
