//! Conversion state machine
//!
//! Owns everything the form shows: the amount text, the two selections, the
//! inline error, the last result and its expiry countdown, plus the request
//! currently in flight. The reducer drives it; nothing here does I/O.
//!
//! Rate responses are matched against the in-flight request id. Any change of
//! intent (amount edit, selection, swap, a newer convert) drops the pending
//! request, so a late response for an old intent is ignored instead of
//! overwriting newer state.

use fxconv_core::prelude::*;
use fxconv_core::{format_converted, is_valid_amount, parse_amount, CurrencyCode, RateTable};

/// Error shown inline under the amount field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InlineError {
    /// The amount text fails the grammar; blocks conversion
    #[error("{0} is not a valid number")]
    InvalidAmount(String),

    /// The rate table had no usable rate for the target
    #[error("Unable to convert currency")]
    RateUnavailable,
}

/// A successful conversion, with the inputs it was computed from
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedAmount {
    pub amount_text: String,
    pub source: CurrencyCode,
    pub target: CurrencyCode,
    pub rate: f64,
    pub value: f64,
}

impl ConvertedAmount {
    /// Converted value with two decimals
    pub fn formatted(&self) -> String {
        format_converted(self.value)
    }

    /// `"100 USD is equivalent to 83.30 EUR"`
    pub fn summary(&self) -> String {
        format!(
            "{} {} is equivalent to {} {}",
            self.amount_text,
            self.source,
            self.formatted(),
            self.target
        )
    }
}

/// Result expiry countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Countdown {
    #[default]
    Idle,
    /// `generation` identifies the ticker feeding this countdown
    Showing { remaining: u32, generation: u64 },
}

impl Countdown {
    pub fn remaining(&self) -> Option<u32> {
        match self {
            Countdown::Idle => None,
            Countdown::Showing { remaining, .. } => Some(*remaining),
        }
    }

    pub fn generation(&self) -> Option<u64> {
        match self {
            Countdown::Idle => None,
            Countdown::Showing { generation, .. } => Some(*generation),
        }
    }
}

/// The conversion a rate request was issued for
#[derive(Debug, Clone, PartialEq)]
pub struct PendingConversion {
    pub id: u64,
    pub amount_text: String,
    pub amount: f64,
    pub source: CurrencyCode,
    pub target: CurrencyCode,
}

/// What applying a rate response did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// Response for a request that is no longer pending
    Stale,
    /// Result stored; a countdown with this generation must be started
    Converted { generation: u64 },
    /// Target missing from the table
    RateUnavailable,
}

/// What a countdown tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick from a replaced ticker, or no countdown running
    Ignored,
    Ticked { remaining: u32 },
    /// Reached zero; the result was cleared
    Expired,
}

#[derive(Debug, Clone)]
pub struct ConversionState {
    /// Latest keystroke, valid or not
    pub amount_text: String,
    pub source: CurrencyCode,
    pub target: CurrencyCode,
    pub error: Option<InlineError>,
    pub converted: Option<ConvertedAmount>,
    pub countdown: Countdown,
    pub pending: Option<PendingConversion>,
    next_request_id: u64,
    next_generation: u64,
}

impl ConversionState {
    pub fn new(source: CurrencyCode, target: CurrencyCode, amount_text: impl Into<String>) -> Self {
        let mut state = Self {
            amount_text: String::new(),
            source,
            target,
            error: None,
            converted: None,
            countdown: Countdown::Idle,
            pending: None,
            next_request_id: 1,
            next_generation: 1,
        };
        state.set_amount(amount_text.into());
        state
    }

    /// Conversion is blocked exactly while the amount is invalid
    pub fn conversion_disabled(&self) -> bool {
        matches!(self.error, Some(InlineError::InvalidAmount(_)))
    }

    pub fn is_converting(&self) -> bool {
        self.pending.is_some()
    }

    /// The result, while its countdown is running
    pub fn visible_result(&self) -> Option<&ConvertedAmount> {
        match self.countdown {
            Countdown::Showing { remaining, .. } if remaining > 0 => self.converted.as_ref(),
            _ => None,
        }
    }

    /// Seconds left on the visible result
    pub fn expires_in(&self) -> Option<u32> {
        self.visible_result().and(self.countdown.remaining())
    }

    /// Store new amount text and revalidate it
    pub fn set_amount(&mut self, raw: String) {
        self.error = if is_valid_amount(&raw) {
            None
        } else {
            Some(InlineError::InvalidAmount(raw.clone()))
        };
        self.amount_text = raw;
        self.converted = None;
        self.pending = None;
    }

    pub fn set_source(&mut self, code: CurrencyCode) {
        self.source = code;
        self.selection_changed();
    }

    pub fn set_target(&mut self, code: CurrencyCode) {
        self.target = code;
        self.selection_changed();
    }

    fn selection_changed(&mut self) {
        if self.error == Some(InlineError::RateUnavailable) {
            self.error = None;
        }
        self.pending = None;
    }

    /// Exchange source and target; the old result no longer applies
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
        self.converted = None;
        self.pending = None;
    }

    /// Start a conversion, returning the request to issue.
    ///
    /// `None` while conversion is disabled or the text holds no number yet.
    pub fn begin_conversion(&mut self) -> Option<PendingConversion> {
        if self.conversion_disabled() {
            debug!("Convert ignored: amount {:?} is invalid", self.amount_text);
            return None;
        }

        let Some(amount) = parse_amount(&self.amount_text) else {
            debug!("Convert ignored: amount {:?} has no value", self.amount_text);
            return None;
        };

        let id = self.next_request_id;
        self.next_request_id += 1;

        let pending = PendingConversion {
            id,
            amount_text: self.amount_text.clone(),
            amount,
            source: self.source.clone(),
            target: self.target.clone(),
        };
        self.pending = Some(pending.clone());
        Some(pending)
    }

    /// Apply a rate table fetched for `request_id`
    pub fn complete_conversion(
        &mut self,
        request_id: u64,
        table: &RateTable,
        expiry_secs: u32,
    ) -> ConversionOutcome {
        let Some(pending) = self.take_pending(request_id) else {
            return ConversionOutcome::Stale;
        };

        match table.rate(&pending.target) {
            Some(rate) => {
                let generation = self.next_generation;
                self.next_generation += 1;

                self.converted = Some(ConvertedAmount {
                    value: pending.amount * rate,
                    amount_text: pending.amount_text,
                    source: pending.source,
                    target: pending.target,
                    rate,
                });
                self.error = None;
                self.countdown = Countdown::Showing {
                    remaining: expiry_secs,
                    generation,
                };
                ConversionOutcome::Converted { generation }
            }
            None => {
                self.error = Some(InlineError::RateUnavailable);
                self.converted = None;
                ConversionOutcome::RateUnavailable
            }
        }
    }

    /// Forget `request_id` after a failed fetch. Returns false if it was stale.
    pub fn fail_conversion(&mut self, request_id: u64) -> bool {
        self.take_pending(request_id).is_some()
    }

    fn take_pending(&mut self, request_id: u64) -> Option<PendingConversion> {
        if self.pending.as_ref().is_some_and(|p| p.id == request_id) {
            self.pending.take()
        } else {
            None
        }
    }

    /// One second elapsed on the ticker with `generation`
    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        let Countdown::Showing {
            remaining,
            generation: current,
        } = self.countdown
        else {
            return TickOutcome::Ignored;
        };

        if generation != current {
            return TickOutcome::Ignored;
        }

        let remaining = remaining.saturating_sub(1);
        if remaining == 0 {
            self.countdown = Countdown::Idle;
            self.converted = None;
            TickOutcome::Expired
        } else {
            self.countdown = Countdown::Showing {
                remaining,
                generation,
            };
            TickOutcome::Ticked { remaining }
        }
    }
}
