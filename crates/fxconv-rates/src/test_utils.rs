//! Test utilities for rate-source consumers
//!
//! Provides a canned [`RateSource`] plus helpers for building catalogs and
//! rate tables without a network.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use fxconv_core::{CurrencyCatalog, CurrencyCode, Error, RateTable, Result};

use crate::client::RateSource;

/// A call observed by [`StaticRateSource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceCall {
    Catalog,
    Rates(CurrencyCode),
}

/// Parses a currency code, panicking on invalid input.
pub fn code(raw: &str) -> CurrencyCode {
    CurrencyCode::parse(raw).expect("invalid test currency code")
}

/// Creates a small catalog with USD, EUR, GBP and JPY.
pub fn test_catalog() -> CurrencyCatalog {
    [
        ("EUR", "Euro"),
        ("GBP", "British Pound Sterling"),
        ("JPY", "Japanese Yen"),
        ("USD", "United States Dollar"),
    ]
    .into_iter()
    .map(|(c, name)| (code(c), name.to_string()))
    .collect()
}

/// Creates a rate table for `base`.
///
/// # Arguments
/// * `base` - Base currency code
/// * `rates` - `(code, rate)` pairs relative to `base`
pub fn test_rates(base: &str, rates: &[(&str, f64)]) -> RateTable {
    let rates = rates.iter().map(|(c, rate)| (code(c), *rate)).collect();
    RateTable::new(code(base), rates)
}

/// In-memory [`RateSource`] with canned answers.
///
/// Clones share the call log, so a test can hand one clone to the engine and
/// inspect the other.
#[derive(Debug, Clone)]
pub struct StaticRateSource {
    /// `None` makes catalog fetches fail
    catalog: Option<CurrencyCatalog>,
    tables: HashMap<CurrencyCode, RateTable>,
    delays: HashMap<CurrencyCode, Duration>,
    calls: Arc<Mutex<Vec<SourceCall>>>,
}

impl Default for StaticRateSource {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticRateSource {
    /// Source with [`test_catalog`] and tables for USD, EUR and GBP.
    ///
    /// 100 USD is 83.30 EUR, 100 EUR is 120.04 USD. JPY has a catalog entry
    /// but no table of its own, and no table lists it.
    pub fn new() -> Self {
        Self::empty()
            .with_catalog(test_catalog())
            .with_table(test_rates(
                "USD",
                &[("USD", 1.0), ("EUR", 0.833041), ("GBP", 0.789)],
            ))
            .with_table(test_rates(
                "EUR",
                &[("EUR", 1.0), ("USD", 1.20042), ("GBP", 0.8581)],
            ))
            .with_table(test_rates(
                "GBP",
                &[("GBP", 1.0), ("USD", 1.2674), ("EUR", 1.1653)],
            ))
    }

    /// Source where every call fails
    pub fn empty() -> Self {
        Self {
            catalog: None,
            tables: HashMap::new(),
            delays: HashMap::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_catalog(mut self, catalog: CurrencyCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn without_catalog(mut self) -> Self {
        self.catalog = None;
        self
    }

    pub fn with_table(mut self, table: RateTable) -> Self {
        self.tables.insert(table.base().clone(), table);
        self
    }

    /// Make fetches for `base` fail with a network error
    pub fn without_table(mut self, base: &str) -> Self {
        self.tables.remove(&code(base));
        self
    }

    /// Delay answers for `base` by `delay` (tokio time, so paused clocks apply)
    pub fn with_delay(mut self, base: &str, delay: Duration) -> Self {
        self.delays.insert(code(base), delay);
        self
    }

    /// Calls seen so far, in order
    pub fn calls(&self) -> Vec<SourceCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    /// Number of rate fetches seen so far
    pub fn rate_fetches(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, SourceCall::Rates(_)))
            .count()
    }

    fn record(&self, call: SourceCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl RateSource for StaticRateSource {
    async fn fetch_catalog(&self) -> Result<CurrencyCatalog> {
        self.record(SourceCall::Catalog);
        self.catalog
            .clone()
            .ok_or_else(|| Error::network("catalog service unreachable"))
    }

    async fn fetch_rates(&self, base: &CurrencyCode) -> Result<RateTable> {
        self.record(SourceCall::Rates(base.clone()));

        if let Some(delay) = self.delays.get(base).copied() {
            tokio::time::sleep(delay).await;
        }

        self.tables
            .get(base)
            .cloned()
            .ok_or_else(|| Error::network(format!("no rates for {}", base)))
    }
}
