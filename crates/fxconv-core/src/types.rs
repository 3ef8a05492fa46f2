//! Core domain types: currency codes, the currency catalog, and rate tables

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ─────────────────────────────────────────────────────────────────────────────
// CurrencyCode
// ─────────────────────────────────────────────────────────────────────────────

/// A currency identifier such as `"USD"` or `"EUR"`.
///
/// Codes are normalised to uppercase ASCII. Besides ISO-4217 codes the rate
/// services also publish things like `"BTC"` or `"XAU"`, so only the character
/// set and a length bound are enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Longest code accepted from a service or from the user.
    pub const MAX_LEN: usize = 10;

    /// Parse and normalise a currency code.
    ///
    /// Surrounding whitespace is ignored; the result is uppercase.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let valid = !trimmed.is_empty()
            && trimmed.len() <= Self::MAX_LEN
            && trimmed.chars().all(|c| c.is_ascii_alphanumeric());

        if !valid {
            return Err(Error::invalid_currency_code(raw));
        }

        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CurrencyCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CurrencyCatalog
// ─────────────────────────────────────────────────────────────────────────────

/// One selectable entry in a currency picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyOption {
    pub code: CurrencyCode,
    /// `"CODE (Name)"`
    pub label: String,
}

/// Mapping from currency code to human-readable name.
///
/// The catalog only ever labels things. A code missing from it is not an
/// error: its name is simply empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyCatalog {
    entries: BTreeMap<CurrencyCode, String>,
}

impl CurrencyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.entries.contains_key(code)
    }

    /// Display name for a code, if the catalog knows it
    pub fn name(&self, code: &CurrencyCode) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// Display name for a code, or `""` when unknown
    pub fn label(&self, code: &CurrencyCode) -> &str {
        self.name(code).unwrap_or("")
    }

    /// Label used for a currently selected currency: `"CODE/Name"`
    pub fn selection_label(&self, code: &CurrencyCode) -> String {
        format!("{}/{}", code, self.label(code))
    }

    /// Picker options in code order, labelled `"CODE (Name)"`
    pub fn options(&self) -> Vec<CurrencyOption> {
        self.entries
            .iter()
            .map(|(code, name)| CurrencyOption {
                code: code.clone(),
                label: format!("{} ({})", code, name),
            })
            .collect()
    }
}

impl FromIterator<(CurrencyCode, String)> for CurrencyCatalog {
    fn from_iter<I: IntoIterator<Item = (CurrencyCode, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RateTable
// ─────────────────────────────────────────────────────────────────────────────

/// Exchange rates relative to a base currency.
///
/// A rate expresses one unit of `base` in units of the keyed currency.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    base: CurrencyCode,
    rates: HashMap<CurrencyCode, f64>,
}

impl RateTable {
    pub fn new(base: CurrencyCode, rates: HashMap<CurrencyCode, f64>) -> Self {
        Self { base, rates }
    }

    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Usable rate for `code`.
    ///
    /// Zero and non-finite entries are treated as missing, and so are
    /// negative ones. Rejecting negatives is stricter than a plain truthiness
    /// check on the rate, on purpose: a negative rate would flip the sign of
    /// every converted amount.
    pub fn rate(&self, code: &CurrencyCode) -> Option<f64> {
        self.rates
            .get(code)
            .copied()
            .filter(|rate| rate.is_finite() && *rate > 0.0)
    }
}
