//! fxconv-rates - Currency catalog and exchange-rate services
//!
//! Talks to the two external HTTP services the converter depends on:
//! - the currency list (code to display name), fetched once at startup
//! - the rate table for a base currency, fetched on every conversion
//!
//! Consumers program against the [`RateSource`] trait; [`HttpRateSource`] is
//! the production implementation.

pub mod client;
pub mod endpoints;
pub mod protocol;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{HttpRateSource, LocalRateSource, RateSource, DEFAULT_TIMEOUT};
pub use endpoints::{Endpoints, DEFAULT_CATALOG_URL, DEFAULT_RATES_URL};
pub use protocol::{decode_catalog, decode_rates};
