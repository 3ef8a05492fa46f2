//! # fxconv-core - Core Domain Types
//!
//! Foundation crate for the currency converter. Provides domain types, the
//! amount grammar, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`CurrencyCode`] - Validated, uppercase currency identifier ("USD")
//! - [`CurrencyCatalog`] - Code to display-name mapping used for labels
//! - [`CurrencyOption`] - A single picker entry derived from the catalog
//! - [`RateTable`] - Rates relative to a base currency
//!
//! ### Amount Input (`amount`)
//! - [`is_valid_amount()`] - Incremental signed-decimal grammar check
//! - [`parse_amount()`] - Numeric value of an amount string, if any
//! - [`format_converted()`] - Two-decimal display of a converted value
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use fxconv_core::prelude::*;
//! ```

pub mod amount;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all converter crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use amount::{format_converted, is_valid_amount, parse_amount};
pub use error::{Error, Result, ResultExt};
pub use types::{CurrencyCatalog, CurrencyCode, CurrencyOption, RateTable};
