//! Response decoding for the catalog and rate services
//!
//! Both services are decoded leniently: entries that are not usable (a
//! non-string name, a non-numeric rate, a malformed code) are skipped with a
//! trace log instead of failing the whole response.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use fxconv_core::prelude::*;
use fxconv_core::{CurrencyCatalog, CurrencyCode, RateTable};

/// Body of the rate service response
#[derive(Debug, Deserialize)]
struct RatesResponse {
    /// Code to rate, relative to the requested base
    rates: Map<String, Value>,

    /// Base echoed by the service (not always present)
    #[serde(default)]
    base: Option<String>,
}

/// Decode a currency-list body: a JSON object of code to display name.
///
/// Members whose value is not a string are ignored, so a superset response
/// carrying extra metadata still yields a usable catalog.
pub fn decode_catalog(body: &str) -> Result<CurrencyCatalog> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Object(members) = value else {
        return Err(Error::decode("currency list is not a JSON object"));
    };

    let catalog: CurrencyCatalog = members
        .into_iter()
        .filter_map(|(key, value)| match (CurrencyCode::parse(&key), value) {
            (Ok(code), Value::String(name)) => Some((code, name)),
            (_, _) => {
                trace!("Skipping catalog member {:?}", key);
                None
            }
        })
        .collect();

    debug!("Decoded currency catalog with {} entries", catalog.len());
    Ok(catalog)
}

/// Decode a rate-service body for `base`.
///
/// Requires a `rates` object; every other top-level field is optional.
pub fn decode_rates(base: &CurrencyCode, body: &str) -> Result<RateTable> {
    let response: RatesResponse = serde_json::from_str(body)
        .map_err(|e| Error::decode(format!("rate response for {}: {}", base, e)))?;

    if let Some(echoed) = response.base.as_deref() {
        if !echoed.eq_ignore_ascii_case(base.as_str()) {
            warn!(
                "Rate service answered with base {} for a {} request",
                echoed, base
            );
        }
    }

    let rates: HashMap<CurrencyCode, f64> = response
        .rates
        .into_iter()
        .filter_map(|(key, value)| match (CurrencyCode::parse(&key), value.as_f64()) {
            (Ok(code), Some(rate)) => Some((code, rate)),
            (_, _) => {
                trace!("Skipping rate member {:?}", key);
                None
            }
        })
        .collect();

    Ok(RateTable::new(base.clone(), rates))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::parse(s).unwrap()
    }

    #[test]
    fn test_decode_catalog() {
        let catalog = decode_catalog(r#"{"EUR": "Euro", "USD": "United States Dollar"}"#).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.label(&code("USD")), "United States Dollar");
    }

    #[test]
    fn test_decode_catalog_ignores_non_string_members() {
        let body = r#"{
            "EUR": "Euro",
            "disclaimer": {"text": "usage at your own risk"},
            "timestamp": 1704153600,
            "bad code!": "Nope"
        }"#;
        let catalog = decode_catalog(body).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains(&code("EUR")));
    }

    #[test]
    fn test_decode_catalog_rejects_non_object() {
        assert!(matches!(
            decode_catalog(r#"["EUR", "USD"]"#),
            Err(Error::Decode { .. })
        ));
        assert!(matches!(decode_catalog("<html>"), Err(Error::Json(_))));
    }

    #[test]
    fn test_decode_rates() {
        let body = r#"{
            "provider": "https://www.exchangerate-api.com",
            "base": "USD",
            "date": "2024-01-02",
            "time_last_updated": 1704153601,
            "rates": {"USD": 1, "EUR": 0.833041}
        }"#;
        let table = decode_rates(&code("USD"), body).unwrap();

        assert_eq!(table.base(), &code("USD"));
        assert_eq!(table.rate(&code("EUR")), Some(0.833041));
        assert_eq!(table.rate(&code("USD")), Some(1.0));
    }

    #[test]
    fn test_decode_rates_skips_non_numeric_entries() {
        let body = r#"{"rates": {"EUR": "0.8", "GBP": 0.79, "JPY": null}}"#;
        let table = decode_rates(&code("USD"), body).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.rate(&code("GBP")), Some(0.79));
    }

    #[test]
    fn test_decode_rates_requires_rates_field() {
        let err = decode_rates(&code("USD"), r#"{"result": "error", "error-type": "unsupported-code"}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        assert!(err.to_string().contains("USD"));
    }
}
