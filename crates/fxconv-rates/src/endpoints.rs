//! Service endpoint URLs

use fxconv_core::prelude::*;
use fxconv_core::CurrencyCode;
use url::Url;

/// Currency list service (code to display name)
pub const DEFAULT_CATALOG_URL: &str = "https://openexchangerates.org/api/currencies.json";

/// Rate service; the base currency is appended as the last path segment
pub const DEFAULT_RATES_URL: &str = "https://api.exchangerate-api.com/v4/latest/";

/// Validated URLs of the catalog and rate services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    catalog: Url,
    rates: Url,
}

impl Endpoints {
    /// Parse both endpoint URLs. Only `http` and `https` are accepted.
    pub fn parse(catalog_url: &str, rates_url: &str) -> Result<Self> {
        Ok(Self {
            catalog: parse_http_url(catalog_url)?,
            rates: parse_http_url(rates_url)?,
        })
    }

    pub fn catalog_url(&self) -> &Url {
        &self.catalog
    }

    /// Rate URL for `base`, e.g. `https://api.exchangerate-api.com/v4/latest/USD`.
    ///
    /// The code is pushed as a path segment, so a configured URL with or
    /// without a trailing slash yields the same result.
    pub fn rates_url(&self, base: &CurrencyCode) -> Url {
        let mut url = self.rates.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(base.as_str());
        }
        url
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            catalog: Url::parse(DEFAULT_CATALOG_URL).expect("Invalid default catalog URL"),
            rates: Url::parse(DEFAULT_RATES_URL).expect("Invalid default rates URL"),
        }
    }
}

fn parse_http_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| Error::invalid_endpoint(raw, e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::invalid_endpoint(
            raw,
            format!("unsupported scheme '{}'", other),
        )),
    }
}
