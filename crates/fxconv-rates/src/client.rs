//! HTTP client for the catalog and rate services

use std::time::Duration;

use fxconv_core::prelude::*;
use fxconv_core::{CurrencyCatalog, CurrencyCode, RateTable};
use url::Url;

use crate::endpoints::Endpoints;
use crate::protocol::{decode_catalog, decode_rates};

/// Request timeout used when the configuration does not set one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of currency names and exchange rates
///
/// The TEA action layer spawns these calls on tokio tasks, so consumers bound
/// on the `Send` variant, [`RateSource`].
#[trait_variant::make(RateSource: Send)]
pub trait LocalRateSource {
    /// Fetch the currency code to display name mapping
    async fn fetch_catalog(&self) -> Result<CurrencyCatalog>;

    /// Fetch rates relative to `base`
    async fn fetch_rates(&self, base: &CurrencyCode) -> Result<RateTable>;
}

/// [`RateSource`] backed by the public HTTP services
#[derive(Debug, Clone)]
pub struct HttpRateSource {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpRateSource {
    pub fn new(endpoints: Endpoints, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("fxconv/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// GET `url` and return the body of a successful response
    async fn get_text(&self, url: Url) -> Result<String> {
        debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                Error::network(format!("Request to {} timed out", url))
            } else if e.is_connect() {
                Error::network(format!("Connection to {} failed: {}", url, e))
            } else {
                Error::network(format!("Request to {} failed: {}", url, e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http(status.as_u16(), url.as_str()));
        }

        response
            .text()
            .await
            .map_err(|e| Error::network(format!("Failed to read response from {}: {}", url, e)))
    }
}

impl RateSource for HttpRateSource {
    async fn fetch_catalog(&self) -> Result<CurrencyCatalog> {
        let body = self.get_text(self.endpoints.catalog_url().clone()).await?;
        decode_catalog(&body)
    }

    async fn fetch_rates(&self, base: &CurrencyCode) -> Result<RateTable> {
        let body = self.get_text(self.endpoints.rates_url(base)).await?;
        decode_rates(base, &body)
    }
}
