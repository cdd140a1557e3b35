//! HTTP transport for the openexchangerates.org API.
//!
//! [`RatesSource`] is the seam the caching client wraps; [`HttpTransport`] is
//! the production implementation. Every `fetch_*` call issues exactly one
//! request and never retries.

mod http;

pub use http::{HttpTransport, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

use crate::types::{CurrencyCatalog, RateSnapshot};
use crate::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Raw access to the three read endpoints.
///
/// `base` is expected to be an already normalized currency code.
#[async_trait]
pub trait RatesSource: Send + Sync {
    async fn fetch_latest(&self, base: &str) -> Result<RateSnapshot>;

    async fn fetch_currencies(&self) -> Result<CurrencyCatalog>;

    async fn fetch_historical(&self, day: NaiveDate, base: &str) -> Result<RateSnapshot>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
