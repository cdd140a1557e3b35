use crate::types::{CurrencyCatalog, RateSnapshot};
use crate::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

/// The read operations every client variant offers.
///
/// `base` defaults to [`DEFAULT_BASE`](crate::types::DEFAULT_BASE) when `None`
/// and is normalized to an uppercase three-letter code before use.
#[async_trait]
pub trait ExchangeRatesApi: Send + Sync {
    /// Latest rates relative to `base`.
    async fn latest(&self, base: Option<&str>) -> Result<Arc<RateSnapshot>>;

    /// Currency code to name catalog.
    async fn currencies(&self) -> Result<Arc<CurrencyCatalog>>;

    /// End-of-day rates for `day` relative to `base`.
    async fn historical(&self, day: NaiveDate, base: Option<&str>) -> Result<Arc<RateSnapshot>>;

    /// Release the connection pool. Consumes the client, so it runs at most once;
    /// a client dropped without `close` releases the same resources.
    async fn close(self) -> Result<()>
    where
        Self: Sized;
}
