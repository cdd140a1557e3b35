use super::api::ExchangeRatesApi;
use super::builder::OxrClientBuilder;
use super::caching::CachingClient;
use super::passthrough::PassthroughClient;
use crate::cache::CacheStats;
use crate::types::{CurrencyCatalog, RateSnapshot};
use crate::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

/// Client chosen by [`OxrClientBuilder::build`]: caching unless caching was disabled.
#[derive(Debug)]
pub enum OxrClient {
    Caching(CachingClient),
    Passthrough(PassthroughClient),
}

impl OxrClient {
    pub fn builder() -> OxrClientBuilder {
        OxrClientBuilder::new()
    }

    /// Caching client with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        OxrClientBuilder::new().api_key(api_key).build()
    }

    pub fn is_caching(&self) -> bool {
        matches!(self, OxrClient::Caching(_))
    }

    /// Cache counters, `None` for the passthrough variant.
    pub fn cache_stats(&self) -> Option<CacheStats> {
        match self {
            OxrClient::Caching(c) => Some(c.stats()),
            OxrClient::Passthrough(_) => None,
        }
    }
}

impl From<CachingClient> for OxrClient {
    fn from(client: CachingClient) -> Self {
        OxrClient::Caching(client)
    }
}

impl From<PassthroughClient> for OxrClient {
    fn from(client: PassthroughClient) -> Self {
        OxrClient::Passthrough(client)
    }
}

#[async_trait]
impl ExchangeRatesApi for OxrClient {
    async fn latest(&self, base: Option<&str>) -> Result<Arc<RateSnapshot>> {
        match self {
            OxrClient::Caching(c) => c.latest(base).await,
            OxrClient::Passthrough(c) => c.latest(base).await,
        }
    }

    async fn currencies(&self) -> Result<Arc<CurrencyCatalog>> {
        match self {
            OxrClient::Caching(c) => c.currencies().await,
            OxrClient::Passthrough(c) => c.currencies().await,
        }
    }

    async fn historical(&self, day: NaiveDate, base: Option<&str>) -> Result<Arc<RateSnapshot>> {
        match self {
            OxrClient::Caching(c) => c.historical(day, base).await,
            OxrClient::Passthrough(c) => c.historical(day, base).await,
        }
    }

    async fn close(self) -> Result<()> {
        match self {
            OxrClient::Caching(c) => c.close().await,
            OxrClient::Passthrough(c) => c.close().await,
        }
    }
}
