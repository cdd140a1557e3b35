use super::api::ExchangeRatesApi;
use crate::transport::{HttpTransport, RatesSource};
use crate::types::{normalize_code, CurrencyCatalog, RateSnapshot, DEFAULT_BASE};
use crate::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

/// Client without a cache: every call goes to the service.
#[derive(Debug)]
pub struct PassthroughClient<S = HttpTransport> {
    source: S,
}

impl<S: RatesSource> PassthroughClient<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

#[async_trait]
impl<S: RatesSource> ExchangeRatesApi for PassthroughClient<S> {
    async fn latest(&self, base: Option<&str>) -> Result<Arc<RateSnapshot>> {
        let base = normalize_code(base.unwrap_or(DEFAULT_BASE))?;
        Ok(Arc::new(self.source.fetch_latest(&base).await?))
    }

    async fn currencies(&self) -> Result<Arc<CurrencyCatalog>> {
        Ok(Arc::new(self.source.fetch_currencies().await?))
    }

    async fn historical(&self, day: NaiveDate, base: Option<&str>) -> Result<Arc<RateSnapshot>> {
        let base = normalize_code(base.unwrap_or(DEFAULT_BASE))?;
        Ok(Arc::new(self.source.fetch_historical(day, &base).await?))
    }

    async fn close(self) -> Result<()> {
        info!("closing passthrough exchange-rates client");
        drop(self.source);
        Ok(())
    }
}
