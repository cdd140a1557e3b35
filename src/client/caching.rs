use super::api::ExchangeRatesApi;
use crate::cache::{AtomicStats, CacheConfig, CacheStats, Clock, RatesCache, SystemClock};
use crate::transport::{HttpTransport, RatesSource};
use crate::types::{format_day, normalize_code, CurrencyCatalog, RateSnapshot, DEFAULT_BASE};
use crate::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info};

/// Client that consults an in-memory cache before going to the service.
///
/// - `latest`: served from cache while younger than the update interval.
/// - `currencies`: fetched once, then served from cache for the client's lifetime.
/// - `historical`: fetched once per day (and base, with [`CacheKeying::PerBase`](crate::cache::CacheKeying)).
///
/// The cache is written only after a request has completed successfully, so
/// errors and dropped futures leave it untouched.
pub struct CachingClient<S = HttpTransport> {
    source: S,
    cache: RatesCache,
    config: CacheConfig,
    clock: Arc<dyn Clock>,
    stats: AtomicStats,
}

impl<S: std::fmt::Debug> std::fmt::Debug for CachingClient<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachingClient")
            .field("source", &self.source)
            .field("config", &self.config)
            .field("stats", &self.stats.to_stats())
            .finish_non_exhaustive()
    }
}

impl<S: RatesSource> CachingClient<S> {
    pub fn new(source: S, config: CacheConfig) -> Self {
        Self {
            source,
            cache: RatesCache::new(),
            config,
            clock: Arc::new(SystemClock),
            stats: AtomicStats::default(),
        }
    }

    /// Replace the time source used for the freshness window.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.to_stats()
    }
}

#[async_trait]
impl<S: RatesSource> ExchangeRatesApi for CachingClient<S> {
    async fn latest(&self, base: Option<&str>) -> Result<Arc<RateSnapshot>> {
        let base = normalize_code(base.unwrap_or(DEFAULT_BASE))?;
        let key = self.config.keying.latest_key(&base);

        if let Some(hit) =
            self.cache
                .fresh_latest(&key, self.clock.now(), self.config.update_interval)?
        {
            self.stats.hit();
            debug!(op = "latest", base = %base, "cache hit");
            return Ok(hit);
        }
        self.stats.miss();
        debug!(op = "latest", base = %base, "cache miss");

        let snapshot = self.source.fetch_latest(&base).await?;
        let stored = self.cache.store_latest(key, snapshot, self.clock.now())?;
        self.stats.store();
        debug!(op = "latest", base = %base, timestamp = stored.timestamp, "cache store");
        Ok(stored)
    }

    async fn currencies(&self) -> Result<Arc<CurrencyCatalog>> {
        if let Some(hit) = self.cache.currencies()? {
            self.stats.hit();
            debug!(op = "currencies", "cache hit");
            return Ok(hit);
        }
        self.stats.miss();
        debug!(op = "currencies", "cache miss");

        let catalog = self.source.fetch_currencies().await?;
        let stored = self.cache.store_currencies(catalog)?;
        self.stats.store();
        debug!(op = "currencies", entries = stored.len(), "cache store");
        Ok(stored)
    }

    async fn historical(&self, day: NaiveDate, base: Option<&str>) -> Result<Arc<RateSnapshot>> {
        let base = normalize_code(base.unwrap_or(DEFAULT_BASE))?;
        let key = self.config.keying.historical_key(day, &base);

        if let Some(hit) = self.cache.historical(&key)? {
            self.stats.hit();
            debug!(op = "historical", day = %format_day(day), base = %base, "cache hit");
            return Ok(hit);
        }
        self.stats.miss();
        debug!(op = "historical", day = %format_day(day), base = %base, "cache miss");

        let snapshot = self.source.fetch_historical(day, &base).await?;
        let stored = self.cache.store_historical(key, snapshot)?;
        self.stats.store();
        debug!(op = "historical", day = %format_day(day), base = %base, "cache store");
        Ok(stored)
    }

    async fn close(self) -> Result<()> {
        let stats = self.stats.to_stats();
        info!(
            hits = stats.hits,
            misses = stats.misses,
            stores = stats.stores,
            hit_ratio = stats.hit_ratio(),
            "closing caching exchange-rates client"
        );
        drop(self.source);
        Ok(())
    }
}
