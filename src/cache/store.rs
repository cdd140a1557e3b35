//! The in-memory cache slots.

use super::key::{HistoricalKey, LatestKey};
use crate::types::{CurrencyCatalog, RateSnapshot};
use crate::{Error, ErrorContext, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct LatestEntry {
    snapshot: Arc<RateSnapshot>,
    fetched_at: Instant,
}

impl LatestEntry {
    fn is_fresh(&self, now: Instant, window: Duration) -> bool {
        now.saturating_duration_since(self.fetched_at) < window
    }
}

#[derive(Debug, Default)]
struct State {
    latest: HashMap<LatestKey, LatestEntry>,
    currencies: Option<Arc<CurrencyCatalog>>,
    historical: HashMap<HistoricalKey, Arc<RateSnapshot>>,
}

/// Private per-client cache state.
///
/// The mutex is never held across a request, only around individual reads
/// and writes.
#[derive(Debug, Default)]
pub struct RatesCache {
    state: Mutex<State>,
}

impl RatesCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>> {
        self.state.lock().map_err(|_| {
            Error::runtime_with_context(
                "rate cache poisoned",
                ErrorContext::new().with_source("cache"),
            )
        })
    }

    /// The latest snapshot under `key`, if it was stored less than `window` before `now`.
    pub fn fresh_latest(
        &self,
        key: &LatestKey,
        now: Instant,
        window: Duration,
    ) -> Result<Option<Arc<RateSnapshot>>> {
        let state = self.lock()?;
        Ok(state
            .latest
            .get(key)
            .filter(|entry| entry.is_fresh(now, window))
            .map(|entry| Arc::clone(&entry.snapshot)))
    }

    /// Replace the latest slot under `key`.
    pub fn store_latest(
        &self,
        key: LatestKey,
        snapshot: RateSnapshot,
        fetched_at: Instant,
    ) -> Result<Arc<RateSnapshot>> {
        let snapshot = Arc::new(snapshot);
        let mut state = self.lock()?;
        state.latest.insert(
            key,
            LatestEntry {
                snapshot: Arc::clone(&snapshot),
                fetched_at,
            },
        );
        Ok(snapshot)
    }

    /// The stored catalog. An empty catalog counts as absent.
    pub fn currencies(&self) -> Result<Option<Arc<CurrencyCatalog>>> {
        let state = self.lock()?;
        Ok(state
            .currencies
            .as_ref()
            .filter(|catalog| !catalog.is_empty())
            .map(Arc::clone))
    }

    /// Fill the catalog slot. Once a non-empty catalog is stored it is kept
    /// and returned in place of `catalog`.
    pub fn store_currencies(&self, catalog: CurrencyCatalog) -> Result<Arc<CurrencyCatalog>> {
        let mut state = self.lock()?;
        if let Some(existing) = state.currencies.as_ref().filter(|c| !c.is_empty()) {
            return Ok(Arc::clone(existing));
        }
        let catalog = Arc::new(catalog);
        state.currencies = Some(Arc::clone(&catalog));
        Ok(catalog)
    }

    pub fn historical(&self, key: &HistoricalKey) -> Result<Option<Arc<RateSnapshot>>> {
        let state = self.lock()?;
        Ok(state.historical.get(key).map(Arc::clone))
    }

    /// Insert a historical entry unless one already exists under `key`.
    /// Returns whichever entry ends up stored.
    pub fn store_historical(
        &self,
        key: HistoricalKey,
        snapshot: RateSnapshot,
    ) -> Result<Arc<RateSnapshot>> {
        let mut state = self.lock()?;
        let stored = state
            .historical
            .entry(key)
            .or_insert_with(|| Arc::new(snapshot));
        Ok(Arc::clone(stored))
    }

    #[cfg(test)]
    pub(crate) fn historical_len(&self) -> Result<usize> {
        Ok(self.lock()?.historical.len())
    }
}
