//! Cache configuration.

use std::time::Duration;

/// Freshness window for the latest-rates cache (one hour).
pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_secs(3600);

/// How the latest and historical caches treat the requested base currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheKeying {
    /// Entries are stored per base currency, so a EUR request never sees a USD snapshot.
    #[default]
    PerBase,
    /// One latest slot and one entry per day, whatever base was requested.
    /// A request for another base inside the window gets the cached snapshot
    /// of whichever base filled it.
    Shared,
}

#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub update_interval: Duration,
    pub keying: CacheKeying,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            update_interval: DEFAULT_UPDATE_INTERVAL,
            keying: CacheKeying::default(),
        }
    }
}

impl CacheConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_update_interval(mut self, interval: Duration) -> Self {
        self.update_interval = interval;
        self
    }

    pub fn with_keying(mut self, keying: CacheKeying) -> Self {
        self.keying = keying;
        self
    }
}
