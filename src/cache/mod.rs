//! 汇率缓存模块：在内存中缓存最新汇率、货币目录与历史汇率。
//!
//! # Rate Caching Module
//!
//! In-memory state used by [`CachingClient`](crate::client::CachingClient) to
//! avoid redundant requests. Each read operation has its own policy:
//!
//! | Operation | Policy |
//! |-----------|--------|
//! | latest | served while younger than [`CacheConfig::update_interval`], then refetched and replaced |
//! | currencies | filled by the first successful non-empty fetch, then frozen |
//! | historical | one entry per day key, never evicted or replaced |
//!
//! State only changes after a request completes successfully. A failed or
//! cancelled request leaves every slot as it was.
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`RatesCache`] | The three cache slots behind a mutex |
//! | [`CacheConfig`] | Freshness window and keying policy |
//! | [`CacheKeying`] | Whether entries are separated per base currency |
//! | [`CacheStats`] | Hit/miss/store counters |
//! | [`Clock`] | Time source for the freshness window |
//!
//! Concurrent misses on the same key are not merged: each one issues its own
//! request and the last completed write to the latest slot wins.

mod clock;
mod config;
mod key;
mod stats;
mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{CacheConfig, CacheKeying, DEFAULT_UPDATE_INTERVAL};
pub use key::{HistoricalKey, LatestKey};
pub use stats::CacheStats;
pub use store::RatesCache;

pub(crate) use stats::AtomicStats;
