//! # openexchangerates
//!
//! openexchangerates.org 的异步 Rust 客户端，带内存汇率缓存。
//!
//! Async client for the [openexchangerates.org](https://openexchangerates.org)
//! API with an optional in-memory cache in front of the three read endpoints.
//!
//! ## Overview
//!
//! | Operation | Endpoint | Cached as |
//! |-----------|----------|-----------|
//! | [`latest`](ExchangeRatesApi::latest) | `latest.json` | one slot per base, refreshed after the update interval |
//! | [`currencies`](ExchangeRatesApi::currencies) | `currencies.json` | filled once, then frozen |
//! | [`historical`](ExchangeRatesApi::historical) | `historical/YYYY-MM-DD.json` | one entry per day and base, kept forever |
//!
//! Rates are decoded as [`rust_decimal::Decimal`] straight from the JSON text,
//! so no precision is lost to floating point.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use openexchangerates::{ExchangeRatesApi, OxrClient};
//!
//! #[tokio::main]
//! async fn main() -> openexchangerates::Result<()> {
//!     let client = OxrClient::builder()
//!         .api_key("your-app-id")
//!         .update_interval_secs(3600)
//!         .build()?;
//!
//!     let latest = client.latest(None).await?;
//!     println!("1 {} = {:?} EUR", latest.base, latest.rate("EUR"));
//!
//!     client.close().await
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Capability trait, caching and passthrough clients, builder |
//! | [`cache`] | Cache slots, freshness configuration and counters |
//! | [`transport`] | Authenticated HTTP access to the service |
//! | [`types`] | Rate snapshots, currency catalog, day keys |

pub mod cache;
pub mod client;
pub mod transport;
pub mod types;

pub use cache::{CacheConfig, CacheKeying, CacheStats};
pub use client::{
    CachingClient, ExchangeRatesApi, OxrClient, OxrClientBuilder, PassthroughClient,
};
pub use types::{CurrencyCatalog, RateSnapshot};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
