//! 类型模块：汇率快照、货币目录与日期键。
//!
//! # Types Module
//!
//! Strongly-typed representations of the payloads served by
//! openexchangerates.org.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`RateSnapshot`] | One set of rates relative to a base currency at a point in time |
//! | [`CurrencyCatalog`] | Currency code to human-readable name |
//!
//! ## Submodules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`rates`] | Rate snapshots with exact decimal values |
//! | [`currency`] | Currency codes and the currency catalog |
//! | [`day`] | Calendar-day formatting and ordinal keys |
//!
//! ## Example
//!
//! ```rust
//! use openexchangerates::types::RateSnapshot;
//!
//! let body = r#"{
//!     "disclaimer": "Usage subject to terms",
//!     "license": "https://openexchangerates.org/license",
//!     "timestamp": 1358150409,
//!     "base": "USD",
//!     "rates": {"AED": 3.666311, "AFN": 51.2281}
//! }"#;
//! let snapshot: RateSnapshot = serde_json::from_str(body).unwrap();
//! assert_eq!(snapshot.rate("AED").unwrap().to_string(), "3.666311");
//! ```

pub mod currency;
pub mod day;
pub mod rates;

pub use currency::{normalize_code, CurrencyCatalog, DEFAULT_BASE};
pub use day::{day_ordinal, format_day};
pub use rates::RateSnapshot;
