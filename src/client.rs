//! Exchange-rates client.
//!
//! Keep the public surface small: one capability trait, two implementations,
//! and a builder that picks between them.

pub mod api;
pub mod builder;
pub mod caching;
pub mod core;
pub mod passthrough;

pub use api::ExchangeRatesApi;
pub use builder::OxrClientBuilder;
pub use caching::CachingClient;
pub use core::OxrClient;
pub use passthrough::PassthroughClient;
