use super::caching::CachingClient;
use super::core::OxrClient;
use super::passthrough::PassthroughClient;
use crate::cache::{CacheConfig, CacheKeying, Clock, SystemClock, DEFAULT_UPDATE_INTERVAL};
use crate::transport::{HttpTransport, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Builder for creating clients with custom configuration.
///
/// Unset values fall back to the environment, then to defaults:
/// - `OXR_APP_ID`: API key (required one way or the other)
/// - `OXR_BASE_URL`: service root (default `https://openexchangerates.org/api`)
/// - `OXR_HTTP_TIMEOUT_SECS`: request timeout (default 30)
pub struct OxrClientBuilder {
    api_key: Option<String>,
    enable_cache: bool,
    update_interval: Duration,
    keying: CacheKeying,
    base_url: Option<String>,
    timeout: Option<Duration>,
    clock: Option<Arc<dyn Clock>>,
}

impl OxrClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            enable_cache: true,
            update_interval: DEFAULT_UPDATE_INTERVAL,
            keying: CacheKeying::default(),
            base_url: None,
            timeout: None,
            clock: None,
        }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Choose the caching (default) or passthrough variant.
    pub fn enable_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Freshness window of the latest-rates cache. Zero means latest rates
    /// are always refetched.
    pub fn update_interval(mut self, interval: Duration) -> Self {
        self.update_interval = interval;
        self
    }

    pub fn update_interval_secs(self, secs: u64) -> Self {
        self.update_interval(Duration::from_secs(secs))
    }

    pub fn cache_keying(mut self, keying: CacheKeying) -> Self {
        self.keying = keying;
        self
    }

    /// Override the service root (primarily for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Inject the time source for the freshness window. Default is the system monotonic clock.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the variant selected by [`enable_cache`](Self::enable_cache).
    pub fn build(self) -> Result<OxrClient> {
        if self.enable_cache {
            self.build_caching().map(OxrClient::from)
        } else {
            self.build_passthrough().map(OxrClient::from)
        }
    }

    pub fn build_caching(self) -> Result<CachingClient> {
        let transport = self.transport()?;
        let config = CacheConfig::new()
            .with_update_interval(self.update_interval)
            .with_keying(self.keying);
        info!(
            base_url = transport.base_url(),
            update_interval_secs = self.update_interval.as_secs(),
            keying = ?self.keying,
            "created caching exchange-rates client"
        );
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        Ok(CachingClient::new(transport, config).with_clock(clock))
    }

    pub fn build_passthrough(self) -> Result<PassthroughClient> {
        let transport = self.transport()?;
        info!(
            base_url = transport.base_url(),
            "created passthrough exchange-rates client"
        );
        Ok(PassthroughClient::new(transport))
    }

    fn transport(&self) -> Result<HttpTransport> {
        let api_key = self
            .api_key
            .clone()
            .or_else(|| std::env::var("OXR_APP_ID").ok())
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "API key required (OXR_APP_ID)",
                    ErrorContext::new()
                        .with_field_path("api_key")
                        .with_source("builder"),
                )
            })?;
        let base_url = self
            .base_url
            .clone()
            .or_else(|| std::env::var("OXR_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = self
            .timeout
            .or_else(|| {
                std::env::var("OXR_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .filter(|secs| *secs > 0)
                    .map(Duration::from_secs)
            })
            .unwrap_or(DEFAULT_TIMEOUT);

        HttpTransport::new(api_key, &base_url, timeout)
    }
}

impl Default for OxrClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
