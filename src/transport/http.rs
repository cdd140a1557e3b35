use super::{RatesSource, TransportError};
use crate::types::{format_day, CurrencyCatalog, RateSnapshot};
use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://openexchangerates.org/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const LATEST_PATH: &str = "latest.json";
const CURRENCIES_PATH: &str = "currencies.json";

fn historical_path(day: NaiveDate) -> String {
    format!("historical/{}.json", format_day(day))
}

/// Authenticated GET access to the service. Owns the connection pool; dropping
/// the transport releases it.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // app_id stays out of debug output
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    pub fn new(api_key: impl Into<String>, base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Self::parse_base_url(base_url)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    /// Parse the service root, keeping a trailing slash so endpoint paths join under it.
    pub(crate) fn parse_base_url(raw: &str) -> Result<Url> {
        let trimmed = raw.trim().trim_end_matches('/');
        let url = Url::parse(&format!("{}/", trimmed)).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(raw.to_string()),
            )
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                "base URL must use http or https",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(raw.to_string()),
            ));
        }
        Ok(url)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(|e| {
            Error::configuration_with_context(
                format!("cannot build endpoint URL: {}", e),
                ErrorContext::new().with_details(path.to_string()),
            )
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, base: Option<&str>) -> Result<T> {
        let url = self.endpoint(path)?;
        let mut query: Vec<(&str, &str)> = Vec::with_capacity(2);
        if let Some(base) = base {
            query.push(("base", base));
        }
        query.push(("app_id", self.api_key.as_str()));

        debug!(path, base, "requesting exchange-rate endpoint");
        let response = self
            .client
            .get(url)
            .query(&query)
            .send()
            .await
            .map_err(TransportError::Http)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(TransportError::Http)?;

        if !status.is_success() {
            let body = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
            });
            warn!(path, status = status.as_u16(), "exchange-rate service rejected request");
            return Err(Error::Remote {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl RatesSource for HttpTransport {
    async fn fetch_latest(&self, base: &str) -> Result<RateSnapshot> {
        self.get_json(LATEST_PATH, Some(base)).await
    }

    async fn fetch_currencies(&self) -> Result<CurrencyCatalog> {
        self.get_json(CURRENCIES_PATH, None).await
    }

    async fn fetch_historical(&self, day: NaiveDate, base: &str) -> Result<RateSnapshot> {
        self.get_json(&historical_path(day), Some(base)).await
    }
}
