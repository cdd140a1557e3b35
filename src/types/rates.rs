//! Rate snapshots as returned by the latest and historical endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::ser::{Error as _, SerializeMap};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::str::FromStr;

/// One fetched set of exchange rates.
///
/// Rates are decoded straight from the JSON text into [`Decimal`], so
/// `3.666311` stays `3.666311` instead of passing through `f64`. They are
/// written back out as JSON numbers with the same digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSnapshot {
    #[serde(default)]
    pub disclaimer: String,
    #[serde(default)]
    pub license: String,
    /// Unix seconds at which the service published these rates.
    pub timestamp: i64,
    pub base: String,
    #[serde(serialize_with = "rates_as_numbers")]
    pub rates: BTreeMap<String, Decimal>,
}

// rust_decimal's own Serialize emits strings; go through serde_json::Number
// so the digits are written verbatim as a number token.
fn rates_as_numbers<S: Serializer>(
    rates: &BTreeMap<String, Decimal>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(rates.len()))?;
    for (code, rate) in rates {
        let number = serde_json::Number::from_str(&rate.to_string()).map_err(S::Error::custom)?;
        map.serialize_entry(code, &number)?;
    }
    map.end()
}

impl RateSnapshot {
    /// Rate of `code` against the base. The base itself is always `1`.
    pub fn rate(&self, code: &str) -> Option<Decimal> {
        let code = code.trim().to_ascii_uppercase();
        match self.rates.get(&code) {
            Some(rate) => Some(*rate),
            None if code == self.base => Some(Decimal::ONE),
            None => None,
        }
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }

    /// Convert `amount` of `from` into `to`, crossing through the base currency.
    ///
    /// Returns `None` for an unknown code, a zero rate, or on overflow.
    pub fn convert(&self, amount: Decimal, from: &str, to: &str) -> Option<Decimal> {
        let from_rate = self.rate(from)?;
        let to_rate = self.rate(to)?;
        amount.checked_div(from_rate)?.checked_mul(to_rate)
    }
}
