//! Cache keys.

use super::CacheKeying;
use crate::types::day_ordinal;
use chrono::NaiveDate;

/// Key of a latest-rates slot. `None` is the single shared slot.
pub type LatestKey = Option<String>;

/// Key of a historical entry: the day ordinal plus, when keyed per base, the base code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HistoricalKey {
    pub ordinal: i32,
    pub base: Option<String>,
}

impl CacheKeying {
    pub fn latest_key(&self, base: &str) -> LatestKey {
        match self {
            CacheKeying::PerBase => Some(base.to_string()),
            CacheKeying::Shared => None,
        }
    }

    pub fn historical_key(&self, day: NaiveDate, base: &str) -> HistoricalKey {
        HistoricalKey {
            ordinal: day_ordinal(day),
            base: self.latest_key(base),
        }
    }
}
