//! Sales statistics: histories, summaries, the price list and most-sold rankings.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::article::{unknown_value, Article};
use crate::Error;

/// Timespans (in days) the price list aggregates over.
pub const TIMESPANS: [u32; 10] = [1, 2, 3, 6, 7, 8, 13, 14, 15, 30];

/// In-game currency a sale was made in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Currency {
    Gold,
    Platinum,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Gold, Currency::Platinum];

    pub const NAMES: &'static [&'static str] = &["Gold", "Platinum"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Gold => "Gold",
            Currency::Platinum => "Platinum",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| unknown_value("currency", s, Currency::NAMES))
    }
}

/// Abbreviated per-day sales statistics for one article and currency.
///
/// The record is passed through as the API returns it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct HistoryRecord(pub serde_json::Value);

/// Long-form sales statistics for one article and currency over a timespan.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct SummaryRecord(pub serde_json::Value);

macro_rules! record_accessors {
    ($ty:ty) => {
        impl $ty {
            /// Returns the raw value stored under `key`, if the record is an object.
            pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
                self.0.get(key)
            }

            pub fn uuid(&self) -> Option<&str> {
                self.get("uuid").and_then(|v| v.as_str())
            }

            pub fn currency(&self) -> Option<Currency> {
                self.get("currency")
                    .and_then(|v| v.as_str())
                    .and_then(|s| s.parse().ok())
            }

            pub fn into_inner(self) -> serde_json::Value {
                self.0
            }
        }
    };
}

record_accessors!(HistoryRecord);
record_accessors!(SummaryRecord);

/// Bulk summary data: article uuid -> currency -> timespan (days) -> statistics.
pub type PriceList = BTreeMap<String, BTreeMap<String, BTreeMap<String, serde_json::Value>>>;

/// Most sold articles per currency, ordered by sales volume.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct MostSold(pub BTreeMap<String, Vec<Article>>);

impl MostSold {
    /// Ranked articles for `currency`. Keys are matched case-insensitively,
    /// the API answers with `gold` / `platinum`.
    pub fn for_currency(&self, currency: Currency) -> &[Article] {
        self.0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(currency.as_str()))
            .map(|(_, articles)| articles.as_slice())
            .unwrap_or(&[])
    }
}
