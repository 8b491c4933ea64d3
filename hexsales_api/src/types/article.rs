//! Article types: the tradable items tracked by the auction house.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A tradable in-game item with official auction-house sales.
///
/// Unknown fields are kept in `extra`, so an article serializes back to the
/// same JSON object it was decoded from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Article {
    /// Official game uuid, `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`.
    pub uuid: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<Rarity>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub article_type: Option<ArticleType>,

    /// Set the article belongs to. See [`KNOWN_SETS`](crate::types::KNOWN_SETS).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Article rarity.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rarity {
    Epic,
    Legendary,
    Rare,
    Uncommon,
    Common,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Rare,
        Rarity::Uncommon,
        Rarity::Common,
    ];

    /// Wire names, in the order of [`Rarity::ALL`].
    pub const NAMES: &'static [&'static str] = &["Epic", "Legendary", "Rare", "Uncommon", "Common"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Rare => "Rare",
            Rarity::Uncommon => "Uncommon",
            Rarity::Common => "Common",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| unknown_value("rarity", s, Rarity::NAMES))
    }
}

/// Kind of article: card, equipment or booster pack.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleType {
    Card,
    Equipment,
    Pack,
}

impl ArticleType {
    pub const ALL: [ArticleType; 3] = [ArticleType::Card, ArticleType::Equipment, ArticleType::Pack];

    pub const NAMES: &'static [&'static str] = &["Card", "Equipment", "Pack"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleType::Card => "Card",
            ArticleType::Equipment => "Equipment",
            ArticleType::Pack => "Pack",
        }
    }
}

impl std::fmt::Display for ArticleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ArticleType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArticleType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| unknown_value("type", s, ArticleType::NAMES))
    }
}

pub(crate) fn unknown_value(field: &str, value: &str, allowed: &[&str]) -> Error {
    Error::validation(
        field,
        format!("'{}' is not one of {}", value, allowed.join(", ")),
    )
}
