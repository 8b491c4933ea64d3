use serde::Serialize;

use crate::types::{ArticleType, Rarity};

use super::{common::Param, Params, Query};

/// Body of `POST /articles/search`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SearchQuery {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<Rarity>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub article_type: Option<ArticleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,
    /// Maximum number of results. Defaults to 25.
    pub limit: i64,
    /// Number of matches skipped before returning. Defaults to 0.
    pub offset: i64,
    /// Case-insensitive substring match on `name` instead of an exact match.
    pub contains: bool,
}

impl SearchQuery {
    pub const DEFAULT_LIMIT: i64 = 25;

    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            uuid: None,
            rarity: None,
            article_type: None,
            set: None,
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
            contains: false,
        }
    }

    pub fn with_uuid(mut self, uuid: &str) -> Self {
        self.uuid = Some(uuid.to_string());
        self
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = Some(rarity);
        self
    }

    pub fn with_type(mut self, article_type: ArticleType) -> Self {
        self.article_type = Some(article_type);
        self
    }

    pub fn with_set(mut self, set: &str) -> Self {
        self.set = Some(set.to_string());
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_contains(mut self, contains: bool) -> Self {
        self.contains = contains;
        self
    }
}

impl Query for SearchQuery {
    fn params(&self) -> Params {
        let mut params = vec![("name", Param::Text(self.name.clone()))];
        if let Some(uuid) = &self.uuid {
            params.push(("uuid", Param::Text(uuid.clone())));
        }
        if let Some(rarity) = self.rarity {
            params.push(("rarity", Param::Text(rarity.to_string())));
        }
        if let Some(article_type) = self.article_type {
            params.push(("type", Param::Text(article_type.to_string())));
        }
        if let Some(set) = &self.set {
            params.push(("set", Param::Text(set.clone())));
        }
        params.push(("limit", Param::Int(self.limit)));
        params.push(("offset", Param::Int(self.offset)));
        params.push(("contains", Param::Flag(self.contains)));
        params
    }
}
