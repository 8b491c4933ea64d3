//! Blocking HTTP client for the HexSales API.

use std::time::Duration;

use reqwest::blocking::RequestBuilder;
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    query::{append_params, DateRange, MostSoldQuery, Params, Query, SearchQuery, StatsQuery},
    types::{Article, HistoryRecord, MostSold, PriceList, SummaryRecord},
    validation::{validate, validate_uuid, PARAMETERS},
    Error,
};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.hexsales.net/v1";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for the HexSales auction-house statistics API.
///
/// Every operation validates its parameters, issues exactly one request and
/// waits for the full response. The client holds no per-call state, so one
/// instance can be shared between threads; cloning is cheap.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::blocking::Client,
    /// Base URL for the API. Defaults to `https://api.hexsales.net/v1`.
    base_api_url: String,
}

/// Builder for [`Client`].
#[derive(Clone, Debug)]
pub struct ClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: concat!("hexsales-api/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientBuilder {
    /// Overrides the API root. Used for testing with wiremock.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the per-request timeout. `None` waits indefinitely.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        // fail early on a bad base URL rather than on the first request
        Url::parse(&self.base_url)?;
        let mut builder = reqwest::blocking::Client::builder().user_agent(self.user_agent);
        // the blocking client applies its own 30s default unless told otherwise
        builder = builder.timeout(self.timeout);
        let http = builder.build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Client(e)
        })?;
        Ok(Client {
            http,
            base_api_url: self.base_url,
        })
    }
}

/// Operation name and key argument, reported in errors.
struct Call {
    operation: &'static str,
    target: String,
}

impl Call {
    fn new(operation: &'static str, target: impl Into<String>) -> Self {
        Self {
            operation,
            target: target.into(),
        }
    }
}

impl Client {
    /// Creates a new client pointing at the production HexSales API.
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::builder().base_url(base_url).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str, params: &Params) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e)
        })?;
        Ok(append_params(&url, params))
    }

    fn get<T>(&self, call: Call, path: &str, params: Params) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        check(&call, &params)?;
        let url = self.get_url(path, &params)?;
        tracing::debug!(operation = call.operation, "GET {}", url);
        self.send(call, self.http.get(url))
    }

    fn post<T, B>(&self, call: Call, path: &str, body: &B, params: Params) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        check(&call, &params)?;
        let url = self.get_url(path, &Vec::new())?;
        tracing::debug!(operation = call.operation, "POST {}", url);
        self.send(call, self.http.post(url).json(body))
    }

    fn send<T>(&self, call: Call, request: RequestBuilder) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let resp = request
            .header("accept", "application/json")
            .send()
            .map_err(|e| {
                tracing::error!("{} failed for {}: {}", call.operation, call.target, e);
                Error::Network {
                    operation: call.operation,
                    target: call.target.clone(),
                    source: e,
                }
            })?;

        let status = resp.status();
        let body = resp.bytes().map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network {
                operation: call.operation,
                target: call.target.clone(),
                source: e,
            }
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&String::from_utf8_lossy(&body));
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                operation: call.operation,
                target: call.target,
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_slice::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&String::from_utf8_lossy(&body));
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Decode {
                operation: call.operation,
                target: call.target,
                source: e,
            }
        })
    }

    /// Lists all known articles with official auction-house sales.
    pub fn list_articles(&self) -> Result<Vec<Article>, Error> {
        self.get(Call::new("list_articles", "/articles"), "/articles", Vec::new())
    }

    /// Searches articles by name and attributes.
    pub fn search_articles(&self, query: &SearchQuery) -> Result<Vec<Article>, Error> {
        self.post(
            Call::new("search_articles", query.name.as_str()),
            "/articles/search",
            query,
            query.params(),
        )
    }

    /// Fetches a single article by uuid.
    pub fn get_article(&self, uuid: &str) -> Result<Article, Error> {
        let call = Call::new("get_article", uuid);
        validate_uuid(uuid).inspect_err(|e| rejected(&call, e))?;
        self.get(call, &format!("/articles/{}", uuid), Vec::new())
    }

    /// Daily, abbreviated sales statistics for one article per currency.
    ///
    /// A `None` range means today (CET), evaluated now.
    pub fn get_article_histories(
        &self,
        uuid: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<HistoryRecord>, Error> {
        let call = Call::new("get_article_histories", uuid);
        validate_uuid(uuid).inspect_err(|e| rejected(&call, e))?;
        let range = range.unwrap_or_else(DateRange::today);
        self.get(call, &format!("/articles/{}/histories", uuid), range.params())
    }

    /// Long-form sales statistics for one article per currency and timespan.
    pub fn get_article_summaries(&self, uuid: &str) -> Result<Vec<SummaryRecord>, Error> {
        let call = Call::new("get_article_summaries", uuid);
        validate_uuid(uuid).inspect_err(|e| rejected(&call, e))?;
        self.get(call, &format!("/articles/{}/summaries", uuid), Vec::new())
    }

    /// Daily statistics across every article matching the filters.
    pub fn list_histories(&self, query: &StatsQuery) -> Result<Vec<HistoryRecord>, Error> {
        self.get(Call::new("list_histories", "/histories"), "/histories", query.params())
    }

    /// Summarized statistics across every article matching the filters.
    pub fn list_summaries(&self, query: &StatsQuery) -> Result<Vec<SummaryRecord>, Error> {
        self.get(Call::new("list_summaries", "/summaries"), "/summaries", query.params())
    }

    /// Names of all sets.
    pub fn list_sets(&self) -> Result<Vec<String>, Error> {
        self.get(Call::new("list_sets", "/sets"), "/sets", Vec::new())
    }

    /// Summary data for every article, currency and timespan at once.
    pub fn get_price_list(&self) -> Result<PriceList, Error> {
        self.get(
            Call::new("get_price_list", "/stats/pricelist"),
            "/stats/pricelist",
            Vec::new(),
        )
    }

    /// Most sold articles per currency.
    pub fn get_most_sold(&self, query: &MostSoldQuery) -> Result<MostSold, Error> {
        self.get(
            Call::new("get_most_sold", "/stats/mostsold"),
            "/stats/mostsold",
            query.params(),
        )
    }
}

fn check(call: &Call, params: &Params) -> Result<(), Error> {
    validate(&PARAMETERS, params).inspect_err(|e| rejected(call, e))
}

fn rejected(call: &Call, err: &Error) {
    tracing::warn!("{} rejected for {}: {}", call.operation, call.target, err);
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        None => body.to_string(),
        Some((idx, _)) => format!("{}...[truncated]", &body[..idx]),
    }
}
