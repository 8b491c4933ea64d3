//! Shared query infrastructure: the [`Query`] trait, [`Param`] values and [`DateRange`].

use chrono::{NaiveDate, Utc};
use url::Url;

use crate::Error;

/// Wire format of every date parameter.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single request parameter value, before it is encoded into a URL or body.
#[derive(Clone, Debug, PartialEq)]
pub enum Param {
    Text(String),
    Int(i64),
    Flag(bool),
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Param::Text(s) => write!(f, "{}", s),
            Param::Int(i) => write!(f, "{}", i),
            Param::Flag(b) => write!(f, "{}", b),
        }
    }
}

/// Named parameters in the order they are sent.
pub type Params = Vec<(&'static str, Param)>;

/// Trait implemented by all query builders.
pub trait Query {
    /// Returns the parameters this query sends, in wire order. Unset optional
    /// fields are omitted. Defaults that depend on the current date are
    /// resolved here, so they reflect the time of the call.
    fn params(&self) -> Params;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        append_params(url, &self.params())
    }
}

pub(crate) fn append_params(url: &Url, params: &[(&'static str, Param)]) -> Url {
    let mut url = url.clone();
    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in params {
            pairs.append_pair(name, &value.to_string());
        }
    }
    url
}

/// Inclusive `start..=end` range of calendar days.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, Error> {
        if start > end {
            return Err(Error::validation(
                "start",
                format!("start {} is after end {}", start, end),
            ));
        }
        Ok(Self { start, end })
    }

    /// Parses a range from two `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, Error> {
        Self::new(parse_date("start", start)?, parse_date("end", end)?)
    }

    /// A single day.
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Today, as a single day, in the API's timezone (CET).
    ///
    /// Evaluated on every call.
    pub fn today() -> Self {
        Self::day(today())
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// `start` and `end` parameters, in that order.
    pub fn params(&self) -> Params {
        vec![
            ("start", Param::Text(self.start.format(DATE_FORMAT).to_string())),
            ("end", Param::Text(self.end.format(DATE_FORMAT).to_string())),
        ]
    }
}

/// Current calendar date in the API's timezone.
pub fn today() -> NaiveDate {
    Utc::now().with_timezone(&chrono_tz::CET).date_naive()
}

pub(crate) fn parse_date(field: &str, value: &str) -> Result<NaiveDate, Error> {
    // chrono accepts unpadded fields, the API does not
    if value.len() != 10 {
        return Err(Error::validation(
            field,
            format!("'{}' is not a YYYY-MM-DD date", value),
        ));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        Error::validation(field, format!("'{}' is not a YYYY-MM-DD date: {}", value, e))
    })
}
