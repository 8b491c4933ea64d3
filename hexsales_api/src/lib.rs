//! Client for the HexSales auction-house statistics API (`https://api.hexsales.net/v1`).
//!
//! [`Client`] exposes one blocking method per API resource. Parameters are
//! checked against [`validation::PARAMETERS`] before any request is sent, and
//! failures keep their cause (network, HTTP status, or JSON decoding).

#[cfg(feature = "async")]
mod async_client;
mod client;
mod errors;
mod query;
pub mod types;
pub mod validation;
#[cfg(feature = "async")]
pub use self::async_client::AsyncClient;
pub use self::client::{Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::Error;
pub use self::query::{
    today, DateRange, MostSoldQuery, Param, Params, Query, SearchQuery, StatsQuery, DATE_FORMAT,
};
