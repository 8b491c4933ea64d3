//! Async wrapper around [`Client`] for use inside a Tokio runtime.
//!
//! Operations run on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], so the event loop never waits on I/O.
//!
//! ```no_run
//! use hexsales_api::{AsyncClient, Client};
//!
//! # async fn example() -> Result<(), hexsales_api::Error> {
//! let client = AsyncClient::build(Client::builder()).await?;
//! let sets = client.run(|c| c.list_sets()).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::{Client, ClientBuilder, Error};

/// Async wrapper around [`Client`]. Cloning shares the underlying client.
#[derive(Clone, Debug)]
pub struct AsyncClient {
    inner: Arc<Client>,
}

impl AsyncClient {
    /// Wraps a client that was built outside the runtime.
    pub fn new(client: Client) -> Self {
        Self {
            inner: Arc::new(client),
        }
    }

    /// Builds the blocking client on the blocking thread pool.
    ///
    /// A blocking client must not be constructed on a runtime worker thread,
    /// so this is the constructor to use from async code.
    pub async fn build(builder: ClientBuilder) -> Result<Self, Error> {
        let client = tokio::task::spawn_blocking(move || builder.build())
            .await
            .map_err(|e| {
                tracing::error!("Client build task did not complete: {}", e);
                Error::Task(e.to_string())
            })??;
        Ok(Self::new(client))
    }

    /// Runs `f` with the blocking client on the blocking thread pool.
    pub async fn run<T, F>(&self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&Client) -> Result<T, Error> + Send + 'static,
        T: Send + 'static,
    {
        let client = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(|e| {
                tracing::error!("Blocking task did not complete: {}", e);
                Error::Task(e.to_string())
            })?
    }

    pub fn client(&self) -> &Client {
        &self.inner
    }
}
