//! # User Sources
//!
//! Where the user list comes from. The production source issues a single
//! `GET` against the directory endpoint; the static source serves a fixed
//! collection and is what tests and offline demos plug in.

use super::error::FetchError;
use crate::browser::models::{UserRecord, UsersPayload};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Anything that can produce the full user collection in one call
///
/// Sources are cloned into the background task that performs the fetch, so
/// they must be cheap to clone and `'static`.
pub trait UserSource: Clone + Send + Sync + 'static {
    /// Fetch every user the source knows about
    fn fetch_users(&self) -> impl Future<Output = Result<Vec<UserRecord>, FetchError>> + Send;

    /// Human readable origin for status and log lines
    fn describe(&self) -> String;
}

/// HTTP-backed source reading `{ "users": [...] }` from a fixed URL
#[derive(Debug, Clone)]
pub struct HttpUserSource {
    client: reqwest::Client,
    url: String,
}

impl HttpUserSource {
    /// Create a source for `url` whose requests give up after `timeout`
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let url = url.into();
        tracing::debug!("Creating HttpUserSource for {} (timeout {:?})", url, timeout);

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError> {
        let start_time = std::time::Instant::now();
        tracing::debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let payload: UsersPayload = serde_json::from_slice(&body)?;

        tracing::debug!(
            "GET {} -> {} users (total={:?}) in {}ms",
            self.url,
            payload.users.len(),
            payload.total,
            start_time.elapsed().as_millis()
        );

        Ok(payload.users)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// In-memory source returning a fixed collection
#[derive(Debug, Clone, Default)]
pub struct StaticUserSource {
    users: Arc<Vec<UserRecord>>,
}

impl StaticUserSource {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            users: Arc::new(users),
        }
    }
}

impl UserSource for StaticUserSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError> {
        Ok(self.users.as_ref().clone())
    }

    fn describe(&self) -> String {
        format!("{} static users", self.users.len())
    }
}
