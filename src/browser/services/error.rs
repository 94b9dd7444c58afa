//! # Fetch Errors
//!
//! Failures of the one-shot user fetch. All of them are terminal: the loader
//! reports them once and never retries.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body read failure
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Endpoint answered with a non-2xx status
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    /// Body was not a valid user list
    #[error("could not decode user list: {0}")]
    Decode(#[from] serde_json::Error),

    /// HTTP client could not be constructed
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl FetchError {
    /// Message chain suitable for a single status line
    pub fn to_status_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !message.contains(&cause_text) {
                message.push_str(&format!(": {cause_text}"));
            }
            source = cause.source();
        }
        message
    }
}
