//! # User Loader
//!
//! Runs the single fetch of a component lifetime on a background tokio task and
//! hands the outcome back through a channel, so the event loop never blocks on
//! the network.

use super::error::FetchError;
use super::user_source::UserSource;
use crate::browser::models::UserRecord;
use tokio::sync::mpsc;

/// Outcome delivered by the background fetch
pub type LoadResult = Result<Vec<UserRecord>, FetchError>;

/// One-shot loader around a [`UserSource`]
pub struct UserLoader<S: UserSource> {
    source: S,
    /// Present until the fetch is started; taking it makes `start` one-shot
    sender: Option<mpsc::Sender<LoadResult>>,
    receiver: mpsc::Receiver<LoadResult>,
}

impl<S: UserSource> UserLoader<S> {
    pub fn new(source: S) -> Self {
        let (sender, receiver) = mpsc::channel(1);
        Self {
            source,
            sender: Some(sender),
            receiver,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Whether `start` has already been called
    pub fn is_started(&self) -> bool {
        self.sender.is_none()
    }

    /// Spawn the fetch
    ///
    /// Returns `false` without doing anything if the fetch was already started.
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) -> bool {
        let Some(sender) = self.sender.take() else {
            tracing::warn!("User fetch already started, ignoring second start");
            return false;
        };

        let source = self.source.clone();
        tracing::debug!("Spawning user fetch from {}", source.describe());

        tokio::spawn(async move {
            let result = source.fetch_users().await;
            // Receiver may be gone if the component was torn down first
            if sender.send(result).await.is_err() {
                tracing::debug!("User fetch finished after loader was dropped");
            }
        });

        true
    }

    /// Non-blocking check for the fetch outcome
    pub fn poll(&mut self) -> Option<LoadResult> {
        self.receiver.try_recv().ok()
    }

    /// Wait for the fetch outcome
    ///
    /// Returns `None` if the fetch was never started or its result has already
    /// been consumed.
    pub async fn recv(&mut self) -> Option<LoadResult> {
        if self.sender.is_some() {
            return None;
        }
        self.receiver.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::models::{Address, Gender};
    use crate::browser::services::StaticUserSource;

    fn sample_users() -> Vec<UserRecord> {
        vec![UserRecord {
            id: 7,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            age: 36,
            gender: Gender::Female,
            image: "https://dummyjson.com/icon/ada/128".to_string(),
            address: Address {
                state: "London".to_string(),
                country: "United Kingdom".to_string(),
            },
        }]
    }

    #[tokio::test]
    async fn loader_should_deliver_result_once() {
        let mut loader = UserLoader::new(StaticUserSource::new(sample_users()));
        assert!(!loader.is_started());

        assert!(loader.start());
        assert!(loader.is_started());

        let result = loader.recv().await.expect("fetch result");
        assert_eq!(result.unwrap(), sample_users());

        // Channel closes once the single result has been consumed
        assert!(loader.recv().await.is_none());
        assert!(loader.poll().is_none());
    }

    #[tokio::test]
    async fn loader_should_ignore_second_start() {
        let mut loader = UserLoader::new(StaticUserSource::new(sample_users()));
        assert!(loader.start());
        assert!(!loader.start());
    }

    #[tokio::test]
    async fn recv_before_start_should_return_none() {
        let mut loader = UserLoader::new(StaticUserSource::new(sample_users()));
        assert!(loader.recv().await.is_none());
    }

    #[tokio::test]
    async fn dropping_loader_before_completion_should_not_panic() {
        let mut loader = UserLoader::new(StaticUserSource::new(sample_users()));
        loader.start();
        drop(loader);
        tokio::task::yield_now().await;
    }
}
