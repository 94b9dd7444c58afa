//! # Load Management
//!
//! Tracks the one-shot fetch and stores its outcome.

use super::core::UserListViewModel;
use crate::browser::events::{ModelEvent, ViewEvent};
use crate::browser::models::LoadState;
use crate::browser::services::LoadResult;

impl UserListViewModel {
    /// Mark the fetch as in flight
    pub fn begin_loading(&mut self) {
        if !matches!(self.load_state, LoadState::Idle) {
            tracing::warn!("begin_loading called in state {:?}", self.load_state);
            return;
        }
        self.load_state = LoadState::Loading;
        self.publish_model_event(ModelEvent::LoadStarted);
        self.emit_view_event([ViewEvent::FullRedrawRequired]);
        tracing::debug!("User list loading");
    }

    /// Store the fetch outcome
    ///
    /// Success fills the collection and flips the list to ready. Failure is
    /// reported to the log and leaves the list empty in a failed state; there
    /// is no retry. Only the first outcome is accepted.
    pub fn apply_load_result(&mut self, result: LoadResult) {
        if matches!(self.load_state, LoadState::Ready | LoadState::Failed { .. }) {
            tracing::warn!("Ignoring second load result, list already settled");
            return;
        }

        match result {
            Ok(users) => {
                let count = users.len();
                self.state.users = users;
                self.load_state = LoadState::Ready;
                self.normalize_page();
                tracing::info!("Loaded {} users", count);
                self.publish_model_event(ModelEvent::UsersLoaded { count });
            }
            Err(error) => {
                let message = error.to_status_message();
                tracing::error!("Error fetching users: {}", message);
                self.load_state = LoadState::Failed {
                    message: message.clone(),
                };
                self.publish_model_event(ModelEvent::LoadFailed { message });
            }
        }

        self.emit_view_event([ViewEvent::FullRedrawRequired]);
    }

    pub fn is_ready(&self) -> bool {
        self.load_state.is_ready()
    }
}
