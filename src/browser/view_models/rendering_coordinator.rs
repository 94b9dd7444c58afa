//! # Rendering Coordination
//!
//! Queues view events, forwards model events to the bus and builds the
//! snapshot the renderer draws from.

use super::core::UserListViewModel;
use crate::browser::events::{ModelEvent, ViewEvent};
use crate::browser::models::{DerivedView, LoadState};

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSnapshot {
    pub load_state: LoadState,
    pub view: DerivedView,
    /// Size of the unfiltered collection
    pub total_users: usize,
    pub source_label: String,
}

impl RenderSnapshot {
    /// Whether the table and page strip should be drawn
    pub fn shows_table(&self) -> bool {
        self.load_state.is_ready()
    }
}

impl UserListViewModel {
    /// Queue view events for the controller and announce them on the bus
    pub(super) fn emit_view_event(&mut self, events: impl IntoIterator<Item = ViewEvent>) {
        for event in events {
            if !self.pending_view_events.contains(&event) {
                self.pending_view_events.push(event);
            }
            if let Some(bus) = self.event_bus.as_mut() {
                bus.publish_view_event(event);
            }
            tracing::trace!("View event emitted: {:?}", event);
        }
    }

    /// Forward a model event to the bus, if one is attached
    pub(super) fn publish_model_event(&mut self, event: ModelEvent) {
        if let Some(bus) = self.event_bus.as_mut() {
            bus.publish_model_event(event);
        }
    }

    /// Collect and clear pending view events
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }

    /// Snapshot of the state for one render cycle
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            load_state: self.load_state.clone(),
            view: self.derive_view(),
            total_users: self.state.users.len(),
            source_label: self.source_label.clone(),
        }
    }
}
