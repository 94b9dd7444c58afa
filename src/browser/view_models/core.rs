//! # Core ViewModel Structure
//!
//! Contains the user list view model struct and its initialization logic.
//! Behaviour is split by concern across the sibling `*_manager` modules, each
//! adding an `impl UserListViewModel` block.

use crate::browser::events::{EventBus, ViewEvent};
use crate::browser::models::{derive_view, DerivedView, ListState, LoadState};
use crate::config::PAGE_SIZE;

/// Type alias for event bus option to reduce complexity
type EventBusOption = Option<Box<dyn EventBus>>;

/// View model for the user list
///
/// Owns the explicit [`ListState`] and the fetch progress. All mutations go
/// through methods that keep the active page within range and queue the view
/// events the controller needs to redraw.
pub struct UserListViewModel {
    pub(super) state: ListState,
    pub(super) load_state: LoadState,
    pub(super) page_size: usize,
    pub(super) pending_view_events: Vec<ViewEvent>,
    pub(super) event_bus: EventBusOption,
    pub(super) terminal_size: (u16, u16),
    pub(super) source_label: String,
}

impl UserListViewModel {
    /// Create an empty view model with the default page size
    pub fn new() -> Self {
        Self::with_state(ListState::new(), PAGE_SIZE)
    }

    /// Create a view model with preset selectors
    ///
    /// The page number is only clamped once users have been loaded.
    pub fn with_state(state: ListState, page_size: usize) -> Self {
        Self {
            state,
            load_state: LoadState::Idle,
            page_size: page_size.max(1),
            pending_view_events: Vec::new(),
            event_bus: None,
            terminal_size: (80, 24),
            source_label: String::new(),
        }
    }

    /// Current list state
    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Run the filter → sort → page pipeline over the current state
    pub fn derive_view(&self) -> DerivedView {
        derive_view(&self.state, self.page_size)
    }

    /// Set the event bus that receives model events
    pub fn set_event_bus(&mut self, event_bus: Box<dyn EventBus>) {
        self.event_bus = Some(event_bus);
    }

    /// Describe where users come from (shown in the status bar)
    pub fn set_source_label(&mut self, label: impl Into<String>) {
        self.source_label = label.into();
    }

    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    /// Update terminal size
    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.emit_view_event([ViewEvent::FullRedrawRequired]);
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Pull the active page back into `1..=page_count` once data is present
    pub(super) fn normalize_page(&mut self) {
        if !self.load_state.is_ready() {
            return;
        }
        let view = self.derive_view();
        self.state.current_page = view.current_page;
    }
}

impl Default for UserListViewModel {
    fn default() -> Self {
        Self::new()
    }
}
