//! # Sort Management
//!
//! Toggle sorting. Either key turns sorting on when the list is unsorted; any
//! toggle while sorted returns to the filter-stage order.

use super::core::UserListViewModel;
use crate::browser::events::{ModelEvent, ViewEvent};
use crate::browser::models::SortState;

impl UserListViewModel {
    pub fn sort(&self) -> SortState {
        self.state.sort
    }

    pub fn is_sorted(&self) -> bool {
        self.state.sort.is_sorted()
    }

    /// Toggle between identifier-descending and unsorted
    pub fn toggle_sort_by_identifier(&mut self) -> SortState {
        self.toggle_sort(SortState::ByIdentifierDescending)
    }

    /// Toggle between first-name-ascending and unsorted
    pub fn toggle_sort_by_name(&mut self) -> SortState {
        self.toggle_sort(SortState::ByNameAscending)
    }

    fn toggle_sort(&mut self, key: SortState) -> SortState {
        let old_sort = self.state.sort;
        let new_sort = if old_sort.is_sorted() {
            SortState::Unsorted
        } else {
            key
        };
        self.state.sort = new_sort;

        tracing::debug!("Sort toggled {} -> {}", old_sort, new_sort);
        self.publish_model_event(ModelEvent::SortChanged { old_sort, new_sort });
        self.emit_view_event([
            ViewEvent::TableRedrawRequired,
            ViewEvent::StatusBarUpdateRequired,
        ]);
        new_sort
    }
}
