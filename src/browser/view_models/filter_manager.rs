//! # Filter Management
//!
//! Gender filter selection. Changing the filter keeps the requested sort key,
//! so a sorted list stays sorted over the new subset.

use super::core::UserListViewModel;
use crate::browser::events::{ModelEvent, ViewEvent};
use crate::browser::models::FilterCriterion;

impl UserListViewModel {
    pub fn filter(&self) -> FilterCriterion {
        self.state.filter
    }

    /// Select a filter; returns whether it changed
    pub fn set_filter(&mut self, criterion: FilterCriterion) -> bool {
        let old_filter = self.state.filter;
        if old_filter == criterion {
            return false;
        }

        self.state.filter = criterion;
        self.normalize_page();

        tracing::debug!(
            "Filter changed {} -> {} (sort {} kept)",
            old_filter,
            criterion,
            self.state.sort
        );
        self.publish_model_event(ModelEvent::FilterChanged {
            old_filter,
            new_filter: criterion,
        });
        self.emit_view_event([
            ViewEvent::TableRedrawRequired,
            ViewEvent::PageStripRedrawRequired,
            ViewEvent::StatusBarUpdateRequired,
        ]);
        true
    }

    /// Advance the filter through none → male → female
    pub fn cycle_filter(&mut self) -> FilterCriterion {
        let next = self.state.filter.next();
        self.set_filter(next);
        next
    }
}
