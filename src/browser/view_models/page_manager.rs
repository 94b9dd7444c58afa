//! # Page Management
//!
//! Page selection over the filtered, sorted view. Requests outside the page
//! button range are clamped rather than rejected.

use super::core::UserListViewModel;
use crate::browser::events::{ModelEvent, ViewEvent};
use crate::browser::models::{apply_filter, clamp_page, page_count};

impl UserListViewModel {
    /// Active page as shown (clamped to the current page count)
    pub fn current_page(&self) -> usize {
        self.derive_view().current_page
    }

    /// Number of page buttons for the current filter
    pub fn page_count(&self) -> usize {
        let filtered = apply_filter(self.state.filter, &self.state.users);
        page_count(filtered.len(), self.page_size)
    }

    /// Select a 1-based page; returns the page actually selected
    pub fn select_page(&mut self, page_number: usize) -> usize {
        let old_page = self.state.current_page;
        let new_page = if self.is_ready() {
            clamp_page(page_number, self.page_count())
        } else {
            page_number.max(1)
        };

        if new_page != page_number {
            tracing::debug!("Page {} out of range, clamped to {}", page_number, new_page);
        }
        if new_page == old_page {
            return new_page;
        }

        self.state.current_page = new_page;
        self.publish_model_event(ModelEvent::PageChanged { old_page, new_page });
        self.emit_view_event([
            ViewEvent::TableRedrawRequired,
            ViewEvent::PageStripRedrawRequired,
            ViewEvent::StatusBarUpdateRequired,
        ]);
        new_page
    }

    pub fn next_page(&mut self) -> usize {
        self.select_page(self.current_page().saturating_add(1))
    }

    pub fn previous_page(&mut self) -> usize {
        self.select_page(self.current_page().saturating_sub(1))
    }

    pub fn first_page(&mut self) -> usize {
        self.select_page(1)
    }

    pub fn last_page(&mut self) -> usize {
        self.select_page(self.page_count())
    }
}
