//! # Model Events
//!
//! Semantic notifications emitted by the user list view model when its state
//! changes. They describe what happened, not how to draw it.

use crate::browser::models::{FilterCriterion, SortState};

/// Events emitted when the list state changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelEvent {
    /// The one-shot fetch was started
    LoadStarted,

    /// Fetch succeeded and the collection was stored
    UsersLoaded { count: usize },

    /// Fetch failed; the list stays empty
    LoadFailed { message: String },

    /// Gender filter changed
    FilterChanged {
        old_filter: FilterCriterion,
        new_filter: FilterCriterion,
    },

    /// Sort toggle changed
    SortChanged {
        old_sort: SortState,
        new_sort: SortState,
    },

    /// Active page changed
    PageChanged { old_page: usize, new_page: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_changed_event_should_carry_both_filters() {
        let event = ModelEvent::FilterChanged {
            old_filter: FilterCriterion::None,
            new_filter: FilterCriterion::Male,
        };

        match event {
            ModelEvent::FilterChanged {
                old_filter,
                new_filter,
            } => {
                assert_eq!(old_filter, FilterCriterion::None);
                assert_eq!(new_filter, FilterCriterion::Male);
            }
            _ => panic!("Expected FilterChanged event"),
        }
    }

    #[test]
    fn page_changed_event_should_carry_page_numbers() {
        let event = ModelEvent::PageChanged {
            old_page: 1,
            new_page: 2,
        };
        assert_eq!(
            event,
            ModelEvent::PageChanged {
                old_page: 1,
                new_page: 2
            }
        );
    }
}
