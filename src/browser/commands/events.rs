//! # Command Events
//!
//! Events produced by commands that describe what should happen.
//! Commands produce these events, and the controller applies them to the view
//! model. Commands suggest, the controller decides.

use crate::browser::models::FilterCriterion;

/// Sort key a toggle applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Identifier,
    Name,
}

/// Page a navigation key points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    /// 1-based page button
    Number(usize),
    Next,
    Previous,
    First,
    Last,
}

/// Events that commands can produce to request changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEvent {
    /// Select a specific gender filter
    FilterSelectRequested { criterion: FilterCriterion },

    /// Advance to the next gender filter
    FilterCycleRequested,

    /// Toggle sorting on `key`
    SortToggleRequested { key: SortKey },

    /// Move to another page
    PageRequested { target: PageTarget },

    /// Leave the application
    QuitRequested,

    /// No action needed
    NoAction,
}

impl CommandEvent {
    pub fn select_filter(criterion: FilterCriterion) -> Self {
        Self::FilterSelectRequested { criterion }
    }

    pub fn toggle_sort(key: SortKey) -> Self {
        Self::SortToggleRequested { key }
    }

    pub fn page(target: PageTarget) -> Self {
        Self::PageRequested { target }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_should_build_matching_variants() {
        assert_eq!(
            CommandEvent::select_filter(FilterCriterion::Female),
            CommandEvent::FilterSelectRequested {
                criterion: FilterCriterion::Female
            }
        );
        assert_eq!(
            CommandEvent::toggle_sort(SortKey::Name),
            CommandEvent::SortToggleRequested { key: SortKey::Name }
        );
        assert_eq!(
            CommandEvent::page(PageTarget::Number(3)),
            CommandEvent::PageRequested {
                target: PageTarget::Number(3)
            }
        );
    }
}
