//! # Command Context
//!
//! Read-only state commands consult when deciding whether a key is theirs.

use crate::browser::models::{FilterCriterion, SortState};
use crate::browser::view_models::UserListViewModel;

/// Read-only snapshot of view model state for commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModelSnapshot {
    /// Users have been loaded successfully
    pub is_ready: bool,
    pub filter: FilterCriterion,
    pub sort: SortState,
    pub current_page: usize,
    pub page_count: usize,
    pub terminal_dimensions: (u16, u16),
}

impl ViewModelSnapshot {
    /// Create snapshot from current view model state
    pub fn from_view_model(view_model: &UserListViewModel) -> Self {
        Self {
            is_ready: view_model.is_ready(),
            filter: view_model.filter(),
            sort: view_model.sort(),
            current_page: view_model.current_page(),
            page_count: view_model.page_count(),
            terminal_dimensions: view_model.terminal_size(),
        }
    }
}

/// Base context available to all commands
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub state: ViewModelSnapshot,
}

impl CommandContext {
    pub fn new(state: ViewModelSnapshot) -> Self {
        Self { state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::models::{Address, Gender, UserRecord};

    #[test]
    fn snapshot_should_capture_idle_view_model() {
        let view_model = UserListViewModel::new();
        let snapshot = ViewModelSnapshot::from_view_model(&view_model);

        assert!(!snapshot.is_ready);
        assert_eq!(snapshot.filter, FilterCriterion::None);
        assert_eq!(snapshot.sort, SortState::Unsorted);
        assert_eq!(snapshot.current_page, 1);
        assert_eq!(snapshot.page_count, 0);
    }

    #[test]
    fn snapshot_should_capture_loaded_view_model() {
        let users = (1..=12)
            .map(|id| UserRecord {
                id,
                first_name: format!("U{id}"),
                last_name: "L".to_string(),
                age: 40,
                gender: Gender::Female,
                image: String::new(),
                address: Address {
                    state: "Utah".to_string(),
                    country: "United States".to_string(),
                },
            })
            .collect();
        let mut view_model = UserListViewModel::new();
        view_model.begin_loading();
        view_model.apply_load_result(Ok(users));

        let snapshot = ViewModelSnapshot::from_view_model(&view_model);

        assert!(snapshot.is_ready);
        assert_eq!(snapshot.page_count, 2);
    }
}
