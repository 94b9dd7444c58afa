//! # Models Module
//!
//! Data owned by the user list: fetched records, the explicit list state and
//! the pure pipeline that derives the visible page from it.

pub mod list_state;
pub mod pipeline;
pub mod user;

pub use list_state::{FilterCriterion, ListState, LoadState, SortState};
pub use pipeline::{
    apply_filter, clamp_page, compare_names, derive_view, page, page_count, sort_view,
    DerivedView,
};
pub use user::{Address, Gender, UserRecord, UsersPayload};
