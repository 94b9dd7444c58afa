//! # ViewModel Module
//!
//! The user list view model, split into focused responsibilities:
//! loading, filtering, sorting, paging and render coordination.

mod core;
mod filter_manager;
mod load_manager;
mod page_manager;
mod rendering_coordinator;
mod sort_manager;


pub use self::core::UserListViewModel;
pub use rendering_coordinator::RenderSnapshot;
