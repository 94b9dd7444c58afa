//! # User List Browser
//!
//! The interactive user list: models, services, view model, views, commands,
//! events, I/O streams and the controller that ties them together.

pub mod commands;
pub mod controllers;
pub mod events;
pub mod io;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controllers::{print_user_list, AppController};
pub use view_models::{RenderSnapshot, UserListViewModel};

// Re-export specific items from commands to avoid conflicts
pub use commands::{Command, CommandContext, CommandEvent, CommandRegistry, ViewModelSnapshot};

// Re-export specific items from models and services
pub use models::{DerivedView, FilterCriterion, ListState, LoadState, SortState, UserRecord};
pub use services::{FetchError, HttpUserSource, StaticUserSource, UserLoader, UserSource};
