//! # Controllers Module
//!
//! Contains the controller that runs the event loop, plus the one-shot print
//! mode.

pub mod app_controller;

// Re-export main types for convenience
pub use app_controller::{print_user_list, AppController};
