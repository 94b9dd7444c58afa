//! # Userline - Terminal Browser for Remote User Directories
//!
//! Fetches a user collection once, then lets you narrow it by gender, toggle
//! sorting by identifier or first name, and page through it ten rows at a
//! time.
//!
//! ## Architecture
//!
//! This application follows the Model-View-ViewModel (MVVM) pattern:
//!
//! ```text
//! ┌─────────────┐    Events    ┌──────────────┐    Updates   ┌────────────┐
//! │    View     │◄─────────────│  ViewModel   │◄─────────────│   Models   │
//! │             │              │              │              │            │
//! │ - Terminal  │              │ - Filter     │              │ - Users    │
//! │ - Table     │              │ - Sort       │              │ - State    │
//! │ - Pages     │              │ - Paging     │              │ - Pipeline │
//! └─────────────┘              └──────────────┘              └────────────┘
//!                                      ▲
//!                                      │ Commands
//!                                      ▼
//!                               ┌──────────────┐    fetch    ┌────────────┐
//!                               │  Controller  │────────────▶│   Loader   │
//!                               │              │◄────────────│            │
//!                               │ - Key Input  │   result    │ - HTTP     │
//!                               │ - Event Loop │             │            │
//!                               └──────────────┘             └────────────┘
//! ```

pub mod browser;
pub mod cmd_args;
pub mod config;
pub mod logging;

// Re-export main types for easy access
pub use browser::*;
