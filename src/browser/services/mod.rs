//! # Services Layer
//!
//! External resources the user list depends on. Today that is only the user
//! directory: a [`UserSource`] describes where users come from and the
//! [`UserLoader`] runs the one fetch per component lifetime in the background.

pub mod error;
pub mod loader;
pub mod user_source;

pub use error::FetchError;
pub use loader::{LoadResult, UserLoader};
pub use user_source::{HttpUserSource, StaticUserSource, UserSource};
