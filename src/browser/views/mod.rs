//! # Views Module
//!
//! Everything that turns a [`RenderSnapshot`](crate::browser::view_models::RenderSnapshot)
//! into characters: cell formatting, table composition and the terminal renderer.

pub mod formatting;
pub mod table;
pub mod terminal_renderer;

pub use formatting::{format_country, format_identifier, UserRow};
pub use table::compose_plain;
pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
