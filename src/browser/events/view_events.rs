//! # View Events
//!
//! Redraw requests queued by the view model and drained by the controller.
//! The controller folds a batch of these into the cheapest set of renders.

use crossterm::event::KeyEvent;

/// Events emitted when view updates are needed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewEvent {
    /// Whole screen must be redrawn (load finished, resize)
    FullRedrawRequired,

    /// Header, filter line and table rows changed
    TableRedrawRequired,

    /// Page button strip changed
    PageStripRedrawRequired,

    /// Status bar needs updating
    StatusBarUpdateRequired,
}

/// Input events from user or system
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key pressed
    KeyPressed(KeyEvent),

    /// Terminal resized
    TerminalResized { width: u16, height: u16 },
}
