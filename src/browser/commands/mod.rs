//! # Commands Module
//!
//! Key handling for the user list. Each command decides whether a key event is
//! its own and, if so, describes the requested change as [`CommandEvent`]s.
//! The [`CommandRegistry`] tries commands in registration order; the first
//! relevant one wins.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub mod app;
pub mod context;
pub mod events;
pub mod filter;
pub mod page;
pub mod sort;

pub use app::QuitCommand;
pub use context::{CommandContext, ViewModelSnapshot};
pub use events::{CommandEvent, PageTarget, SortKey};
pub use filter::{FilterCycleCommand, FilterSelectCommand};
pub use page::PageNavigationCommand;
pub use sort::SortToggleCommand;

/// A key binding
pub trait Command: Send + Sync {
    /// Whether this command handles `event` in the current state
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Describe the change the key requests
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Get command name for debugging and logging
    fn name(&self) -> &'static str;
}

/// Character of an unmodified (or shifted) key press
pub(crate) fn plain_char(event: &KeyEvent) -> Option<char> {
    let KeyCode::Char(ch) = event.code else {
        return None;
    };
    if event.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
        Some(ch)
    } else {
        None
    }
}

/// Type alias for command collection to reduce complexity
pub type CommandCollection = Vec<Box<dyn Command>>;

/// Registry that holds all available commands
pub struct CommandRegistry {
    commands: CommandCollection,
}

impl CommandRegistry {
    /// Create new command registry with default commands
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };

        registry.register_default_commands();
        registry
    }

    fn register_default_commands(&mut self) {
        self.add_command(Box::new(QuitCommand));

        self.add_command(Box::new(FilterCycleCommand));
        self.add_command(Box::new(FilterSelectCommand));

        self.add_command(Box::new(SortToggleCommand));
        self.add_command(Box::new(PageNavigationCommand));
    }

    /// Add a command to the registry
    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    /// Run `event` through the first relevant command
    ///
    /// Returns no events when nothing handles the key. Key releases and
    /// repeats reported by some terminals are ignored.
    pub fn process_event(
        &self,
        event: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        if event.kind == KeyEventKind::Release {
            return Ok(Vec::new());
        }

        for command in &self.commands {
            if command.is_relevant(context, &event) {
                tracing::debug!("Key {:?} handled by {}", event.code, command.name());
                return command.execute(event, context);
            }
        }

        tracing::debug!(
            "Key {:?} ignored (ready={})",
            event.code,
            context.state.is_ready
        );
        Ok(Vec::new())
    }

    /// Get all commands (for testing/debugging)
    pub fn commands(&self) -> &CommandCollection {
        &self.commands
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
