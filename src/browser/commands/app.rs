//! # Application Control Commands
//!
//! Commands for controlling the application lifecycle.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};

/// Quit with `q`, `Esc` or `Ctrl+C`
pub struct QuitCommand;

impl Command for QuitCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        match event.code {
            KeyCode::Esc => true,
            KeyCode::Char('q') => event.modifiers.is_empty(),
            KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::QuitRequested])
    }

    fn name(&self) -> &'static str {
        "Quit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::commands::test_support::{context, key, key_with};

    #[test]
    fn quit_should_be_relevant_for_q_esc_and_ctrl_c() {
        let context = context(false, 0);
        let cmd = QuitCommand;

        assert!(cmd.is_relevant(&context, &key(KeyCode::Char('q'))));
        assert!(cmd.is_relevant(&context, &key(KeyCode::Esc)));
        assert!(cmd.is_relevant(
            &context,
            &key_with(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn quit_should_not_be_relevant_for_plain_c_or_ctrl_q() {
        let context = context(true, 1);
        let cmd = QuitCommand;

        assert!(!cmd.is_relevant(&context, &key(KeyCode::Char('c'))));
        assert!(!cmd.is_relevant(
            &context,
            &key_with(KeyCode::Char('q'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn quit_should_produce_quit_event() {
        let events = QuitCommand
            .execute(key(KeyCode::Char('q')), &context(true, 1))
            .unwrap();
        assert_eq!(events, vec![CommandEvent::QuitRequested]);
    }
}
