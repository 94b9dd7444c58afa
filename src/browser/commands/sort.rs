//! # Sort Commands
//!
//! `i` toggles the identifier sort, `n` the name sort. Both only apply once
//! users are loaded.

use anyhow::Result;
use crossterm::event::KeyEvent;

use super::{plain_char, Command, CommandContext, CommandEvent, SortKey};

pub struct SortToggleCommand;

impl SortToggleCommand {
    fn key_for(event: &KeyEvent) -> Option<SortKey> {
        match plain_char(event)? {
            'i' => Some(SortKey::Identifier),
            'n' => Some(SortKey::Name),
            _ => None,
        }
    }
}

impl Command for SortToggleCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.is_ready && Self::key_for(event).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(Self::key_for(&event)
            .map(CommandEvent::toggle_sort)
            .into_iter()
            .collect())
    }

    fn name(&self) -> &'static str {
        "SortToggle"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::commands::test_support::{context, key};
    use crossterm::event::KeyCode;

    #[test]
    fn sort_toggle_should_map_keys() {
        let context = context(true, 1);
        assert_eq!(
            SortToggleCommand
                .execute(key(KeyCode::Char('i')), &context)
                .unwrap(),
            vec![CommandEvent::toggle_sort(SortKey::Identifier)]
        );
        assert_eq!(
            SortToggleCommand
                .execute(key(KeyCode::Char('n')), &context)
                .unwrap(),
            vec![CommandEvent::toggle_sort(SortKey::Name)]
        );
    }

    #[test]
    fn sort_toggle_should_not_be_relevant_before_load() {
        let context = context(false, 0);
        assert!(!SortToggleCommand.is_relevant(&context, &key(KeyCode::Char('i'))));
    }

    #[test]
    fn sort_toggle_should_ignore_other_keys() {
        let context = context(true, 1);
        assert!(!SortToggleCommand.is_relevant(&context, &key(KeyCode::Char('s'))));
    }
}
