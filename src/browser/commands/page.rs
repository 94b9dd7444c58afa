//! # Page Navigation Commands
//!
//! Arrow, vim-style and paging keys plus digit shortcuts for the page buttons.
//! Only active once users are loaded.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::{plain_char, Command, CommandContext, CommandEvent, PageTarget};

pub struct PageNavigationCommand;

impl PageNavigationCommand {
    fn target_for(context: &CommandContext, event: &KeyEvent) -> Option<PageTarget> {
        match event.code {
            KeyCode::Right | KeyCode::PageDown => return Some(PageTarget::Next),
            KeyCode::Left | KeyCode::PageUp => return Some(PageTarget::Previous),
            KeyCode::Home => return Some(PageTarget::First),
            KeyCode::End => return Some(PageTarget::Last),
            _ => {}
        }

        match plain_char(event)? {
            'l' => Some(PageTarget::Next),
            'h' => Some(PageTarget::Previous),
            digit @ '1'..='9' => {
                let number = digit.to_digit(10)? as usize;
                // Only pages that have a button
                (number <= context.state.page_count).then_some(PageTarget::Number(number))
            }
            _ => None,
        }
    }
}

impl Command for PageNavigationCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.is_ready && Self::target_for(context, event).is_some()
    }

    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(Self::target_for(context, &event)
            .map(CommandEvent::page)
            .into_iter()
            .collect())
    }

    fn name(&self) -> &'static str {
        "PageNavigation"
    }
}
