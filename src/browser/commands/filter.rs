//! # Filter Commands
//!
//! Gender selector keys. These work in every load state; a filter picked while
//! the list is still loading applies once users arrive.

use anyhow::Result;
use crossterm::event::KeyEvent;

use super::{plain_char, Command, CommandContext, CommandEvent};
use crate::browser::models::FilterCriterion;

/// `g` cycles none → male → female → none
pub struct FilterCycleCommand;

impl Command for FilterCycleCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        plain_char(event) == Some('g')
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::FilterCycleRequested])
    }

    fn name(&self) -> &'static str {
        "FilterCycle"
    }
}

/// `a`, `m` and `f` pick a criterion directly
pub struct FilterSelectCommand;

impl FilterSelectCommand {
    fn criterion_for(event: &KeyEvent) -> Option<FilterCriterion> {
        match plain_char(event)? {
            'a' => Some(FilterCriterion::None),
            'm' => Some(FilterCriterion::Male),
            'f' => Some(FilterCriterion::Female),
            _ => None,
        }
    }
}

impl Command for FilterSelectCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        Self::criterion_for(event).is_some()
    }

    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        match Self::criterion_for(&event) {
            Some(criterion) if criterion != context.state.filter => {
                Ok(vec![CommandEvent::select_filter(criterion)])
            }
            Some(_) => Ok(vec![CommandEvent::NoAction]),
            None => {
                tracing::debug!("FilterSelect executed for unbound key {:?}", event.code);
                Ok(Vec::new())
            }
        }
    }

    fn name(&self) -> &'static str {
        "FilterSelect"
    }
}
