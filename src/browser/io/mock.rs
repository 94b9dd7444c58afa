//! # Mock I/O Implementations for Testing
//!
//! Scripted input and captured output, so the controller can be driven
//! without a terminal.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Pre-programmed event source
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Stream of plain key presses for the given characters
    pub fn from_keys(keys: &str) -> Self {
        Self::new(
            keys.chars()
                .map(|ch| Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)))
                .collect(),
        )
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl Default for MockEventStream {
    fn default() -> Self {
        Self::empty()
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available"))
    }
}

/// Recorded render command for verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    ClearScreen,
    MoveCursor(u16, u16),
    ClearLine,
    CursorVisible(bool),
    EnterScreen,
    LeaveScreen,
    Write(Vec<u8>),
    Flush,
}

/// Shared view of everything a [`MockRenderStream`] received
///
/// Stays readable after the stream itself has been moved into a controller.
#[derive(Debug, Clone, Default)]
pub struct MockOutput {
    commands: Arc<Mutex<Vec<RenderCommand>>>,
}

impl MockOutput {
    /// Recorded commands in order
    pub fn commands(&self) -> Vec<RenderCommand> {
        self.lock().clone()
    }

    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.lock().contains(command)
    }

    /// Text written since the last clear-screen, escape sequences included
    pub fn screen_text(&self) -> String {
        let commands = self.lock();
        let start = commands
            .iter()
            .rposition(|c| *c == RenderCommand::ClearScreen)
            .map_or(0, |i| i + 1);
        let bytes: Vec<u8> = commands[start..]
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Write(bytes) => Some(bytes.as_slice()),
                _ => None,
            })
            .flatten()
            .copied()
            .collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Every byte ever written, escape sequences included
    pub fn all_text(&self) -> String {
        let bytes: Vec<u8> = self
            .lock()
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Write(bytes) => Some(bytes.clone()),
                _ => None,
            })
            .flatten()
            .collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn record(&self, command: RenderCommand) {
        self.lock().push(command);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<RenderCommand>> {
        // A panicking test thread must not hide the output from the others
        self.commands
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Render stream that records instead of drawing
pub struct MockRenderStream {
    output: MockOutput,
    terminal_size: TerminalSize,
    cursor_visible: bool,
    in_screen: bool,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            output: MockOutput::default(),
            terminal_size: size,
            cursor_visible: true,
            in_screen: false,
        }
    }

    /// Handle for inspecting output after the stream is moved
    pub fn output(&self) -> MockOutput {
        self.output.clone()
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn is_in_screen(&self) -> bool {
        self.in_screen
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.output.record(RenderCommand::Write(buf.to_vec()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.output.record(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        self.output.record(RenderCommand::ClearScreen);
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.output.record(RenderCommand::MoveCursor(x, y));
        Ok(())
    }

    fn clear_line(&mut self) -> Result<()> {
        self.output.record(RenderCommand::ClearLine);
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        self.output.record(RenderCommand::CursorVisible(visible));
        self.cursor_visible = visible;
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(self.terminal_size)
    }

    fn enter_screen(&mut self) -> Result<()> {
        self.output.record(RenderCommand::EnterScreen);
        self.in_screen = true;
        Ok(())
    }

    fn leave_screen(&mut self) -> Result<()> {
        self.output.record(RenderCommand::LeaveScreen);
        self.in_screen = false;
        Ok(())
    }
}
