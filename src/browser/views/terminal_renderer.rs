//! # Terminal Renderer
//!
//! Draws [`RenderSnapshot`]s onto a [`RenderStream`]. Screen layout:
//!
//! ```text
//! row 0          title
//! row 1          gender selector
//! rows 3..       table header, separator, up to one page of rows
//! strip row      page buttons
//! height - 2     key help
//! height - 1     status bar
//! ```

use super::table::{self, TITLE};
use crate::browser::events::ViewEvent;
use crate::browser::io::RenderStream;
use crate::browser::models::LoadState;
use crate::browser::view_models::RenderSnapshot;
use crate::config::PAGE_SIZE;
use anyhow::Result;
use crossterm::queue;
use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};
use std::io::Write;

/// Key summary shown above the status bar
pub const KEY_HELP: &str =
    "g/a/m/f gender  i id sort  n name sort  ←/→ page  1-9 jump  q quit";

const TITLE_ROW: u16 = 0;
const FILTER_ROW: u16 = 1;
const TABLE_TOP: u16 = 3;

// Helper macro to convert crossterm errors to anyhow errors
macro_rules! queue_term {
    ($($arg:expr),* $(,)?) => {
        queue!($($arg),*).map_err(anyhow::Error::from)
    };
}

/// How a line is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineStyle {
    Plain,
    Bold,
    Dim,
    Error,
}

/// Trait for rendering views
pub trait ViewRenderer {
    /// Enter the alternate screen and hide the cursor
    fn initialize(&mut self) -> Result<()>;

    /// Redraw everything
    fn render_full(&mut self, snapshot: &RenderSnapshot) -> Result<()>;

    /// Redraw the gender selector and the table region
    fn render_table(&mut self, snapshot: &RenderSnapshot) -> Result<()>;

    fn render_page_strip(&mut self, snapshot: &RenderSnapshot) -> Result<()>;

    fn render_status_bar(&mut self, snapshot: &RenderSnapshot) -> Result<()>;

    /// Handle one view event
    fn handle_view_event(&mut self, event: ViewEvent, snapshot: &RenderSnapshot) -> Result<()>;

    /// Restore the cursor and the original screen
    fn cleanup(&mut self) -> Result<()>;
}

/// Renderer drawing onto any [`RenderStream`]
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    terminal_size: (u16, u16),
    page_size: usize,
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    /// Create a renderer sized from the stream's terminal
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.get_size()?;
        Ok(Self {
            render_stream,
            terminal_size,
            page_size: PAGE_SIZE,
        })
    }

    /// Number of table rows reserved below the header
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Update terminal size
    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn render_stream_mut(&mut self) -> &mut RS {
        &mut self.render_stream
    }

    /// Header, separator, a page of rows and one spare line for the empty notice
    fn table_height(&self) -> u16 {
        u16::try_from(self.page_size + 3).unwrap_or(u16::MAX)
    }

    fn page_strip_row(&self) -> u16 {
        TABLE_TOP.saturating_add(self.table_height()).saturating_add(1)
    }

    fn status_row(&self) -> u16 {
        self.terminal_size.1.saturating_sub(1)
    }

    fn help_row(&self) -> u16 {
        self.terminal_size.1.saturating_sub(2)
    }

    /// Whether `row` is above the help line and still on screen
    fn fits(&self, row: u16) -> bool {
        row < self.help_row()
    }

    /// Draw `text` at the start of `row`, cut to the terminal width
    fn draw_line(&mut self, row: u16, text: &str, style: LineStyle) -> Result<()> {
        let width = usize::from(self.terminal_size.0);
        let visible: String = text.chars().take(width).collect();

        self.render_stream.move_cursor(0, row)?;
        match style {
            LineStyle::Plain => {}
            LineStyle::Bold => queue_term!(self.render_stream, SetAttribute(Attribute::Bold))?,
            LineStyle::Dim => {
                queue_term!(self.render_stream, SetForegroundColor(Color::DarkGrey))?
            }
            LineStyle::Error => queue_term!(self.render_stream, SetForegroundColor(Color::Red))?,
        }
        self.render_stream.write_all(visible.as_bytes())?;
        if style != LineStyle::Plain {
            queue_term!(
                self.render_stream,
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }
        self.render_stream.clear_line()?;
        Ok(())
    }

    fn draw_title(&mut self) -> Result<()> {
        self.draw_line(TITLE_ROW, TITLE, LineStyle::Bold)
    }

    fn draw_filter_line(&mut self, snapshot: &RenderSnapshot) -> Result<()> {
        let line = table::filter_line(snapshot.view.filter);
        self.draw_line(FILTER_ROW, &line, LineStyle::Plain)
    }

    fn draw_table_region(&mut self, snapshot: &RenderSnapshot) -> Result<()> {
        let lines = table::body_lines(snapshot);
        let failed = matches!(snapshot.load_state, LoadState::Failed { .. });

        for offset in 0..self.table_height() {
            let row = TABLE_TOP + offset;
            if !self.fits(row) {
                break;
            }
            match lines.get(usize::from(offset)) {
                Some(line) => {
                    let style = if failed {
                        LineStyle::Error
                    } else if offset == 0 && snapshot.shows_table() {
                        LineStyle::Bold
                    } else {
                        LineStyle::Plain
                    };
                    self.draw_line(row, line, style)?;
                }
                None => self.draw_line(row, "", LineStyle::Plain)?,
            }
        }
        Ok(())
    }

    fn draw_page_strip(&mut self, snapshot: &RenderSnapshot) -> Result<()> {
        let row = self.page_strip_row();
        if !self.fits(row) {
            return Ok(());
        }

        let strip = if snapshot.shows_table() {
            table::page_strip(&snapshot.view)
        } else {
            String::new()
        };

        if strip.is_empty() {
            self.draw_line(row, "", LineStyle::Plain)
        } else {
            self.draw_line(row, &format!("Pages: {strip}"), LineStyle::Plain)
        }
    }

    fn draw_help(&mut self) -> Result<()> {
        if self.terminal_size.1 < 2 {
            return Ok(());
        }
        let row = self.help_row();
        self.draw_line(row, KEY_HELP, LineStyle::Dim)
    }

    fn draw_status_bar(&mut self, snapshot: &RenderSnapshot) -> Result<()> {
        let row = self.status_row();
        let text = table::status_text(snapshot);
        let style = match snapshot.load_state {
            LoadState::Failed { .. } => LineStyle::Error,
            _ => LineStyle::Dim,
        };
        self.draw_line(row, &text, style)
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.enter_screen()?;
        self.render_stream.clear_screen()?;
        self.render_stream.set_cursor_visible(false)?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_full(&mut self, snapshot: &RenderSnapshot) -> Result<()> {
        self.render_stream.clear_screen()?;
        self.draw_title()?;
        self.draw_filter_line(snapshot)?;
        self.draw_table_region(snapshot)?;
        self.draw_page_strip(snapshot)?;
        self.draw_help()?;
        self.draw_status_bar(snapshot)?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_table(&mut self, snapshot: &RenderSnapshot) -> Result<()> {
        self.draw_filter_line(snapshot)?;
        self.draw_table_region(snapshot)?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_page_strip(&mut self, snapshot: &RenderSnapshot) -> Result<()> {
        self.draw_page_strip(snapshot)?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_status_bar(&mut self, snapshot: &RenderSnapshot) -> Result<()> {
        self.draw_status_bar(snapshot)?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn handle_view_event(&mut self, event: ViewEvent, snapshot: &RenderSnapshot) -> Result<()> {
        match event {
            ViewEvent::FullRedrawRequired => self.render_full(snapshot),
            ViewEvent::TableRedrawRequired => self.render_table(snapshot),
            ViewEvent::PageStripRedrawRequired => self.render_page_strip(snapshot),
            ViewEvent::StatusBarUpdateRequired => self.render_status_bar(snapshot),
        }
    }

    fn cleanup(&mut self) -> Result<()> {
        self.render_stream.set_cursor_visible(true)?;
        self.render_stream.leave_screen()?;
        self.render_stream.flush()?;
        Ok(())
    }
}
