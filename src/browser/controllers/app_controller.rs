//! # Application Controller
//!
//! The controller orchestrates the user list components and runs the event
//! loop: it starts the single fetch, maps key presses to commands, applies the
//! resulting command events to the view model and turns the view events that
//! come back into renders.

use crate::browser::{
    commands::{
        CommandContext, CommandEvent, CommandRegistry, PageTarget, SortKey, ViewModelSnapshot,
    },
    events::{InputEvent, SimpleEventBus, ViewEvent},
    io::{EventStream, RenderStream},
    models::ListState,
    services::{UserLoader, UserSource},
    view_models::UserListViewModel,
    views::{compose_plain, TerminalRenderer, ViewRenderer},
};
use crate::{cmd_args::CommandLineArgs, config};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use std::io::Write;
use std::time::Duration;

/// How long one loop iteration waits for terminal input
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Build the view model for `cmd_args`, with presets applied before load
fn initial_view_model(cmd_args: &CommandLineArgs, source_label: String) -> UserListViewModel {
    let state = ListState::with_selectors(cmd_args.gender(), cmd_args.sort(), cmd_args.page());
    let mut view_model = UserListViewModel::with_state(state, config::PAGE_SIZE);
    view_model.set_source_label(source_label);
    view_model.set_event_bus(Box::new(SimpleEventBus::with_activity_log()));
    view_model
}

/// The main application controller that orchestrates the MVVM pattern
pub struct AppController<ES: EventStream, RS: RenderStream, S: UserSource> {
    view_model: UserListViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    event_stream: ES,
    loader: UserLoader<S>,
    should_quit: bool,
}

impl<ES: EventStream, RS: RenderStream, S: UserSource> AppController<ES, RS, S> {
    /// Create new application controller with injected I/O streams and user source
    pub fn with_io_streams(
        cmd_args: &CommandLineArgs,
        source: S,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let mut view_model = initial_view_model(cmd_args, source.describe());

        // Pass RenderStream ownership to the View layer (TerminalRenderer)
        let view_renderer =
            TerminalRenderer::with_render_stream(render_stream)?.with_page_size(config::PAGE_SIZE);

        // Synchronize view model with actual terminal size
        let (width, height) = view_renderer.terminal_size();
        view_model.update_terminal_size(width, height);
        view_model.collect_pending_view_events();

        tracing::debug!(
            "AppController created: source={}, filter={}, sort={}, page={}",
            view_model.source_label(),
            cmd_args.gender(),
            cmd_args.sort(),
            cmd_args.page()
        );

        Ok(Self {
            view_model,
            view_renderer,
            command_registry: CommandRegistry::new(),
            event_stream,
            loader: UserLoader::new(source),
            should_quit: false,
        })
    }

    /// Start the background fetch once
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_loading(&mut self) {
        if self.loader.is_started() {
            return;
        }
        self.view_model.begin_loading();
        self.loader.start();
    }

    /// Start the fetch if needed and wait for its outcome
    pub async fn wait_for_load(&mut self) -> Result<()> {
        self.start_loading();
        if let Some(result) = self.loader.recv().await {
            self.view_model.apply_load_result(result);
            self.render_pending()?;
        }
        Ok(())
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;
        self.start_loading();
        self.view_model.collect_pending_view_events();
        self.view_renderer.render_full(&self.view_model.snapshot())?;

        let result = self.event_loop().await;

        // Restore the terminal even when the loop failed
        self.view_renderer.cleanup()?;
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        while !self.should_quit {
            if let Some(result) = self.loader.poll() {
                self.view_model.apply_load_result(result);
                self.render_pending()?;
            }

            if self.event_stream.poll(INPUT_POLL_INTERVAL)? {
                let event = self.event_stream.read()?;
                self.handle_terminal_event(event)?;
            } else {
                // Let the fetch task make progress on single-threaded runtimes
                tokio::task::yield_now().await;
            }
        }
        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) -> Result<()> {
        let input = match event {
            Event::Key(key_event) => InputEvent::KeyPressed(key_event),
            Event::Resize(width, height) => InputEvent::TerminalResized { width, height },
            _ => return Ok(()),
        };
        self.handle_input_event(input)
    }

    /// Apply one input event
    pub fn handle_input_event(&mut self, input: InputEvent) -> Result<()> {
        match input {
            InputEvent::KeyPressed(key_event) => self.process_key_event(key_event),
            InputEvent::TerminalResized { width, height } => {
                tracing::debug!("Terminal resized to {}x{}", width, height);
                self.view_renderer.update_size(width, height);
                self.view_model.update_terminal_size(width, height);
                self.render_pending()
            }
        }
    }

    /// Map one key press to commands and apply them
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        tracing::debug!("Received key event: {:?}", key_event);

        let context = CommandContext::new(ViewModelSnapshot::from_view_model(&self.view_model));
        let events = match self.command_registry.process_event(key_event, &context) {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!("Failed to process key event {:?}: {}", key_event, e);
                return Ok(());
            }
        };

        if events.is_empty() {
            return Ok(());
        }
        tracing::debug!("Command events generated: {:?}", events);

        for event in events {
            self.apply_command_event(event);
        }

        if self.should_quit {
            return Ok(());
        }
        self.render_pending()
    }

    /// Apply a command event to the view model
    fn apply_command_event(&mut self, event: CommandEvent) {
        match event {
            CommandEvent::FilterSelectRequested { criterion } => {
                self.view_model.set_filter(criterion);
            }
            CommandEvent::FilterCycleRequested => {
                self.view_model.cycle_filter();
            }
            CommandEvent::SortToggleRequested { key } => {
                match key {
                    SortKey::Identifier => self.view_model.toggle_sort_by_identifier(),
                    SortKey::Name => self.view_model.toggle_sort_by_name(),
                };
            }
            CommandEvent::PageRequested { target } => {
                match target {
                    PageTarget::Number(n) => self.view_model.select_page(n),
                    PageTarget::Next => self.view_model.next_page(),
                    PageTarget::Previous => self.view_model.previous_page(),
                    PageTarget::First => self.view_model.first_page(),
                    PageTarget::Last => self.view_model.last_page(),
                };
            }
            CommandEvent::QuitRequested => {
                tracing::debug!("Quit requested");
                self.should_quit = true;
            }
            CommandEvent::NoAction => {}
        }
    }

    /// Drain view events and render them
    fn render_pending(&mut self) -> Result<()> {
        let view_events = self.view_model.collect_pending_view_events();
        self.process_view_events(view_events)
    }

    /// Fold a batch of view events into the fewest renders
    fn process_view_events(&mut self, view_events: Vec<ViewEvent>) -> Result<()> {
        if view_events.is_empty() {
            return Ok(());
        }

        let snapshot = self.view_model.snapshot();

        // Full redraw covers everything else
        if view_events.contains(&ViewEvent::FullRedrawRequired) {
            return self.view_renderer.render_full(&snapshot);
        }

        for event in [
            ViewEvent::TableRedrawRequired,
            ViewEvent::PageStripRedrawRequired,
            ViewEvent::StatusBarUpdateRequired,
        ] {
            if view_events.contains(&event) {
                self.view_renderer.handle_view_event(event, &snapshot)?;
            }
        }
        Ok(())
    }

    pub fn view_model(&self) -> &UserListViewModel {
        &self.view_model
    }

    pub fn view_model_mut(&mut self) -> &mut UserListViewModel {
        &mut self.view_model
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

/// Non-interactive mode: fetch once and write the page as plain text
///
/// Returns whether the users loaded; a failed fetch is still printed.
pub async fn print_user_list<S: UserSource, W: Write>(
    cmd_args: &CommandLineArgs,
    source: S,
    out: &mut W,
) -> Result<bool> {
    let mut view_model = initial_view_model(cmd_args, source.describe());
    let mut loader = UserLoader::new(source);

    view_model.begin_loading();
    loader.start();
    if let Some(result) = loader.recv().await {
        view_model.apply_load_result(result);
    }

    out.write_all(compose_plain(&view_model.snapshot()).as_bytes())?;
    out.flush()?;
    Ok(view_model.is_ready())
}
