//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin display client:
//! - Event loop (keyboard, resize)
//! - Navigator for all state and transitions
//! - Renderer + Theme for drawing
//!
//! The App keeps no state of its own. Every key press is mapped to a
//! `NavEvent`, handed to the navigator, and the screen is redrawn from the
//! navigator's state.

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::Terminal;

use labcalc_core::{LabcalcConfig, Navigator, Registry, Renderer};

use crate::keymap;
use crate::theme::Theme;
use crate::view;

/// Main application state
pub struct App {
    /// Session state and transitions
    navigator: Navigator,
    /// Text façade, configured once at startup
    renderer: Renderer,
    /// Colours, configured once at startup
    theme: Theme,
}

impl App {
    /// Create an app over the built-in calculator catalog
    pub fn new(config: &LabcalcConfig) -> anyhow::Result<Self> {
        let registry = Registry::builtin()?;
        Ok(Self::with_registry(registry, config))
    }

    /// Create an app over a custom catalog
    #[must_use]
    pub fn with_registry(registry: Registry, config: &LabcalcConfig) -> Self {
        tracing::debug!(
            domains = registry.domain_count(),
            char_limit = config.char_limit,
            "starting session"
        );
        Self {
            navigator: Navigator::from_config(registry, config),
            renderer: Renderer::new(config.style.clone()).with_hints(keymap::hint),
            theme: Theme::default(),
        }
    }

    /// The navigator driving this app
    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Is the app still running?
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.navigator.is_quitting()
    }

    /// Main event loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();

        // Render initial frame immediately so user sees UI
        self.draw(terminal)?;

        while self.is_running() {
            match event_stream.next().await {
                // Only handle Press events (not Release or Repeat)
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    self.handle_key(key)?;
                }
                Some(Ok(Event::Resize(..))) => {}
                Some(Ok(_)) => continue,
                Some(Err(e)) => return Err(e.into()),
                None => break,
            }

            self.draw(terminal)?;
        }

        Ok(())
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        let stage = self.navigator.stage();
        if let Some(event) = keymap::map_key(stage, key) {
            tracing::trace!(stage = stage.name(), ?event, "key mapped");
            self.navigator.handle_event(event)?;
        }
        Ok(())
    }

    /// Render the UI
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let screen = self.renderer.screen(&self.navigator);
        terminal.draw(|frame| view::draw(frame, &screen, &self.theme))?;
        Ok(())
    }

    /// Last computed result, for printing after the TUI closes
    #[must_use]
    pub fn farewell(&self) -> Option<String> {
        let precision = self.renderer.style().precision;
        self.navigator
            .state()
            .last_result()
            .map(|measurement| format!("{measurement:.precision$}"))
    }
}
