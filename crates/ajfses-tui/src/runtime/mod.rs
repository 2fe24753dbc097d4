//! Console runtime: owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! - Timers and handlers send `UiEvent`s to `inbox_tx`
//! - The runtime drains `inbox_rx` each loop iteration
//!
//! ## Frame Ordering
//!
//! The screen is drawn after every batch of events. A visual start state
//! committed while handling one batch is therefore on screen before the
//! timer that applies its end state can be processed.
//!
//! Structure:
//! - `mod.rs`: Core runtime (ConsoleRuntime, event loop, effect dispatch)
//! - `inbox.rs`: Inbox channel types
//! - `timers.rs`: Cancellable timer tasks
//! - `handlers.rs`: Effect handler implementations

mod handlers;
mod inbox;
mod timers;

use std::future::Future;
use std::io::Stdout;
use std::time::{Duration, Instant};

use ajfses_core::storage::Scopes;
use anyhow::{Context, Result};
use crossterm::event;
pub use handlers::load_session;
use inbox::{UiEventReceiver, UiEventSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use timers::TimerScheduler;
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Poll duration while something is animating (~60fps).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen console runtime.
///
/// Terminal state is restored on drop, error and panic.
pub struct ConsoleRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    scopes: Scopes,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    timers: TimerScheduler,
    last_tick: Instant,
}

impl ConsoleRuntime {
    /// Takes over the terminal.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(state: AppState, scopes: Scopes) -> Result<Self> {
        // Panic hook goes in before the alternate screen.
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        let timers = TimerScheduler::new(inbox_tx.clone());

        Ok(Self {
            terminal,
            state,
            scopes,
            inbox_tx,
            inbox_rx,
            timers,
            last_tick: Instant::now(),
        })
    }

    /// Runs the event loop until the reducer asks to quit.
    ///
    /// # Errors
    /// Returns an error if terminal I/O fails.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;

        let result = self.event_loop();

        let _ = terminal::disable_input_features();
        self.timers.cancel_all();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        // Initial frame, then the startup effects (logo fade, notify overlay).
        self.draw()?;
        let effects = update::init(&mut self.state);
        self.execute_effects(effects);

        while !self.state.tui.should_quit {
            self.draw()?;

            let events = self.collect_events()?;
            for event in events {
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }
        }

        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        self.terminal.draw(|frame| {
            render::render(&self.state, frame);
        })?;
        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let needs_fast_poll = self.state.overlay.is_animating(Instant::now())
            || self.state.tui.logo.is_fading()
            || self.timers.has_pending();
        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        self.collect_inbox_events(&mut events);

        // Block until the next tick only when there is nothing to process.
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        // Timers that fired while polling join this batch.
        self.collect_inbox_events(&mut events);

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn collect_inbox_events(&mut self, events: &mut Vec<UiEvent>) {
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async handler and sends its result event to the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::ScheduleTimer { id, after } => {
                self.timers.schedule(id, after);
            }
            UiEffect::CancelTimer { id } => {
                self.timers.cancel(id);
            }
            UiEffect::CheckSession => {
                let scopes = self.scopes.clone();
                self.spawn_effect(move || handlers::check_session(scopes));
            }
        }
    }
}

impl Drop for ConsoleRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
