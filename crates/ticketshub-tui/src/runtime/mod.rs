//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! Structure:
//! - `mod.rs`: Core runtime (TuiRuntime, event loop, effect dispatch)
//! - `inbox.rs`: Inbox channel types
//! - `handlers.rs`: Async effect handlers (credential check, verification)

mod handlers;
mod inbox;

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ticketshub_core::config::Config;
use ticketshub_core::dashboard;
use ticketshub_core::verification::VerificationTiming;
use ticketshub_core::SessionManager;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Frame interval while tasks are running or the user is typing.
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on drop or panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state (split: tui + overlay).
    pub state: AppState,
    /// Inbox sender - handlers send events here.
    inbox_tx: UiEventSender,
    /// Inbox receiver - runtime drains this each frame.
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(config: Config, session: SessionManager) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let state = AppState::new(config, session);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            inbox_tx,
            inbox_rx,
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop until the user quits.
    ///
    /// # Errors
    /// Returns an error if reading terminal input or drawing fails.
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.tui.should_quit {
            let mut events = self.collect_events()?;

            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                if !matches!(event, UiEvent::Frame { .. }) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    /// Collects inbox results, terminal input and the tick.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let tick_interval = self.state.tui.config.ui.tick_interval();

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Wake up at the next tick, or sooner while tasks may report back.
        let mut poll_duration = tick_interval.saturating_sub(self.last_tick.elapsed());
        if self.state.tui.tasks.is_any_running() {
            poll_duration = poll_duration.min(FRAME_DURATION);
        }
        if !events.is_empty() {
            poll_duration = Duration::ZERO;
        }

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        if !effects.is_empty() {
            self.execute_effects(effects);
        }
    }

    /// Spawns an async task with a uniform TaskStarted/TaskCompleted lifecycle.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, cancelable: bool, f: F)
    where
        F: FnOnce(Option<CancellationToken>) -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let cancel = cancelable.then(CancellationToken::new);
        let started = TaskStarted {
            id,
            cancel: cancel.clone(),
        };
        let _ = tx.send(UiEvent::TaskStarted { kind, started });
        tokio::spawn(async move {
            let inner = f(cancel).await;
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }

            // The reducer decides what to cancel; the runtime just fires the token.
            UiEffect::CancelTask { token, .. } => {
                if let Some(cancel) = token {
                    cancel.cancel();
                }
            }

            // Auth effects
            UiEffect::Authenticate {
                task,
                email,
                password,
            } => {
                let store = Arc::clone(&self.state.tui.store);
                self.spawn_task(TaskKind::SignIn, task, false, move |_| {
                    handlers::authenticate(store, email, password)
                });
            }
            UiEffect::StartVerification { task } => {
                let timing = VerificationTiming::from(&self.state.tui.config.verification);
                let tx = self.inbox_tx.clone();
                self.spawn_task(TaskKind::Verification, task, true, move |cancel| {
                    handlers::verification(timing, cancel, task, tx)
                });
            }
            UiEffect::EstablishSession { user } => {
                let result = self.state.tui.session.establish(user).cloned();
                self.dispatch_event(UiEvent::LoginFinished { result });
            }
            UiEffect::Logout => {
                let result = self
                    .state
                    .tui
                    .session
                    .logout()
                    .map_err(|e| format!("{e:#}"));
                self.dispatch_event(UiEvent::SignedOut { result });
            }

            // Config effects
            UiEffect::PersistLastEmail { email } => {
                if let Err(e) = Config::save_last_email(&email) {
                    // The email is already in state; only the prefill is lost.
                    tracing::warn!(error = %format!("{e:#}"), "failed to save last email");
                }
            }

            // Admin effects
            UiEffect::Moderate { user_id, action } => {
                let result = dashboard::moderate(&self.state.tui.store, &user_id, action)
                    .map_err(|e| e.to_string());
                self.dispatch_event(UiEvent::ModerationRecorded { result });
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
