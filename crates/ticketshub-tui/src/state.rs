//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── session: SessionManager  (signed-in user, persisted snapshot)
//! │   ├── store: Arc<MockStore>    (read-only data)
//! │   ├── nav_index                (selected header entry)
//! │   ├── landing / dashboard      (per-page view state)
//! │   ├── task_seq / tasks         (async task lifecycle)
//! │   └── toast                    (transient message)
//! └── overlay: Option<Overlay>     (modal overlays)
//! ```
//!
//! Overlays live beside `TuiState` rather than inside it so overlay handlers
//! can take `&mut self` and `&mut TuiState` at the same time.

use std::sync::Arc;
use std::time::Duration;

use ticketshub_core::config::Config;
use ticketshub_core::{MockStore, SessionManager};
use ticketshub_types::Role;

use crate::common::{TaskSeq, Tasks};
use crate::features::dashboard::DashboardState;
use crate::features::header::{NavItem, nav_items};
use crate::features::landing::LandingState;
use crate::overlays::Overlay;

/// How long a toast stays on screen.
const TOAST_DURATION: Duration = Duration::from_secs(3);

pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(config: Config, session: SessionManager) -> Self {
        Self {
            tui: TuiState::new(config, session),
            overlay: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    /// Tick count at which the toast disappears.
    pub expires_at: u64,
}

pub struct TuiState {
    pub should_quit: bool,
    pub config: Config,
    pub store: Arc<MockStore>,
    pub session: SessionManager,
    /// Index into `nav_items(role)`.
    pub nav_index: usize,
    pub landing: LandingState,
    pub dashboard: DashboardState,
    pub task_seq: TaskSeq,
    pub tasks: Tasks,
    pub toast: Option<Toast>,
    /// Ticks since startup.
    pub tick: u64,
    /// Prefill for the sign-in email field.
    pub last_email: Option<String>,
    pub terminal_size: (u16, u16),
}

impl TuiState {
    pub fn new(config: Config, session: SessionManager) -> Self {
        let store = Arc::clone(session.store());
        let last_email = config.last_email.clone();
        Self {
            should_quit: false,
            config,
            store,
            session,
            nav_index: 0,
            landing: LandingState::default(),
            dashboard: DashboardState::default(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            toast: None,
            tick: 0,
            last_email,
            terminal_size: (0, 0),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.session.role()
    }

    pub fn current_nav(&self) -> NavItem {
        let items = nav_items(self.role());
        items
            .get(self.nav_index)
            .or_else(|| items.first())
            .copied()
            .unwrap_or(NavItem::Home)
    }

    /// Number of ticks covering `duration` at the configured tick rate (at least 1).
    pub fn ticks_for(&self, duration: Duration) -> u64 {
        let tick_ms = self.config.ui.tick_interval().as_millis().max(1);
        (duration.as_millis() / tick_ms).max(1) as u64
    }

    pub fn show_toast(&mut self, kind: ToastKind, message: String) {
        self.toast = Some(Toast {
            message,
            kind,
            expires_at: self.tick + self.ticks_for(TOAST_DURATION),
        });
    }

    pub fn unread_count(&self) -> usize {
        self.session
            .current_user()
            .map_or(0, |u| self.store.unread_count(&u.id))
    }
}
