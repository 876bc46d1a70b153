//! Overlay modules for the TUI.
//!
//! Overlays are modal UI components that temporarily take over keyboard input.
//! Each overlay is self-contained: it owns its state, key handler, and render function.
//!
//! ## Module Structure
//!
//! - `auth.rs`: Sign-in / sign-up modal
//! - `user_menu.rs`: Account menu (`u`)
//! - `notifications.rs`: Notification list (`n`)
//! - `render_utils.rs`: Shared rendering utilities for overlays
//!
//! ## Extension Trait
//!
//! `OverlayExt` provides convenience methods for `Option<Overlay>` to encapsulate
//! the common patterns used in the reducer.

pub mod auth;
pub mod notifications;
pub mod render_utils;
pub mod user_menu;

pub use auth::{AuthField, AuthMode, AuthPhase, AuthState};
use crossterm::event::KeyEvent;
pub use notifications::NotificationsState;
use ratatui::Frame;
use ratatui::layout::Rect;
pub use user_menu::UserMenuState;

use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::state::TuiState;

/// Requests to open a new overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayRequest {
    SignIn,
    SignUp,
    UserMenu,
    Notifications,
}

/// Transition returned by overlay key handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
    Open(OverlayRequest),
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub mutations: Vec<StateMutation>,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            mutations: Vec::new(),
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    pub fn open(request: OverlayRequest) -> Self {
        Self::new(OverlayTransition::Open(request))
    }

    #[must_use]
    pub fn with_mutations(mut self, mutations: Vec<StateMutation>) -> Self {
        self.mutations = mutations;
        self
    }

    #[must_use]
    pub fn with_ui_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

#[derive(Debug)]
pub enum Overlay {
    Auth(AuthState),
    UserMenu(UserMenuState),
    Notifications(NotificationsState),
}

impl Overlay {
    /// Builds the overlay for `request`.
    pub fn open(request: OverlayRequest, tui: &TuiState) -> Self {
        match request {
            OverlayRequest::SignIn => Overlay::Auth(AuthState::open(AuthMode::SignIn, tui)),
            OverlayRequest::SignUp => Overlay::Auth(AuthState::open(AuthMode::SignUp, tui)),
            OverlayRequest::UserMenu => Overlay::UserMenu(UserMenuState::default()),
            OverlayRequest::Notifications => {
                Overlay::Notifications(NotificationsState::default())
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        match self {
            Overlay::Auth(a) => a.render(frame, area, tui.tick),
            Overlay::UserMenu(m) => m.render(frame, area, tui),
            Overlay::Notifications(n) => n.render(frame, area, tui),
        }
    }

    pub fn handle_key(&mut self, tui: &mut TuiState, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Auth(a) => a.handle_key(tui, key),
            Overlay::UserMenu(m) => m.handle_key(tui, key),
            Overlay::Notifications(n) => n.handle_key(tui, key),
        }
    }

    pub fn as_auth_mut(&mut self) -> Option<&mut AuthState> {
        match self {
            Overlay::Auth(a) => Some(a),
            _ => None,
        }
    }
}

/// Extension trait for `Option<Overlay>`.
pub trait OverlayExt {
    /// Renders the overlay if one is active.
    fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState);

    /// The auth modal, if it is the active overlay.
    fn auth_mut(&mut self) -> Option<&mut AuthState>;
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        if let Some(overlay) = self {
            overlay.render(frame, area, tui);
        }
    }

    fn auth_mut(&mut self) -> Option<&mut AuthState> {
        self.as_mut().and_then(Overlay::as_auth_mut)
    }
}
