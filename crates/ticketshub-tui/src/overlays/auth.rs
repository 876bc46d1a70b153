use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ticketshub_core::verification::SignUpRequest;
use ticketshub_types::Role;

use super::OverlayUpdate;
use crate::common::{TaskId, TaskKind};
use crate::effects::UiEffect;
use crate::features::auth::render_auth_overlay;
use crate::state::TuiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn fields(self) -> &'static [AuthField] {
        match self {
            AuthMode::SignIn => &[AuthField::Email, AuthField::Password],
            AuthMode::SignUp => &[
                AuthField::Name,
                AuthField::Email,
                AuthField::Phone,
                AuthField::Role,
            ],
        }
    }

    fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Email,
    Phone,
    Role,
    Password,
}

impl AuthField {
    pub fn label(self) -> &'static str {
        match self {
            AuthField::Name => "Full name",
            AuthField::Email => "Email",
            AuthField::Phone => "Phone",
            AuthField::Role => "I am a",
            AuthField::Password => "Password",
        }
    }
}

/// Where the modal is in its flow.
///
/// Every non-form phase carries the id of the task it waits on; results from
/// any other task are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    Form,
    /// Credentials submitted, waiting for the check.
    Submitting { task: TaskId },
    /// Sign-up submitted, account review in progress.
    Verifying { task: TaskId },
    /// Review finished, about to sign in.
    Verified { task: TaskId },
    /// Signing in with the demo account for the chosen role.
    AutoLogin { task: TaskId },
}

impl AuthPhase {
    pub fn is_busy(self) -> bool {
        self != AuthPhase::Form
    }
}

#[derive(Debug, Clone)]
pub struct AuthState {
    pub mode: AuthMode,
    pub phase: AuthPhase,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    /// Index into `Role::signup_roles()`.
    pub role_index: usize,
    /// Index into `mode.fields()`.
    pub focus: usize,
    pub error: Option<String>,
}

impl AuthState {
    pub fn open(mode: AuthMode, tui: &TuiState) -> Self {
        Self {
            mode,
            phase: AuthPhase::Form,
            name: String::new(),
            email: tui.last_email.clone().unwrap_or_default(),
            phone: String::new(),
            password: String::new(),
            role_index: 0,
            focus: 0,
            error: None,
        }
    }

    pub fn focused_field(&self) -> AuthField {
        let fields = self.mode.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn selected_role(&self) -> Role {
        let roles = Role::signup_roles();
        roles[self.role_index % roles.len()]
    }

    pub fn sign_up_request(&self) -> SignUpRequest {
        SignUpRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            role: self.selected_role(),
        }
    }

    /// True when the modal is waiting on `task`.
    pub fn awaits(&self, task: TaskId) -> bool {
        match self.phase {
            AuthPhase::Form => false,
            AuthPhase::Submitting { task: t }
            | AuthPhase::Verifying { task: t }
            | AuthPhase::Verified { task: t }
            | AuthPhase::AutoLogin { task: t } => t == task,
        }
    }

    /// Back to the form with an error, keeping what the user typed except the password.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = AuthPhase::Form;
        self.password.clear();
        self.error = Some(message.into());
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tick: u64) {
        render_auth_overlay(frame, self, area, tick);
    }

    pub fn handle_key(&mut self, tui: &mut TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('c')) {
            return OverlayUpdate::close().with_ui_effects(cancel_effects(tui));
        }

        if ctrl && key.code == KeyCode::Char('s') {
            let effects = cancel_effects(tui);
            self.mode = self.mode.toggled();
            self.phase = AuthPhase::Form;
            self.focus = 0;
            self.error = None;
            return OverlayUpdate::stay().with_ui_effects(effects);
        }

        if self.phase.is_busy() {
            return OverlayUpdate::stay();
        }

        let field_count = self.mode.fields().len();
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % field_count;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + field_count - 1) % field_count;
            }
            KeyCode::Left if self.focused_field() == AuthField::Role => {
                let len = Role::signup_roles().len();
                self.role_index = (self.role_index + len - 1) % len;
            }
            KeyCode::Right if self.focused_field() == AuthField::Role => {
                self.role_index = (self.role_index + 1) % Role::signup_roles().len();
            }
            KeyCode::Enter => return self.submit(tui),
            KeyCode::Backspace => {
                if let Some(text) = self.focused_text_mut() {
                    text.pop();
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(text) = self.focused_text_mut() {
                    text.push(c);
                    self.error = None;
                }
            }
            _ => {}
        }
        OverlayUpdate::stay()
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focused_field() {
            AuthField::Name => Some(&mut self.name),
            AuthField::Email => Some(&mut self.email),
            AuthField::Phone => Some(&mut self.phone),
            AuthField::Password => Some(&mut self.password),
            AuthField::Role => None,
        }
    }

    fn submit(&mut self, tui: &mut TuiState) -> OverlayUpdate {
        match self.mode {
            AuthMode::SignIn => {
                let email = self.email.trim().to_string();
                if email.is_empty() || self.password.is_empty() {
                    self.error = Some("Enter your email and password".to_string());
                    return OverlayUpdate::stay();
                }
                let task = tui.task_seq.next_id();
                self.phase = AuthPhase::Submitting { task };
                self.error = None;
                OverlayUpdate::stay().with_ui_effects(vec![UiEffect::Authenticate {
                    task,
                    email,
                    password: self.password.clone(),
                }])
            }
            AuthMode::SignUp => {
                if let Err(message) = self.sign_up_request().validate() {
                    self.error = Some(message.to_string());
                    return OverlayUpdate::stay();
                }
                let task = tui.task_seq.next_id();
                self.phase = AuthPhase::Verifying { task };
                self.error = None;
                tracing::info!(role = %self.selected_role(), "sign-up submitted");
                OverlayUpdate::stay().with_ui_effects(vec![UiEffect::StartVerification { task }])
            }
        }
    }
}

/// Cancels whatever the modal started and forgets it.
fn cancel_effects(tui: &mut TuiState) -> Vec<UiEffect> {
    let mut effects = Vec::new();
    for kind in [TaskKind::SignIn, TaskKind::Verification] {
        let state = tui.tasks.state_mut(kind);
        if state.is_running() {
            effects.push(UiEffect::CancelTask {
                kind,
                token: state.take_cancel(),
            });
        }
    }
    effects
}
