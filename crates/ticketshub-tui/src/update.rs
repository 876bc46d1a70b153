//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::auth::{self, LoginOverlayAction};
use crate::dashboard::DashboardState;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::header::{nav_items, step_nav};
use crate::mutations::StateMutation;
use crate::overlays::{self, Overlay, OverlayExt, OverlayRequest};
use crate::state::{AppState, ToastKind, TuiState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            handle_tick(&mut app.tui);
            vec![]
        }
        UiEvent::Frame { width, height } => {
            app.tui.terminal_size = (width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskStarted { kind, started } => {
            // Only the modal starts tasks; anything it no longer waits on is stopped.
            let wanted = app
                .overlay
                .auth_mut()
                .is_some_and(|auth| auth.awaits(started.id));
            if wanted {
                app.tui.tasks.state_mut(kind).on_started(&started);
                vec![]
            } else {
                tracing::debug!(?kind, id = ?started.id, "cancelling unwanted task");
                vec![UiEffect::CancelTask {
                    kind,
                    token: started.cancel,
                }]
            }
        }
        UiEvent::TaskCompleted { kind, completed } => {
            let ok = app.tui.tasks.state_mut(kind).finish_if_active(completed.id);
            if ok {
                update(app, *completed.result)
            } else {
                vec![]
            }
        }
        UiEvent::SignInChecked { result } => match app.overlay.auth_mut() {
            Some(auth_state) => auth::handle_sign_in_checked(auth_state, result),
            None => vec![],
        },
        UiEvent::VerificationStage { task, stage } => {
            let AppState { tui, overlay } = app;
            match overlay.auth_mut() {
                Some(auth_state) => {
                    auth::handle_verification_stage(auth_state, &mut tui.task_seq, task, stage)
                }
                None => vec![],
            }
        }
        UiEvent::VerificationEnded { finished } => {
            tracing::debug!(finished, "verification task ended");
            vec![]
        }
        UiEvent::LoginFinished { result } => {
            let (mutations, effects, action) =
                auth::handle_login_finished(app.overlay.auth_mut(), result);
            apply_mutations(&mut app.tui, mutations);
            if action == LoginOverlayAction::Close {
                app.overlay = None;
            }
            effects
        }
        UiEvent::SignedOut { result } => {
            app.overlay = None;
            let toast = match result {
                Ok(()) => StateMutation::toast(ToastKind::Info, "Signed out"),
                Err(detail) => {
                    tracing::warn!(error = %detail, "saved session could not be removed");
                    StateMutation::toast(
                        ToastKind::Error,
                        "Signed out, but the saved session could not be removed",
                    )
                }
            };
            apply_mutations(&mut app.tui, vec![StateMutation::ResetNav, toast]);
            vec![]
        }
        UiEvent::ModerationRecorded { result } => {
            let toast = match result {
                Ok(message) => StateMutation::toast(ToastKind::Success, message),
                Err(message) => StateMutation::toast(ToastKind::Error, message),
            };
            apply_mutations(&mut app.tui, vec![toast]);
            vec![]
        }
    }
}

fn handle_tick(tui: &mut TuiState) {
    tui.tick = tui.tick.wrapping_add(1);

    let period = tui.ticks_for(Duration::from_secs(tui.config.ui.carousel_secs));
    tui.landing.on_tick(period);

    if tui.toast.as_ref().is_some_and(|t| tui.tick >= t.expires_at) {
        tui.toast = None;
    }
}

fn apply_mutations(tui: &mut TuiState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        match mutation {
            StateMutation::ShowToast { message, kind } => tui.show_toast(kind, message),
            StateMutation::ResetNav => {
                tui.nav_index = 0;
                tui.dashboard = DashboardState::default();
            }
            StateMutation::SetLastEmail(email) => {
                tui.last_email = Some(email);
            }
        }
    }
}

fn apply_overlay_update(app: &mut AppState, update: overlays::OverlayUpdate) -> Vec<UiEffect> {
    apply_mutations(&mut app.tui, update.mutations);
    match update.transition {
        overlays::OverlayTransition::Stay => {}
        overlays::OverlayTransition::Close => {
            app.overlay = None;
        }
        overlays::OverlayTransition::Open(request) => open_overlay_request(app, request),
    }
    update.effects
}

fn open_overlay_request(app: &mut AppState, request: OverlayRequest) {
    app.overlay = Some(Overlay::open(request, &app.tui));
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Resize(width, height) => {
            app.tui.terminal_size = (width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if let Some(overlay) = &mut app.overlay {
        let update = overlay.handle_key(&mut app.tui, key);
        return apply_overlay_update(app, update);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let role = app.tui.role();

    match key.code {
        KeyCode::Char('c') if ctrl => vec![UiEffect::Quit],
        KeyCode::Char('q') => vec![UiEffect::Quit],
        KeyCode::Tab | KeyCode::Right => {
            app.tui.nav_index = step_nav(role, app.tui.nav_index, 1);
            vec![]
        }
        KeyCode::BackTab | KeyCode::Left => {
            app.tui.nav_index = step_nav(role, app.tui.nav_index, -1);
            vec![]
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            if index < nav_items(role).len() {
                app.tui.nav_index = index;
            }
            vec![]
        }
        KeyCode::Char('l') if role.is_none() => {
            open_overlay_request(app, OverlayRequest::SignIn);
            vec![]
        }
        KeyCode::Char('s') if role.is_none() => {
            open_overlay_request(app, OverlayRequest::SignUp);
            vec![]
        }
        KeyCode::Char('n') if role.is_some() => {
            open_overlay_request(app, OverlayRequest::Notifications);
            vec![]
        }
        KeyCode::Char('u') if role.is_some() => {
            open_overlay_request(app, OverlayRequest::UserMenu);
            vec![]
        }
        _ => {
            let nav = app.tui.current_nav();
            let TuiState {
                dashboard, store, ..
            } = &mut app.tui;
            dashboard.handle_key(store, nav, key).unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ticketshub_core::config::Config;
    use ticketshub_core::session::MemorySessionStorage;
    use ticketshub_core::verification::VerificationStage;
    use ticketshub_core::{AuthError, MockStore, SessionManager};
    use ticketshub_types::Role;
    use tokio_util::sync::CancellationToken;

    use super::*;
    use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};
    use crate::features::header::NavItem;
    use crate::overlays::{AuthMode, AuthPhase};

    fn app() -> AppState {
        let session = SessionManager::new(MockStore::seeded(), Box::new(MemorySessionStorage::new()));
        AppState::new(Config::default(), session)
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn start(app: &mut AppState, kind: TaskKind, id: TaskId, cancel: Option<CancellationToken>) {
        let effects = update(
            app,
            UiEvent::TaskStarted {
                kind,
                started: TaskStarted { id, cancel },
            },
        );
        assert!(effects.is_empty(), "task {id:?} was not expected");
    }

    fn complete(app: &mut AppState, kind: TaskKind, id: TaskId, result: UiEvent) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::TaskCompleted {
                kind,
                completed: TaskCompleted {
                    id,
                    result: Box::new(result),
                },
            },
        )
    }

    /// Runs an `EstablishSession` effect the way the runtime does.
    fn establish(app: &mut AppState, effects: Vec<UiEffect>) -> Vec<UiEffect> {
        let Some(UiEffect::EstablishSession { user }) = effects.into_iter().next() else {
            panic!("expected EstablishSession");
        };
        let result = app.tui.session.establish(user).cloned();
        update(app, UiEvent::LoginFinished { result })
    }

    #[test]
    fn test_speaker_sign_up_signs_in_once() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        type_text(&mut app, "Ada Lovelace");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ada@example.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "+1 555 0100");
        press(&mut app, KeyCode::Tab);
        while app.overlay.auth_mut().unwrap().selected_role() != Role::Speaker {
            press(&mut app, KeyCode::Right);
        }

        let effects = press(&mut app, KeyCode::Enter);
        let [UiEffect::StartVerification { task }] = effects.as_slice() else {
            panic!("unexpected effects: {effects:?}");
        };
        let task = *task;
        start(&mut app, TaskKind::Verification, task, Some(CancellationToken::new()));

        update(
            &mut app,
            UiEvent::VerificationStage {
                task,
                stage: VerificationStage::Verified,
            },
        );
        let effects = update(
            &mut app,
            UiEvent::VerificationStage {
                task,
                stage: VerificationStage::Completed,
            },
        );
        let [UiEffect::Authenticate { task: sign_in, email, .. }] = effects.as_slice() else {
            panic!("unexpected effects: {effects:?}");
        };
        assert_eq!(email, "speaker@management.ticketshub.com");
        let sign_in = *sign_in;

        start(&mut app, TaskKind::SignIn, sign_in, None);
        let speaker = app.tui.store.user_by_email(email).cloned().unwrap();
        let effects = complete(
            &mut app,
            TaskKind::SignIn,
            sign_in,
            UiEvent::SignInChecked { result: Ok(speaker) },
        );
        let effects = establish(&mut app, effects);

        assert!(app.overlay.is_none());
        assert_eq!(app.tui.role(), Some(Role::Speaker));
        assert_eq!(
            app.tui.toast.as_ref().map(|t| t.message.as_str()),
            Some("Welcome, Dr. Robert Smith")
        );
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::PersistLastEmail { .. }]
        ));

        // A late duplicate stage changes nothing.
        let effects = update(
            &mut app,
            UiEvent::VerificationStage {
                task,
                stage: VerificationStage::Completed,
            },
        );
        assert!(effects.is_empty());
        assert_eq!(app.tui.current_nav(), NavItem::Dashboard);
    }

    #[test]
    fn test_wrong_password_keeps_modal_open() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));
        type_text(&mut app, "vendor@management.ticketshub.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "wrongpass");

        let effects = press(&mut app, KeyCode::Enter);
        let [UiEffect::Authenticate { task, .. }] = effects.as_slice() else {
            panic!("unexpected effects: {effects:?}");
        };
        let task = *task;
        start(&mut app, TaskKind::SignIn, task, None);
        complete(
            &mut app,
            TaskKind::SignIn,
            task,
            UiEvent::SignInChecked {
                result: Err(AuthError::InvalidCredentials),
            },
        );

        let auth = app.overlay.auth_mut().unwrap();
        assert_eq!(auth.phase, AuthPhase::Form);
        assert_eq!(
            auth.error.as_deref(),
            Some("Invalid credentials or account not verified")
        );
        assert_eq!(auth.email, "vendor@management.ticketshub.com");
        assert!(!app.tui.session.is_authenticated());
    }

    #[test]
    fn test_escape_cancels_verification() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ada@example.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "555");

        let effects = press(&mut app, KeyCode::Enter);
        let [UiEffect::StartVerification { task }] = effects.as_slice() else {
            panic!("unexpected effects: {effects:?}");
        };
        let task = *task;
        let token = CancellationToken::new();
        start(&mut app, TaskKind::Verification, task, Some(token.clone()));

        let effects = press(&mut app, KeyCode::Esc);
        assert!(app.overlay.is_none());
        match effects.as_slice() {
            [
                UiEffect::CancelTask {
                    kind: TaskKind::Verification,
                    token: Some(cancel),
                },
            ] => {
                cancel.cancel();
                assert!(token.is_cancelled());
            }
            other => panic!("unexpected effects: {other:?}"),
        }

        // Completion of the cancelled task is dropped.
        let effects = complete(
            &mut app,
            TaskKind::Verification,
            task,
            UiEvent::VerificationEnded { finished: false },
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn test_task_started_after_close_is_cancelled() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Esc);

        let token = CancellationToken::new();
        let effects = update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::Verification,
                started: TaskStarted {
                    id: TaskId(42),
                    cancel: Some(token.clone()),
                },
            },
        );
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::CancelTask { token: Some(_), .. }]
        ));
        assert!(!app.tui.tasks.is_any_running());
    }

    #[test]
    fn test_ctrl_s_switches_mode() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));
        update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('s'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert_eq!(app.overlay.auth_mut().unwrap().mode, AuthMode::SignUp);
    }

    #[test]
    fn test_navigation_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Left);
        assert_eq!(app.tui.current_nav(), NavItem::About);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.tui.current_nav(), NavItem::Features);
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.tui.current_nav(), NavItem::Features);
    }

    #[test]
    fn test_sign_out_from_user_menu() {
        let mut app = app();
        let store: Arc<MockStore> = Arc::clone(&app.tui.store);
        let admin = store.user_by_id("admin-1").cloned().unwrap();
        app.tui.session.establish(admin).unwrap();

        press(&mut app, KeyCode::Char('u'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        let effects = press(&mut app, KeyCode::Enter);
        assert!(matches!(effects.as_slice(), [UiEffect::Logout]));
        assert!(app.overlay.is_none());

        app.tui.session.logout().unwrap();
        update(&mut app, UiEvent::SignedOut { result: Ok(()) });
        assert_eq!(app.tui.current_nav(), NavItem::Home);
        assert_eq!(
            app.tui.toast.as_ref().map(|t| t.kind),
            Some(ToastKind::Info)
        );
    }

    #[test]
    fn test_toast_expires_on_tick() {
        let mut app = app();
        app.tui.show_toast(ToastKind::Info, "hello".to_string());
        let ticks = app.tui.ticks_for(Duration::from_secs(3));
        for _ in 0..ticks {
            update(&mut app, UiEvent::Tick);
        }
        assert!(app.tui.toast.is_none());
    }
}
