//! Auth feature reducer.
//!
//! Moves the modal through its phases as task results arrive.

use ticketshub_core::AuthError;
use ticketshub_core::verification::VerificationStage;
use ticketshub_types::User;

use crate::common::{TaskId, TaskSeq};
use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::overlays::{AuthMode, AuthPhase, AuthState};
use crate::state::ToastKind;

#[derive(Debug, PartialEq, Eq)]
pub enum LoginOverlayAction {
    Close,
    Stay,
}

/// Handles the credential check.
///
/// A match hands the user to the session manager; a failure puts the modal
/// back on the sign-in form with the generic message.
pub fn handle_sign_in_checked(
    auth: &mut AuthState,
    result: Result<User, AuthError>,
) -> Vec<UiEffect> {
    match result {
        Ok(user) => vec![UiEffect::EstablishSession { user }],
        Err(err) => {
            if matches!(auth.phase, AuthPhase::AutoLogin { .. }) {
                auth.mode = AuthMode::SignIn;
                auth.focus = 0;
            }
            auth.fail(err.user_message());
            vec![]
        }
    }
}

/// Advances sign-up verification.
///
/// Stages are only accepted in order and only from the task the modal is
/// waiting on.
pub fn handle_verification_stage(
    auth: &mut AuthState,
    task_seq: &mut TaskSeq,
    task: TaskId,
    stage: VerificationStage,
) -> Vec<UiEffect> {
    match (stage, auth.phase) {
        (VerificationStage::Verified, AuthPhase::Verifying { task: waiting }) if waiting == task => {
            auth.phase = AuthPhase::Verified { task };
            vec![]
        }
        (VerificationStage::Completed, AuthPhase::Verified { task: waiting })
            if waiting == task =>
        {
            let credential = auth.sign_up_request().demo_credential();
            let sign_in = task_seq.next_id();
            auth.phase = AuthPhase::AutoLogin { task: sign_in };
            auth.email = credential.email.to_string();
            vec![UiEffect::Authenticate {
                task: sign_in,
                email: credential.email.to_string(),
                password: credential.password.to_string(),
            }]
        }
        _ => {
            tracing::debug!(?task, ?stage, phase = ?auth.phase, "ignoring verification stage");
            vec![]
        }
    }
}

/// Handles the session manager's answer to a successful credential check.
pub fn handle_login_finished(
    auth: Option<&mut AuthState>,
    result: Result<User, AuthError>,
) -> (Vec<StateMutation>, Vec<UiEffect>, LoginOverlayAction) {
    match result {
        Ok(user) => (
            vec![
                StateMutation::ResetNav,
                StateMutation::toast(ToastKind::Success, format!("Welcome, {}", user.name)),
                StateMutation::SetLastEmail(user.email.clone()),
            ],
            vec![UiEffect::PersistLastEmail { email: user.email }],
            LoginOverlayAction::Close,
        ),
        Err(err) => {
            if let Some(auth) = auth {
                auth.mode = AuthMode::SignIn;
                auth.fail(err.user_message());
                (vec![], vec![], LoginOverlayAction::Stay)
            } else {
                (
                    vec![StateMutation::toast(ToastKind::Error, err.user_message())],
                    vec![],
                    LoginOverlayAction::Stay,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ticketshub_types::Role;

    use super::*;

    fn sign_up_state(task: TaskId) -> AuthState {
        AuthState {
            mode: AuthMode::SignUp,
            phase: AuthPhase::Verifying { task },
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555".to_string(),
            password: String::new(),
            role_index: Role::signup_roles()
                .iter()
                .position(|r| *r == Role::Speaker)
                .unwrap(),
            focus: 0,
            error: None,
        }
    }

    #[test]
    fn test_stages_advance_in_order_to_demo_sign_in() {
        let mut seq = TaskSeq::default();
        let task = seq.next_id();
        let mut auth = sign_up_state(task);

        // Completed before Verified is out of order.
        assert!(
            handle_verification_stage(&mut auth, &mut seq, task, VerificationStage::Completed)
                .is_empty()
        );
        assert_eq!(auth.phase, AuthPhase::Verifying { task });

        handle_verification_stage(&mut auth, &mut seq, task, VerificationStage::Verified);
        assert_eq!(auth.phase, AuthPhase::Verified { task });

        let effects =
            handle_verification_stage(&mut auth, &mut seq, task, VerificationStage::Completed);
        match effects.as_slice() {
            [UiEffect::Authenticate { email, password, .. }] => {
                assert_eq!(email, "speaker@management.ticketshub.com");
                assert_eq!(password, "speaker123");
            }
            other => panic!("unexpected effects: {other:?}"),
        }
        assert!(matches!(auth.phase, AuthPhase::AutoLogin { .. }));
    }

    #[test]
    fn test_stale_stage_is_ignored() {
        let mut seq = TaskSeq::default();
        let stale = seq.next_id();
        let current = seq.next_id();
        let mut auth = sign_up_state(current);

        handle_verification_stage(&mut auth, &mut seq, stale, VerificationStage::Verified);
        assert_eq!(auth.phase, AuthPhase::Verifying { task: current });
    }

    #[test]
    fn test_failed_check_returns_to_form_with_generic_message() {
        let mut seq = TaskSeq::default();
        let task = seq.next_id();
        let mut auth = sign_up_state(task);
        auth.mode = AuthMode::SignIn;
        auth.phase = AuthPhase::Submitting { task };
        auth.password = "wrongpass".to_string();

        let effects = handle_sign_in_checked(&mut auth, Err(AuthError::InvalidCredentials));
        assert!(effects.is_empty());
        assert_eq!(auth.phase, AuthPhase::Form);
        assert_eq!(
            auth.error.as_deref(),
            Some("Invalid credentials or account not verified")
        );
        assert_eq!(auth.email, "ada@example.com");
        assert!(auth.password.is_empty());
    }
}
