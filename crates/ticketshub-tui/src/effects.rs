//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They cover I/O, session changes and task spawning; the reducer itself
//! never performs any of these.
//!
//! ## Cancellation Effects
//!
//! Cancellation is decided by the reducer via `UiEffect::CancelTask`. The
//! runtime executes it by calling `token.cancel()` on the provided token.

use ticketshub_core::dashboard::ModerationAction;
use ticketshub_types::User;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskId, TaskKind};

#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Check credentials against the store.
    Authenticate {
        task: TaskId,
        email: String,
        password: String,
    },

    /// Make an authenticated user current and persist the session.
    EstablishSession { user: User },

    /// Start the timed sign-up verification.
    StartVerification { task: TaskId },

    /// Cancel an in-flight task.
    CancelTask {
        kind: TaskKind,
        token: Option<CancellationToken>,
    },

    /// Sign out and clear the persisted session.
    Logout,

    /// Remember the email of a successful sign-in in the config file.
    PersistLastEmail { email: String },

    /// Record an admin decision on a pending account.
    Moderate {
        user_id: String,
        action: ModerationAction,
    },
}
