//! UI event types.
//!
//! All inputs (terminal, timers, async results) are converted to `UiEvent`
//! before the reducer sees them.
//!
//! ## Inbox Pattern
//!
//! Async handlers send their results to the runtime inbox; the runtime drains
//! it every frame and feeds the events to the reducer.
//!
//! ## Task Lifecycle Events
//!
//! Spawned work uses a uniform lifecycle:
//! - the runtime emits `TaskStarted` once the task is spawned
//! - the runtime emits `TaskCompleted` with the result event when done
//! - the reducer drops completions whose id is no longer the active one
//!
//! The sign-up verification task also reports intermediate stages; those
//! carry the task id so stale stages can be dropped the same way.

use crossterm::event::Event as CrosstermEvent;
use ticketshub_core::AuthError;
use ticketshub_core::verification::VerificationStage;
use ticketshub_types::User;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};

#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (carousel, spinner, toast expiry).
    Tick,

    /// Emitted once per frame before other events, with the terminal size.
    Frame { width: u16, height: u16 },

    /// Terminal input event (key, resize).
    Terminal(CrosstermEvent),

    TaskStarted {
        kind: TaskKind,
        started: TaskStarted,
    },

    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    /// Credential check finished.
    SignInChecked { result: Result<User, AuthError> },

    /// The verification task reached a stage.
    VerificationStage {
        task: TaskId,
        stage: VerificationStage,
    },

    /// The verification task ended (`finished` is false when cancelled).
    VerificationEnded { finished: bool },

    /// The session manager accepted (or failed to persist) a sign-in.
    LoginFinished { result: Result<User, AuthError> },

    /// Sign-out finished; the error is the persisted-session cleanup failure.
    SignedOut { result: Result<(), String> },

    /// An admin approve/reject was recorded.
    ModerationRecorded { result: Result<String, String> },
}
