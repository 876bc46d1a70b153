//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that return a `UiEvent`. They perform
//! the work and never touch UI state; the runtime spawns them and forwards
//! the result to the inbox.

use std::sync::Arc;

use ticketshub_core::MockStore;
use ticketshub_core::session;
use ticketshub_core::verification::{self, VerificationTiming};
use tokio_util::sync::CancellationToken;

use super::inbox::UiEventSender;
use crate::common::TaskId;
use crate::events::UiEvent;

/// Checks credentials against the store.
pub async fn authenticate(store: Arc<MockStore>, email: String, password: String) -> UiEvent {
    let result = session::authenticate(&store, &email, &password).await;
    UiEvent::SignInChecked { result }
}

/// Runs the sign-up verification waits.
///
/// Stages go straight to the inbox tagged with `task`; the returned event
/// only reports how the task ended.
pub async fn verification(
    timing: VerificationTiming,
    cancel: Option<CancellationToken>,
    task: TaskId,
    tx: UiEventSender,
) -> UiEvent {
    let cancel = cancel.unwrap_or_default();
    let finished = verification::run(timing, cancel, |stage| {
        let _ = tx.send(UiEvent::VerificationStage { task, stage });
    })
    .await;
    UiEvent::VerificationEnded { finished }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ticketshub_core::verification::VerificationStage;
    use tokio::sync::mpsc;

    use super::*;

    fn timing() -> VerificationTiming {
        VerificationTiming {
            verifying: Duration::from_secs(10),
            verified: Duration::from_secs(2),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_verification_reports_both_stages() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ended = verification(timing(), None, TaskId(3), tx).await;
        assert!(matches!(ended, UiEvent::VerificationEnded { finished: true }));

        let mut stages = Vec::new();
        while let Ok(event) = rx.try_recv() {
            if let UiEvent::VerificationStage { task, stage } = event {
                assert_eq!(task, TaskId(3));
                stages.push(stage);
            }
        }
        assert_eq!(
            stages,
            [VerificationStage::Verified, VerificationStage::Completed]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_verification_sends_nothing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(verification(timing(), Some(cancel.clone()), TaskId(1), tx));

        tokio::time::sleep(Duration::from_secs(5)).await;
        cancel.cancel();
        let ended = handle.await.unwrap();

        assert!(matches!(ended, UiEvent::VerificationEnded { finished: false }));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_authenticate_checks_store() {
        let store = MockStore::seeded();
        let ok = authenticate(
            Arc::clone(&store),
            "admin@management.ticketshub.com".to_string(),
            "admin123".to_string(),
        )
        .await;
        assert!(matches!(ok, UiEvent::SignInChecked { result: Ok(_) }));

        let err = authenticate(
            store,
            "vendor@management.ticketshub.com".to_string(),
            "wrongpass".to_string(),
        )
        .await;
        assert!(matches!(err, UiEvent::SignInChecked { result: Err(_) }));
    }
}
