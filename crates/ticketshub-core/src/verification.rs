//! Simulated sign-up verification.
//!
//! Sign-up collects a request, waits through a "verifying" stage and a
//! "verified" stage, then signs in to the demo account of the requested
//! role. No record is created. The waits run as a cancellable task; once
//! the token is cancelled the task reports nothing further.

use std::time::Duration;

use ticketshub_types::Role;
use tokio_util::sync::CancellationToken;

use crate::config::VerificationConfig;
use crate::demo::{self, DemoCredential};

/// Details collected by the sign-up form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
}

impl SignUpRequest {
    /// Checks the form before verification starts.
    ///
    /// # Errors
    /// Returns a message for the first missing or malformed field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required");
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email is required");
        }
        if !email.contains('@') {
            return Err("Enter a valid email address");
        }
        if self.phone.trim().is_empty() {
            return Err("Phone is required");
        }
        if !Role::signup_roles().contains(&self.role) {
            return Err("Choose organizer, vendor, speaker or sponsor");
        }
        Ok(())
    }

    /// Account used for the automatic sign-in after verification.
    pub fn demo_credential(&self) -> DemoCredential {
        demo::credential(self.role)
    }
}

/// Progress reported by the verification task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationStage {
    /// The verifying wait is over; the account is shown as verified.
    Verified,
    /// The verified confirmation is over; sign in now.
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationTiming {
    pub verifying: Duration,
    pub verified: Duration,
}

impl From<&VerificationConfig> for VerificationTiming {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            verifying: config.verifying_delay(),
            verified: config.verified_delay(),
        }
    }
}

impl Default for VerificationTiming {
    fn default() -> Self {
        Self::from(&VerificationConfig::default())
    }
}

/// Runs both waits, reporting each finished stage through `report`.
///
/// Returns `false` if `cancel` fired first; no stage is reported after
/// cancellation.
pub async fn run<F>(timing: VerificationTiming, cancel: CancellationToken, mut report: F) -> bool
where
    F: FnMut(VerificationStage),
{
    let stages = [
        (timing.verifying, VerificationStage::Verified),
        (timing.verified, VerificationStage::Completed),
    ];

    for (wait, stage) in stages {
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::debug!("sign-up verification cancelled");
                return false;
            }
            () = tokio::time::sleep(wait) => {}
        }
        if cancel.is_cancelled() {
            return false;
        }
        tracing::debug!(?stage, "sign-up verification stage reached");
        report(stage);
    }

    true
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::session::{MemorySessionStorage, SessionManager};
    use crate::store::MockStore;

    fn request(role: Role) -> SignUpRequest {
        SignUpRequest {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 20 7946 0000".to_string(),
            role,
        }
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        assert!(request(Role::Vendor).validate().is_ok());

        let mut missing_name = request(Role::Vendor);
        missing_name.name = "  ".to_string();
        assert_eq!(missing_name.validate(), Err("Name is required"));

        let mut bad_email = request(Role::Vendor);
        bad_email.email = "ada.example.com".to_string();
        assert_eq!(bad_email.validate(), Err("Enter a valid email address"));

        assert!(request(Role::Admin).validate().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stages_follow_configured_delays() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let start = tokio::time::Instant::now();

        let finished = run(
            VerificationTiming::default(),
            CancellationToken::new(),
            move |stage| sink.lock().unwrap().push((stage, start.elapsed())),
        )
        .await;

        assert!(finished);
        let seen = seen.lock().unwrap();
        let stages: Vec<VerificationStage> = seen.iter().map(|(stage, _)| *stage).collect();
        assert_eq!(
            stages,
            [VerificationStage::Verified, VerificationStage::Completed]
        );
        let slack = Duration::from_millis(10);
        assert!(seen[0].1 >= Duration::from_secs(10) && seen[0].1 < Duration::from_secs(10) + slack);
        assert!(seen[1].1 >= Duration::from_secs(12) && seen[1].1 < Duration::from_secs(12) + slack);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_reporting() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let cancel = CancellationToken::new();

        let handle = tokio::spawn(run(
            VerificationTiming::default(),
            cancel.clone(),
            move |stage| sink.lock().unwrap().push(stage),
        ));

        tokio::time::sleep(Duration::from_secs(5)).await;
        cancel.cancel();
        assert!(!handle.await.unwrap());

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_speaker_sign_up_ends_in_speaker_session() {
        let mut session =
            SessionManager::new(MockStore::seeded(), Box::new(MemorySessionStorage::new()));
        let request = request(Role::Speaker);

        let completed = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&completed);
        let finished = run(
            VerificationTiming::default(),
            CancellationToken::new(),
            move |stage| {
                if stage == VerificationStage::Completed {
                    *sink.lock().unwrap() += 1;
                }
            },
        )
        .await;
        assert!(finished);
        assert_eq!(*completed.lock().unwrap(), 1);

        let demo = request.demo_credential();
        session.login(demo.email, demo.password).await.unwrap();

        let user = session.current_user().unwrap();
        assert_eq!(user.email, "speaker@management.ticketshub.com");
        assert_eq!(user.role(), Role::Speaker);
    }
}
