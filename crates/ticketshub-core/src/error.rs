//! Domain errors surfaced to users.
//!
//! Application plumbing uses `anyhow`; these small enums exist where callers
//! need to branch on the failure or show a fixed message.

use std::fmt;

/// Message shown for every credential failure.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials or account not verified";

/// Message shown for unexpected failures during sign-in.
pub const TRANSIENT_FAILURE_MESSAGE: &str = "An error occurred. Please try again.";

/// Sign-in failure.
///
/// Wrong password, unknown email and unverified accounts are deliberately
/// indistinguishable: all three are `InvalidCredentials`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
    /// Unexpected failure (e.g. the session could not be persisted).
    /// The detail is for logs only.
    Transient(String),
}

impl AuthError {
    /// Short message safe to show in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE,
            AuthError::Transient(_) => TRANSIENT_FAILURE_MESSAGE,
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => f.write_str(INVALID_CREDENTIALS_MESSAGE),
            AuthError::Transient(detail) => write!(f, "{TRANSIENT_FAILURE_MESSAGE} ({detail})"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Kind of record a lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Event,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::User => f.write_str("user"),
            EntityKind::Event => f.write_str("event"),
        }
    }
}

/// A required record does not exist in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    pub entity: EntityKind,
    pub id: String,
}

impl NotFound {
    pub fn user(id: impl Into<String>) -> Self {
        Self {
            entity: EntityKind::User,
            id: id.into(),
        }
    }

    pub fn event(id: impl Into<String>) -> Self {
        Self {
            entity: EntityKind::Event,
            id: id.into(),
        }
    }
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}' not found", self.entity, self.id)
    }
}

impl std::error::Error for NotFound {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_hides_detail_from_user_message() {
        let err = AuthError::Transient("disk full".to_string());
        assert_eq!(err.user_message(), TRANSIENT_FAILURE_MESSAGE);
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_not_found_display() {
        assert_eq!(
            NotFound::user("nonexistent").to_string(),
            "user 'nonexistent' not found"
        );
    }
}
