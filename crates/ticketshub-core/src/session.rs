//! Session lifecycle: sign-in, sign-out and restore across restarts.
//!
//! `SessionManager` is an explicit context object. It owns a handle to the
//! store, the storage backend for the persisted snapshot, and the signed-in
//! user (if any). Nothing here is global.
//!
//! The persisted snapshot is `$TICKETSHUB_HOME/session.json`, written with
//! restricted permissions (0600) on unix.

use std::fs;
#[cfg(unix)]
use std::fs::OpenOptions;
#[cfg(unix)]
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ticketshub_types::{Role, User};

use crate::config::paths;
use crate::error::AuthError;
use crate::store::MockStore;

/// What survives a restart: the signed-in user and when they signed in.
///
/// The password is never serialized (see `User`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub user: User,
    pub logged_in_at: DateTime<Utc>,
}

/// Backend that keeps the session snapshot between runs.
pub trait SessionStorage: Send {
    /// Returns the stored snapshot, `None` when nothing is stored.
    ///
    /// # Errors
    /// Returns an error if the snapshot exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<SessionSnapshot>>;

    /// # Errors
    /// Returns an error if the snapshot cannot be written.
    fn save(&self, snapshot: &SessionSnapshot) -> Result<()>;

    /// Removes the stored snapshot. Clearing an empty storage is not an error.
    ///
    /// # Errors
    /// Returns an error if an existing snapshot cannot be removed.
    fn clear(&self) -> Result<()>;
}

/// JSON file storage, `session.json` under the TICKETSHUB home by default.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Self {
        Self::new(paths::session_path())
    }
}

impl SessionStorage for FileSessionStorage {
    fn load(&self) -> Result<Option<SessionSnapshot>> {
        let path = &self.path;
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session from {}", path.display()))?;

        let snapshot = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse session from {}", path.display()))?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &SessionSnapshot) -> Result<()> {
        let path = &self.path;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents =
            serde_json::to_string_pretty(snapshot).context("Failed to serialize session")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(path)
                .with_context(|| format!("Failed to open {} for writing", path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to remove session {}", self.path.display())),
        }
    }
}

/// In-process storage. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStorage {
    slot: Arc<Mutex<Option<SessionSnapshot>>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the stored snapshot.
    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> Result<Option<SessionSnapshot>> {
        Ok(self.snapshot())
    }

    fn save(&self, snapshot: &SessionSnapshot) -> Result<()> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(snapshot.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// Checks credentials against the store.
///
/// Unknown email, wrong password and unverified accounts all fail with
/// `AuthError::InvalidCredentials`. Returns a copy of the matching record.
///
/// # Errors
/// Returns `AuthError::InvalidCredentials` when the credentials do not match
/// a verified account.
#[allow(clippy::unused_async)]
pub async fn authenticate(
    store: &MockStore,
    email: &str,
    password: &str,
) -> Result<User, AuthError> {
    let Some(user) = store.user_by_email(email) else {
        tracing::info!(email, "sign-in rejected: unknown email");
        return Err(AuthError::InvalidCredentials);
    };

    if user.password != password {
        tracing::info!(email, "sign-in rejected: wrong password");
        return Err(AuthError::InvalidCredentials);
    }

    if !user.is_verified() {
        tracing::info!(email, status = %user.status, "sign-in rejected: account not verified");
        return Err(AuthError::InvalidCredentials);
    }

    Ok(user.clone())
}

/// Owns the signed-in user and its persisted snapshot.
pub struct SessionManager {
    store: Arc<MockStore>,
    storage: Box<dyn SessionStorage>,
    current: Option<User>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("current", &self.current.as_ref().map(|u| &u.id))
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    /// Creates a signed-out manager without reading storage.
    pub fn new(store: Arc<MockStore>, storage: Box<dyn SessionStorage>) -> Self {
        Self {
            store,
            storage,
            current: None,
        }
    }

    /// Creates a manager and restores the persisted session, if any.
    ///
    /// The snapshot's user is looked up again by id. A snapshot that cannot
    /// be parsed, or whose user is gone or no longer verified, is cleared and
    /// the manager starts signed out.
    pub fn restore(store: Arc<MockStore>, storage: Box<dyn SessionStorage>) -> Self {
        let mut manager = Self::new(store, storage);

        let snapshot = match manager.storage.load() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => return manager,
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "discarding unreadable session");
                manager.clear_storage();
                return manager;
            }
        };

        match manager.store.user_by_id(&snapshot.user.id) {
            Some(user) if user.is_verified() => {
                tracing::info!(user_id = %user.id, "session restored");
                manager.current = Some(User {
                    last_login: snapshot.user.last_login,
                    ..user.clone()
                });
            }
            _ => {
                tracing::warn!(user_id = %snapshot.user.id, "discarding stale session");
                manager.clear_storage();
            }
        }

        manager
    }

    pub fn store(&self) -> &Arc<MockStore> {
        &self.store
    }

    /// Signs in with email and password.
    ///
    /// On success the user becomes current, its `last_login` is set and the
    /// session is persisted.
    ///
    /// # Errors
    /// `InvalidCredentials` when the email is unknown, the password differs or
    /// the account is not verified; `Transient` when the session cannot be
    /// persisted. The session is left signed out on error.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&User, AuthError> {
        let store = Arc::clone(&self.store);
        let user = authenticate(&store, email, password).await?;
        self.establish(user)
    }

    /// Makes an already authenticated user current and persists the session.
    ///
    /// # Errors
    /// Returns `AuthError::Transient` if the snapshot cannot be saved.
    pub fn establish(&mut self, user: User) -> Result<&User, AuthError> {
        let now = Utc::now();
        let user = User {
            last_login: Some(now),
            ..user
        };
        let snapshot = SessionSnapshot {
            user,
            logged_in_at: now,
        };

        if let Err(e) = self.storage.save(&snapshot) {
            let detail = format!("{e:#}");
            tracing::error!(error = %detail, "failed to persist session");
            self.current = None;
            // An older snapshot would otherwise be restored on the next start.
            self.clear_storage();
            return Err(AuthError::Transient(detail));
        }

        tracing::info!(user_id = %snapshot.user.id, role = %snapshot.user.role(), "signed in");
        Ok(self.current.insert(snapshot.user))
    }

    /// Signs out and clears the persisted session. Signing out twice is fine.
    ///
    /// # Errors
    /// Returns an error if the persisted snapshot cannot be removed; the
    /// in-memory session is cleared regardless.
    pub fn logout(&mut self) -> Result<()> {
        if let Some(user) = self.current.take() {
            tracing::info!(user_id = %user.id, "signed out");
        }
        self.storage.clear()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.current.as_ref().map(User::role)
    }

    fn clear_storage(&self) {
        if let Err(e) = self.storage.clear() {
            tracing::warn!(error = %format!("{e:#}"), "failed to clear session");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use tempfile::tempdir;
    use ticketshub_types::VerificationStatus;

    use super::*;
    use crate::error::INVALID_CREDENTIALS_MESSAGE;

    fn manager() -> (SessionManager, MemorySessionStorage) {
        let storage = MemorySessionStorage::new();
        let manager = SessionManager::new(MockStore::seeded(), Box::new(storage.clone()));
        (manager, storage)
    }

    struct BrokenStorage;

    impl SessionStorage for BrokenStorage {
        fn load(&self) -> Result<Option<SessionSnapshot>> {
            Ok(None)
        }

        fn save(&self, _snapshot: &SessionSnapshot) -> Result<()> {
            anyhow::bail!("disk full")
        }

        fn clear(&self) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_login_succeeds_iff_verified() {
        let store = MockStore::seeded();
        for user in store.users() {
            let (mut manager, _) = manager();
            let result = manager.login(&user.email, &user.password).await;
            assert_eq!(
                result.is_ok(),
                user.status == VerificationStatus::Verified,
                "unexpected result for {}",
                user.email
            );
        }
    }

    #[tokio::test]
    async fn test_admin_login() {
        let (mut manager, storage) = manager();
        let user = manager
            .login("admin@management.ticketshub.com", "admin123")
            .await
            .unwrap();
        assert_eq!(user.role(), Role::Admin);
        assert!(user.last_login.is_some());
        assert!(manager.is_authenticated());
        assert_eq!(manager.role(), Some(Role::Admin));

        let snapshot = storage.snapshot().unwrap();
        assert_eq!(snapshot.user.id, "admin-1");
    }

    #[tokio::test]
    async fn test_wrong_password_is_generic_failure() {
        let (mut manager, storage) = manager();
        let err = manager
            .login("vendor@management.ticketshub.com", "wrongpass")
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(err.user_message(), INVALID_CREDENTIALS_MESSAGE);
        assert!(!manager.is_authenticated());
        assert!(storage.snapshot().is_none());
    }

    #[tokio::test]
    async fn test_unknown_email_is_generic_failure() {
        let (mut manager, _) = manager();
        let err = manager
            .login("nobody@example.com", "whatever")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), INVALID_CREDENTIALS_MESSAGE);
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let (mut manager, storage) = manager();
        manager.logout().unwrap();
        assert!(!manager.is_authenticated());

        manager
            .login("speaker@management.ticketshub.com", "speaker123")
            .await
            .unwrap();
        manager.logout().unwrap();
        manager.logout().unwrap();
        assert!(!manager.is_authenticated());
        assert!(manager.current_user().is_none());
        assert!(storage.snapshot().is_none());
    }

    #[tokio::test]
    async fn test_persist_failure_is_transient() {
        let mut manager = SessionManager::new(MockStore::seeded(), Box::new(BrokenStorage));
        let err = manager
            .login("admin@management.ticketshub.com", "admin123")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Transient(_)));
        assert!(!manager.is_authenticated());
    }

    /// Memory storage whose saves start failing once `fail` is set.
    struct FailingSaves {
        inner: MemorySessionStorage,
        fail: Arc<AtomicBool>,
    }

    impl SessionStorage for FailingSaves {
        fn load(&self) -> Result<Option<SessionSnapshot>> {
            self.inner.load()
        }

        fn save(&self, snapshot: &SessionSnapshot) -> Result<()> {
            if self.fail.load(Ordering::SeqCst) {
                anyhow::bail!("disk full");
            }
            self.inner.save(snapshot)
        }

        fn clear(&self) -> Result<()> {
            self.inner.clear()
        }
    }

    #[tokio::test]
    async fn test_persist_failure_drops_previous_snapshot() {
        let inner = MemorySessionStorage::new();
        let fail = Arc::new(AtomicBool::new(false));
        let storage = FailingSaves {
            inner: inner.clone(),
            fail: Arc::clone(&fail),
        };
        let mut manager = SessionManager::new(MockStore::seeded(), Box::new(storage));
        manager
            .login("admin@management.ticketshub.com", "admin123")
            .await
            .unwrap();
        assert!(inner.snapshot().is_some());

        fail.store(true, Ordering::SeqCst);
        let err = manager
            .login("vendor@management.ticketshub.com", "vendor123")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Transient(_)));
        assert!(!manager.is_authenticated());
        assert!(inner.snapshot().is_none());

        let restored = SessionManager::restore(MockStore::seeded(), Box::new(inner));
        assert!(!restored.is_authenticated());
    }

    #[tokio::test]
    async fn test_restore_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut manager =
            SessionManager::new(MockStore::seeded(), Box::new(FileSessionStorage::new(&path)));
        manager
            .login("organizer@management.ticketshub.com", "organizer123")
            .await
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("organizer123"));

        let restored =
            SessionManager::restore(MockStore::seeded(), Box::new(FileSessionStorage::new(&path)));
        let user = restored.current_user().unwrap();
        assert_eq!(user.id, "org-1");
        assert!(user.last_login.is_some());
        assert_eq!(user.password, "organizer123");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_session_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut manager =
            SessionManager::new(MockStore::seeded(), Box::new(FileSessionStorage::new(&path)));
        manager
            .login("admin@management.ticketshub.com", "admin123")
            .await
            .unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_restore_drops_stale_snapshot() {
        let store = MockStore::seeded();
        let pending = store.user_by_id("org-2").unwrap().clone();
        let storage = MemorySessionStorage::new();
        storage
            .save(&SessionSnapshot {
                user: pending,
                logged_in_at: Utc::now(),
            })
            .unwrap();

        let manager = SessionManager::restore(store, Box::new(storage.clone()));
        assert!(!manager.is_authenticated());
        assert!(storage.snapshot().is_none());
    }

    #[test]
    fn test_restore_drops_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();

        let manager =
            SessionManager::restore(MockStore::seeded(), Box::new(FileSessionStorage::new(&path)));
        assert!(!manager.is_authenticated());
        assert!(!path.exists());
    }
}
