//! In-memory mock database.
//!
//! The store is built once from the seed records and never mutated. Lookups
//! are synchronous and never panic: a miss is `None`, an empty list, or a
//! [`NotFound`] for callers that need an error.

mod seed;

use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, LazyLock};

use ticketshub_types::{Connection, Event, Notification, PartnerType, Role, User};

use crate::error::NotFound;

static SEED: LazyLock<Arc<MockStore>> = LazyLock::new(|| {
    let store = MockStore::new(
        seed::users(),
        seed::events(),
        seed::connections(),
        seed::notifications(),
    );
    tracing::debug!(
        users = store.users.len(),
        events = store.events.len(),
        connections = store.connections.len(),
        notifications = store.notifications.len(),
        "seed store built"
    );
    Arc::new(store)
});

/// Users, events, connections and notifications held in memory.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    users: Vec<User>,
    events: Vec<Event>,
    connections: Vec<Connection>,
    notifications: Vec<Notification>,
}

impl MockStore {
    pub fn new(
        users: Vec<User>,
        events: Vec<Event>,
        connections: Vec<Connection>,
        notifications: Vec<Notification>,
    ) -> Self {
        Self {
            users,
            events,
            connections,
            notifications,
        }
    }

    /// Shared handle to the seeded store, built on first access.
    pub fn seeded() -> Arc<MockStore> {
        Arc::clone(&SEED)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Exact, case-sensitive email match. First record wins.
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn user_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Like [`MockStore::user_by_id`], but a miss is an error.
    ///
    /// # Errors
    /// Returns `NotFound` when no user has this id.
    pub fn require_user(&self, id: &str) -> Result<&User, NotFound> {
        self.user_by_id(id).ok_or_else(|| NotFound::user(id))
    }

    /// Users with `role`, in seed order.
    pub fn users_by_role(&self, role: Role) -> Vec<&User> {
        self.users.iter().filter(|u| u.role() == role).collect()
    }

    pub fn event_by_id(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// # Errors
    /// Returns `NotFound` when no event has this id.
    pub fn require_event(&self, id: &str) -> Result<&Event, NotFound> {
        self.event_by_id(id).ok_or_else(|| NotFound::event(id))
    }

    pub fn events_by_organizer(&self, organizer_id: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.organizer_id == organizer_id)
            .collect()
    }

    /// Connections where the user is the organizer or the partner.
    pub fn connections_by_user(&self, user_id: &str) -> Vec<&Connection> {
        self.connections
            .iter()
            .filter(|c| c.involves(user_id))
            .collect()
    }

    pub fn connections_by_event(&self, event_id: &str) -> Vec<&Connection> {
        self.connections
            .iter()
            .filter(|c| c.event_id == event_id)
            .collect()
    }

    pub fn notifications_by_user(&self, user_id: &str) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .collect()
    }

    pub fn unread_count(&self, user_id: &str) -> usize {
        self.notifications
            .iter()
            .filter(|n| n.user_id == user_id && !n.read)
            .count()
    }

    /// Checks referential and uniqueness invariants across all records.
    ///
    /// Returns every violation found; an empty list means the store is
    /// consistent.
    pub fn validate(&self) -> Vec<StoreIssue> {
        let mut issues = Vec::new();

        let mut ids = HashSet::new();
        let mut emails = HashSet::new();
        for user in &self.users {
            if !ids.insert(user.id.as_str()) {
                issues.push(StoreIssue::DuplicateUserId(user.id.clone()));
            }
            if !emails.insert(user.email.as_str()) {
                issues.push(StoreIssue::DuplicateEmail(user.email.clone()));
            }
        }

        for event in &self.events {
            if !self.has_role(&event.organizer_id, Role::Organizer) {
                issues.push(StoreIssue::EventOrganizer {
                    event_id: event.id.clone(),
                    organizer_id: event.organizer_id.clone(),
                });
            }
            for partner in PartnerType::all() {
                for partner_id in event.partners.for_partner(*partner) {
                    if !self.has_role(partner_id, partner.role()) {
                        issues.push(StoreIssue::EventPartner {
                            event_id: event.id.clone(),
                            partner_id: partner_id.clone(),
                            expected: *partner,
                        });
                    }
                }
            }
        }

        for connection in &self.connections {
            if self.event_by_id(&connection.event_id).is_none() {
                issues.push(StoreIssue::ConnectionEvent {
                    connection_id: connection.id.clone(),
                    event_id: connection.event_id.clone(),
                });
            }
            if !self.has_role(&connection.organizer_id, Role::Organizer) {
                issues.push(StoreIssue::ConnectionOrganizer {
                    connection_id: connection.id.clone(),
                    organizer_id: connection.organizer_id.clone(),
                });
            }
            if !self.has_role(&connection.partner_id, connection.partner_type.role()) {
                issues.push(StoreIssue::ConnectionPartner {
                    connection_id: connection.id.clone(),
                    partner_id: connection.partner_id.clone(),
                    expected: connection.partner_type,
                });
            }
        }

        for notification in &self.notifications {
            if self.user_by_id(&notification.user_id).is_none() {
                issues.push(StoreIssue::NotificationUser {
                    notification_id: notification.id.clone(),
                    user_id: notification.user_id.clone(),
                });
            }
        }

        issues
    }

    fn has_role(&self, user_id: &str, role: Role) -> bool {
        self.user_by_id(user_id).is_some_and(|u| u.role() == role)
    }
}

/// A broken invariant found by [`MockStore::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreIssue {
    DuplicateUserId(String),
    DuplicateEmail(String),
    EventOrganizer {
        event_id: String,
        organizer_id: String,
    },
    EventPartner {
        event_id: String,
        partner_id: String,
        expected: PartnerType,
    },
    ConnectionEvent {
        connection_id: String,
        event_id: String,
    },
    ConnectionOrganizer {
        connection_id: String,
        organizer_id: String,
    },
    ConnectionPartner {
        connection_id: String,
        partner_id: String,
        expected: PartnerType,
    },
    NotificationUser {
        notification_id: String,
        user_id: String,
    },
}

impl fmt::Display for StoreIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreIssue::DuplicateUserId(id) => write!(f, "duplicate user id '{id}'"),
            StoreIssue::DuplicateEmail(email) => write!(f, "duplicate email '{email}'"),
            StoreIssue::EventOrganizer {
                event_id,
                organizer_id,
            } => write!(
                f,
                "event '{event_id}': organizer '{organizer_id}' is not an organizer"
            ),
            StoreIssue::EventPartner {
                event_id,
                partner_id,
                expected,
            } => write!(
                f,
                "event '{event_id}': partner '{partner_id}' is not a {expected}"
            ),
            StoreIssue::ConnectionEvent {
                connection_id,
                event_id,
            } => write!(
                f,
                "connection '{connection_id}': event '{event_id}' does not exist"
            ),
            StoreIssue::ConnectionOrganizer {
                connection_id,
                organizer_id,
            } => write!(
                f,
                "connection '{connection_id}': organizer '{organizer_id}' is not an organizer"
            ),
            StoreIssue::ConnectionPartner {
                connection_id,
                partner_id,
                expected,
            } => write!(
                f,
                "connection '{connection_id}': partner '{partner_id}' is not a {expected}"
            ),
            StoreIssue::NotificationUser {
                notification_id,
                user_id,
            } => write!(
                f,
                "notification '{notification_id}': user '{user_id}' does not exist"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use ticketshub_types::VerificationStatus;

    use super::*;

    #[test]
    fn test_seed_store_is_consistent() {
        let store = MockStore::seeded();
        let issues = store.validate();
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    }

    #[test]
    fn test_user_by_id() {
        let store = MockStore::seeded();
        let organizer = store.user_by_id("org-1").unwrap();
        assert_eq!(organizer.company_name(), Some("EventPro Productions"));
        assert!(store.user_by_id("nonexistent").is_none());
    }

    #[test]
    fn test_require_user_reports_missing_id() {
        let store = MockStore::seeded();
        let err = store.require_user("nonexistent").unwrap_err();
        assert_eq!(err, NotFound::user("nonexistent"));
        assert!(store.require_user("admin-1").is_ok());
    }

    #[test]
    fn test_user_by_email_is_case_sensitive() {
        let store = MockStore::seeded();
        assert!(store.user_by_email("admin@management.ticketshub.com").is_some());
        assert!(store.user_by_email("ADMIN@management.ticketshub.com").is_none());
    }

    #[test]
    fn test_users_by_role_keeps_seed_order() {
        let store = MockStore::seeded();
        let vendors: Vec<&str> = store
            .users_by_role(Role::Vendor)
            .iter()
            .map(|u| u.id.as_str())
            .collect();
        assert_eq!(vendors, ["vnd-1", "vnd-2", "vnd-3"]);
        for role in Role::all() {
            assert!(store.users_by_role(*role).iter().all(|u| u.role() == *role));
        }
    }

    #[test]
    fn test_notifications_by_user_only_returns_own() {
        let store = MockStore::seeded();
        for user in store.users() {
            let notifications = store.notifications_by_user(&user.id);
            assert!(notifications.iter().all(|n| n.user_id == user.id));
            let unread = notifications.iter().filter(|n| !n.read).count();
            assert_eq!(store.unread_count(&user.id), unread);
        }
        assert_eq!(store.unread_count("org-1"), 2);
    }

    #[test]
    fn test_connections_by_user_matches_organizer_or_partner() {
        let store = MockStore::seeded();
        for user in store.users() {
            let found = store.connections_by_user(&user.id);
            let expected: Vec<&str> = store
                .connections()
                .iter()
                .filter(|c| c.organizer_id == user.id || c.partner_id == user.id)
                .map(|c| c.id.as_str())
                .collect();
            let found_ids: Vec<&str> = found.iter().map(|c| c.id.as_str()).collect();
            assert_eq!(found_ids, expected);

            let unique: HashSet<&str> = found_ids.iter().copied().collect();
            assert_eq!(unique.len(), found_ids.len());
        }
        assert_eq!(store.connections_by_user("spk-1").len(), 3);
    }

    #[test]
    fn test_events_by_organizer() {
        let store = MockStore::seeded();
        let events = store.events_by_organizer("org-1");
        assert_eq!(events.len(), 4);
        assert!(events.iter().all(|e| e.organizer_id == "org-1"));
        assert!(store.events_by_organizer("vnd-1").is_empty());
    }

    #[test]
    fn test_connections_by_event() {
        let store = MockStore::seeded();
        let ids: Vec<&str> = store
            .connections_by_event("evt-1")
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, ["con-1", "con-2", "con-3"]);
        assert!(store.connections_by_event("nonexistent").is_empty());
    }

    #[test]
    fn test_seed_covers_every_status() {
        let store = MockStore::seeded();
        for status in [
            VerificationStatus::Pending,
            VerificationStatus::Verified,
            VerificationStatus::Rejected,
        ] {
            assert!(store.users().iter().any(|u| u.status == status));
        }
    }

    #[test]
    fn test_validate_reports_broken_references() {
        let mut users = seed::users();
        let duplicate = users[0].clone();
        users.push(duplicate);
        let mut connections = seed::connections();
        connections[0].partner_id = "spk-1".to_string();
        let mut notifications = seed::notifications();
        notifications[0].user_id = "ghost".to_string();

        let store = MockStore::new(users, seed::events(), connections, notifications);
        let issues = store.validate();

        assert!(issues.contains(&StoreIssue::DuplicateUserId("admin-1".to_string())));
        assert!(issues.contains(&StoreIssue::DuplicateEmail(
            "admin@management.ticketshub.com".to_string()
        )));
        assert!(issues.contains(&StoreIssue::ConnectionPartner {
            connection_id: "con-1".to_string(),
            partner_id: "spk-1".to_string(),
            expected: PartnerType::Vendor,
        }));
        assert!(issues.contains(&StoreIssue::NotificationUser {
            notification_id: "ntf-1".to_string(),
            user_id: "ghost".to_string(),
        }));
    }
}
