//! Figures behind the role dashboards.
//!
//! All of this is derived from the store on demand. Moderation actions are
//! recorded in the log only; the store is never mutated.

use std::fmt;

use enum_map::EnumMap;
use ticketshub_types::{
    Connection, Event, EventStatus, PartnerType, Profile, Role, User, VerificationStatus,
};

use crate::error::NotFound;
use crate::store::MockStore;

/// Monthly sign-ups shown on the admin chart. Static sample series.
pub const MONTHLY_REGISTRATIONS: [(&str, u64); 6] = [
    ("Oct", 12),
    ("Nov", 19),
    ("Dec", 15),
    ("Jan", 27),
    ("Feb", 34),
    ("Mar", 41),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminMetrics {
    pub total_users: usize,
    pub total_events: usize,
    pub pending_verifications: usize,
    pub total_connections: usize,
    pub users_per_role: EnumMap<Role, usize>,
    /// Count per status, in `EventStatus::all()` order.
    pub events_per_status: Vec<(EventStatus, usize)>,
}

impl AdminMetrics {
    pub fn compute(store: &MockStore) -> Self {
        let mut users_per_role = EnumMap::default();
        for user in store.users() {
            users_per_role[user.role()] += 1;
        }

        let events_per_status = EventStatus::all()
            .iter()
            .map(|status| {
                let count = store.events().iter().filter(|e| e.status == *status).count();
                (*status, count)
            })
            .collect();

        Self {
            total_users: store.users().len(),
            total_events: store.events().len(),
            pending_verifications: pending_verifications(store).len(),
            total_connections: store.connections().len(),
            users_per_role,
            events_per_status,
        }
    }
}

/// Users waiting for an admin decision, in seed order.
pub fn pending_verifications(store: &MockStore) -> Vec<&User> {
    store
        .users()
        .iter()
        .filter(|u| u.status == VerificationStatus::Pending)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Approve,
    Reject,
}

impl fmt::Display for ModerationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModerationAction::Approve => f.write_str("approve"),
            ModerationAction::Reject => f.write_str("reject"),
        }
    }
}

/// Records an admin decision on a pending account.
///
/// The decision is logged and a confirmation message returned; the user
/// record keeps its status.
///
/// # Errors
/// Returns `NotFound` if no user has `user_id`.
pub fn moderate(
    store: &MockStore,
    user_id: &str,
    action: ModerationAction,
) -> Result<String, NotFound> {
    let user = store.require_user(user_id)?;
    tracing::info!(
        user_id = %user.id,
        role = %user.role(),
        status = %user.status,
        %action,
        "verification decision recorded"
    );
    let verb = match action {
        ModerationAction::Approve => "Approved",
        ModerationAction::Reject => "Rejected",
    };
    Ok(format!("{verb} {} ({})", user.name, user.role().label()))
}

/// An organizer's own events and the connections made for them.
#[derive(Debug, Clone)]
pub struct OrganizerOverview<'a> {
    pub events: Vec<&'a Event>,
    pub connections: Vec<&'a Connection>,
}

impl<'a> OrganizerOverview<'a> {
    pub fn compute(store: &'a MockStore, organizer_id: &str) -> Self {
        let events = store.events_by_organizer(organizer_id);
        let connections = events
            .iter()
            .flat_map(|e| store.connections_by_event(&e.id))
            .collect();
        Self {
            events,
            connections,
        }
    }

    pub fn upcoming(&self) -> usize {
        self.events
            .iter()
            .filter(|e| e.status != EventStatus::Completed)
            .count()
    }

    pub fn total_budget(&self) -> u64 {
        self.events.iter().map(|e| e.budget).sum()
    }
}

/// An open event whose requirements match what a partner offers.
#[derive(Debug, Clone, PartialEq)]
pub struct Opportunity<'a> {
    pub event: &'a Event,
    /// Requirement entries the partner satisfies.
    pub matched: Vec<String>,
}

/// What a vendor, speaker or sponsor offers, as requirement keywords.
fn offerings(user: &User) -> Vec<&str> {
    match &user.profile {
        Profile::Vendor(v) => vec![v.category.as_str()],
        Profile::Speaker(s) => s
            .expertise
            .iter()
            .chain(&s.topics)
            .map(String::as_str)
            .collect(),
        Profile::Sponsor(s) => s.sponsorship_types.iter().map(String::as_str).collect(),
        Profile::Admin | Profile::Organizer(_) => Vec::new(),
    }
}

/// Events accepting partners whose requirements match the user's profile.
///
/// Events the user already partners on are left out. Non-partner roles get
/// no opportunities.
pub fn opportunities<'a>(store: &'a MockStore, user: &User) -> Vec<Opportunity<'a>> {
    let Some(partner) = PartnerType::from_role(user.role()) else {
        return Vec::new();
    };
    let offered = offerings(user);

    store
        .events()
        .iter()
        .filter(|e| e.status.accepts_partners() && !e.partners.contains(&user.id))
        .filter_map(|event| {
            let matched: Vec<String> = event
                .requirements
                .for_partner(partner)
                .iter()
                .filter(|wanted| offered.iter().any(|o| o.eq_ignore_ascii_case(wanted)))
                .cloned()
                .collect();
            (!matched.is_empty()).then_some(Opportunity { event, matched })
        })
        .collect()
}

/// A partner's connections and open opportunities.
#[derive(Debug, Clone)]
pub struct PartnerOverview<'a> {
    pub connections: Vec<&'a Connection>,
    pub opportunities: Vec<Opportunity<'a>>,
}

impl<'a> PartnerOverview<'a> {
    pub fn compute(store: &'a MockStore, user: &User) -> Self {
        Self {
            connections: store
                .connections_by_user(&user.id)
                .into_iter()
                .filter(|c| c.partner_id == user.id)
                .collect(),
            opportunities: opportunities(store, user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_metrics_match_store() {
        let store = MockStore::seeded();
        let metrics = AdminMetrics::compute(&store);

        assert_eq!(metrics.total_users, store.users().len());
        assert_eq!(metrics.users_per_role.values().sum::<usize>(), metrics.total_users);
        assert_eq!(metrics.users_per_role[Role::Vendor], 3);
        assert_eq!(metrics.pending_verifications, 3);
        assert_eq!(
            metrics.events_per_status.iter().map(|(_, n)| n).sum::<usize>(),
            metrics.total_events
        );
    }

    #[test]
    fn test_moderate_is_logged_only() {
        let store = MockStore::seeded();
        let message = moderate(&store, "org-2", ModerationAction::Approve).unwrap();
        assert_eq!(message, "Approved Michael Chen (Organizer)");
        assert_eq!(
            store.user_by_id("org-2").unwrap().status,
            VerificationStatus::Pending
        );
        assert!(moderate(&store, "nonexistent", ModerationAction::Reject).is_err());
    }

    #[test]
    fn test_organizer_overview() {
        let store = MockStore::seeded();
        let overview = OrganizerOverview::compute(&store, "org-1");
        assert_eq!(overview.events.len(), 4);
        assert_eq!(overview.connections.len(), 6);
        assert_eq!(overview.upcoming(), 3);
    }

    #[test]
    fn test_vendor_opportunities_skip_joined_events() {
        let store = MockStore::seeded();
        let caterer = store.user_by_id("vnd-1").unwrap();
        let found = opportunities(&store, caterer);
        let ids: Vec<&str> = found.iter().map(|o| o.event.id.as_str()).collect();
        // evt-1 already has vnd-1, evt-3 is still pending approval.
        assert_eq!(ids, ["evt-2"]);
        assert_eq!(found[0].matched, ["Catering"]);
    }

    #[test]
    fn test_speaker_opportunities_match_topics() {
        let store = MockStore::seeded();
        let speaker = store.user_by_id("spk-1").unwrap();
        assert!(opportunities(&store, speaker).is_empty());

        let sponsor = store.user_by_id("spn-1").unwrap();
        let found = opportunities(&store, sponsor);
        let ids: Vec<&str> = found.iter().map(|o| o.event.id.as_str()).collect();
        assert_eq!(ids, ["evt-1", "evt-2"]);
    }

    #[test]
    fn test_admin_has_no_opportunities() {
        let store = MockStore::seeded();
        let admin = store.user_by_id("admin-1").unwrap();
        assert!(opportunities(&store, admin).is_empty());
    }
}
