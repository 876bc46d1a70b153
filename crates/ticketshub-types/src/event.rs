//! Events and their partner requirements.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::connection::PartnerType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Draft,
    Pending,
    Approved,
    Published,
    Completed,
}

impl EventStatus {
    pub fn all() -> &'static [EventStatus] {
        &[
            EventStatus::Draft,
            EventStatus::Pending,
            EventStatus::Approved,
            EventStatus::Published,
            EventStatus::Completed,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Draft => "draft",
            EventStatus::Pending => "pending",
            EventStatus::Approved => "approved",
            EventStatus::Published => "published",
            EventStatus::Completed => "completed",
        }
    }

    /// Events still open to new partner connections.
    pub fn accepts_partners(&self) -> bool {
        matches!(self, EventStatus::Approved | EventStatus::Published)
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categories an organizer is looking for, per partner type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRequirements {
    #[serde(default)]
    pub vendors: Vec<String>,
    #[serde(default)]
    pub speakers: Vec<String>,
    #[serde(default)]
    pub sponsors: Vec<String>,
}

impl EventRequirements {
    pub fn for_partner(&self, partner: PartnerType) -> &[String] {
        match partner {
            PartnerType::Vendor => &self.vendors,
            PartnerType::Speaker => &self.speakers,
            PartnerType::Sponsor => &self.sponsors,
        }
    }
}

/// Ids of partners already attached to an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPartners {
    #[serde(default)]
    pub vendors: Vec<String>,
    #[serde(default)]
    pub speakers: Vec<String>,
    #[serde(default)]
    pub sponsors: Vec<String>,
}

impl EventPartners {
    pub fn for_partner(&self, partner: PartnerType) -> &[String] {
        match partner {
            PartnerType::Vendor => &self.vendors,
            PartnerType::Speaker => &self.speakers,
            PartnerType::Sponsor => &self.sponsors,
        }
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.vendors
            .iter()
            .chain(&self.speakers)
            .chain(&self.sponsors)
            .any(|id| id == user_id)
    }

    pub fn len(&self) -> usize {
        self.vendors.len() + self.speakers.len() + self.sponsors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub venue: String,
    pub location: String,
    pub organizer_id: String,
    pub status: EventStatus,
    pub budget: u64,
    pub expected_attendees: u32,
    #[serde(default)]
    pub requirements: EventRequirements,
    #[serde(default)]
    pub partners: EventPartners,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partners_contains_any_list() {
        let partners = EventPartners {
            vendors: vec!["vnd-1".to_string()],
            speakers: vec![],
            sponsors: vec!["spn-1".to_string()],
        };
        assert!(partners.contains("spn-1"));
        assert!(!partners.contains("spk-1"));
        assert_eq!(partners.len(), 2);
        assert_eq!(partners.for_partner(PartnerType::Sponsor), ["spn-1"]);
    }

    #[test]
    fn test_only_live_events_accept_partners() {
        let open: Vec<_> = EventStatus::all()
            .iter()
            .filter(|s| s.accepts_partners())
            .collect();
        assert_eq!(open, [&EventStatus::Approved, &EventStatus::Published]);
    }
}
