//! Links between an event and a partner user.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::Role;

/// The kind of partner on the other end of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerType {
    Vendor,
    Speaker,
    Sponsor,
}

impl PartnerType {
    pub fn all() -> &'static [PartnerType] {
        &[PartnerType::Vendor, PartnerType::Speaker, PartnerType::Sponsor]
    }

    /// The user role a partner of this type must have.
    pub fn role(self) -> Role {
        match self {
            PartnerType::Vendor => Role::Vendor,
            PartnerType::Speaker => Role::Speaker,
            PartnerType::Sponsor => Role::Sponsor,
        }
    }

    /// Maps a role back to a partner type (`None` for admin and organizer).
    pub fn from_role(role: Role) -> Option<Self> {
        match role {
            Role::Vendor => Some(PartnerType::Vendor),
            Role::Speaker => Some(PartnerType::Speaker),
            Role::Sponsor => Some(PartnerType::Sponsor),
            Role::Admin | Role::Organizer => None,
        }
    }
}

impl fmt::Display for PartnerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.role().as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
}

impl ConnectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionStatus::Pending => "pending",
            ConnectionStatus::Accepted => "accepted",
            ConnectionStatus::Rejected => "rejected",
            ConnectionStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub event_id: String,
    pub organizer_id: String,
    pub partner_id: String,
    pub partner_type: PartnerType,
    pub status: ConnectionStatus,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Connection {
    /// True when `user_id` is either side of the connection.
    pub fn involves(&self, user_id: &str) -> bool {
        self.organizer_id == user_id || self.partner_id == user_id
    }
}
