//! Users, roles and role-specific profiles.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use enum_map::Enum;
use serde::{Deserialize, Serialize};

/// Platform role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Organizer,
    Vendor,
    Speaker,
    Sponsor,
}

impl Role {
    /// All roles in display order.
    pub fn all() -> &'static [Role] {
        &[
            Role::Admin,
            Role::Organizer,
            Role::Vendor,
            Role::Speaker,
            Role::Sponsor,
        ]
    }

    /// Roles a visitor may pick when signing up (admins are never self-service).
    pub fn signup_roles() -> &'static [Role] {
        &[Role::Organizer, Role::Vendor, Role::Speaker, Role::Sponsor]
    }

    /// Returns the lowercase identifier used in storage and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Organizer => "organizer",
            Role::Vendor => "vendor",
            Role::Speaker => "speaker",
            Role::Sponsor => "sponsor",
        }
    }

    /// Returns the capitalized label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Organizer => "Organizer",
            Role::Vendor => "Vendor",
            Role::Speaker => "Speaker",
            Role::Sponsor => "Sponsor",
        }
    }

    /// Returns true for vendor, speaker and sponsor.
    pub fn is_partner(&self) -> bool {
        matches!(self, Role::Vendor | Role::Speaker | Role::Sponsor)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing one of the lowercase domain enums fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: '{}'", self.kind, self.value)
    }
}

impl std::error::Error for ParseEnumError {}

impl FromStr for Role {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::all()
            .iter()
            .copied()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError {
                kind: "role",
                value: s.to_string(),
            })
    }
}

/// Account verification state. Only verified accounts may sign in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Verified => "verified",
            VerificationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizerProfile {
    pub company_name: String,
    pub company_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub description: String,
    pub events_organized: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorProfile {
    pub business_name: String,
    /// Service category matched against event vendor requirements.
    pub category: String,
    pub services: Vec<String>,
    pub price_range: String,
    #[serde(default)]
    pub portfolio: Vec<String>,
    pub rating: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerProfile {
    pub expertise: Vec<String>,
    pub bio: String,
    pub experience_years: u32,
    pub speaking_fee: u64,
    pub topics: Vec<String>,
    pub rating: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SponsorProfile {
    pub company_name: String,
    pub industry: String,
    pub sponsorship_budget: u64,
    pub sponsorship_types: Vec<String>,
    pub target_audience: String,
}

/// Role-specific profile fields.
///
/// The variant doubles as the user's role, so a user can never carry a
/// profile shape that disagrees with its role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Profile {
    Admin,
    Organizer(OrganizerProfile),
    Vendor(VendorProfile),
    Speaker(SpeakerProfile),
    Sponsor(SponsorProfile),
}

impl Profile {
    pub fn role(&self) -> Role {
        match self {
            Profile::Admin => Role::Admin,
            Profile::Organizer(_) => Role::Organizer,
            Profile::Vendor(_) => Role::Vendor,
            Profile::Speaker(_) => Role::Speaker,
            Profile::Sponsor(_) => Role::Sponsor,
        }
    }
}

/// Identity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    /// Plaintext demo password. Never written to session snapshots.
    #[serde(default, skip_serializing)]
    pub password: String,
    pub name: String,
    pub phone: String,
    pub status: VerificationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub profile: Profile,
}

impl User {
    pub fn role(&self) -> Role {
        self.profile.role()
    }

    pub fn is_verified(&self) -> bool {
        self.status == VerificationStatus::Verified
    }

    /// Company or business name for organizer, vendor and sponsor accounts.
    pub fn company_name(&self) -> Option<&str> {
        match &self.profile {
            Profile::Organizer(p) => Some(&p.company_name),
            Profile::Vendor(p) => Some(&p.business_name),
            Profile::Sponsor(p) => Some(&p.company_name),
            Profile::Admin | Profile::Speaker(_) => None,
        }
    }

    /// Up to two initials from the display name, used as an avatar fallback.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speaker() -> User {
        User {
            id: "spk-9".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
            name: "ada lovelace".to_string(),
            phone: "+1 555 0100".to_string(),
            status: VerificationStatus::Pending,
            avatar: None,
            created_at: DateTime::<Utc>::default(),
            last_login: None,
            profile: Profile::Speaker(SpeakerProfile {
                expertise: vec!["Computing".to_string()],
                bio: "Analyst".to_string(),
                experience_years: 12,
                speaking_fee: 5000,
                topics: vec!["Engines".to_string()],
                rating: 4.9,
            }),
        }
    }

    #[test]
    fn test_role_parses_case_insensitively() {
        assert_eq!("Speaker".parse::<Role>().unwrap(), Role::Speaker);
        assert_eq!(" admin ".parse::<Role>().unwrap(), Role::Admin);
        let err = "guest".parse::<Role>().unwrap_err();
        assert_eq!(err.to_string(), "unknown role: 'guest'");
    }

    #[test]
    fn test_signup_roles_exclude_admin() {
        assert!(!Role::signup_roles().contains(&Role::Admin));
        assert!(
            Role::signup_roles()
                .iter()
                .all(|role| role.is_partner() || *role == Role::Organizer)
        );
    }

    #[test]
    fn test_profile_is_flattened_with_role_tag() {
        let json = serde_json::to_value(speaker()).unwrap();
        assert_eq!(json["role"], "speaker");
        assert_eq!(json["experience_years"], 12);
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_snapshot_json_restores_profile_without_password() {
        let json = serde_json::to_string(&speaker()).unwrap();
        let restored: User = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.role(), Role::Speaker);
        assert!(restored.password.is_empty());
        assert_eq!(restored.profile, speaker().profile);
    }

    #[test]
    fn test_initials_and_company_name() {
        let user = speaker();
        assert_eq!(user.initials(), "AL");
        assert_eq!(user.company_name(), None);
        assert!(!user.is_verified());
    }
}
