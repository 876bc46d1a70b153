//! Domain records shared by the TICKETSHUB crates.
//!
//! Everything here is plain data: users with their role profiles, events,
//! partner connections and notifications. Lookup and session logic lives in
//! `ticketshub-core`.

pub mod connection;
pub mod event;
pub mod notification;
pub mod user;

pub use connection::{Connection, ConnectionStatus, PartnerType};
pub use event::{Event, EventPartners, EventRequirements, EventStatus};
pub use notification::{Notification, NotificationKind};
pub use user::{
    OrganizerProfile, ParseEnumError, Profile, Role, SpeakerProfile, SponsorProfile, User,
    VendorProfile, VerificationStatus,
};
