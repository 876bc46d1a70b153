//! Demo accounts, one per role.
//!
//! Sign-up never creates a record: after the simulated verification the
//! visitor is signed in to the demo account of the role they picked.

use std::sync::LazyLock;

use enum_map::{EnumMap, enum_map};
use ticketshub_types::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoCredential {
    pub email: &'static str,
    pub password: &'static str,
}

static DEMO_CREDENTIALS: LazyLock<EnumMap<Role, DemoCredential>> = LazyLock::new(|| {
    enum_map! {
        Role::Admin => DemoCredential {
            email: "admin@management.ticketshub.com",
            password: "admin123",
        },
        Role::Organizer => DemoCredential {
            email: "organizer@management.ticketshub.com",
            password: "organizer123",
        },
        Role::Vendor => DemoCredential {
            email: "vendor@management.ticketshub.com",
            password: "vendor123",
        },
        Role::Speaker => DemoCredential {
            email: "speaker@management.ticketshub.com",
            password: "speaker123",
        },
        Role::Sponsor => DemoCredential {
            email: "sponsor@management.ticketshub.com",
            password: "sponsor123",
        },
    }
});

pub fn credential(role: Role) -> DemoCredential {
    DEMO_CREDENTIALS[role]
}
