//! Header and navigation shell.
//!
//! The header shows the brand, the navigation entries for the current role,
//! the unread notification badge and the user menu entry point (or the
//! sign-in/sign-up entry points when signed out).

mod render;

use std::sync::LazyLock;

use enum_map::{EnumMap, enum_map};
pub use render::{HEADER_HEIGHT, render_header};
use ticketshub_types::Role;

/// A navigation destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavItem {
    Home,
    Features,
    Roles,
    About,
    Dashboard,
    Users,
    Events,
    Verifications,
    MyEvents,
    Partners,
    Connections,
    Opportunities,
    Profile,
}

impl NavItem {
    pub fn label(self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::Features => "Features",
            NavItem::Roles => "Roles",
            NavItem::About => "About",
            NavItem::Dashboard => "Dashboard",
            NavItem::Users => "Users",
            NavItem::Events => "Events",
            NavItem::Verifications => "Verifications",
            NavItem::MyEvents => "My Events",
            NavItem::Partners => "Partners",
            NavItem::Connections => "Connections",
            NavItem::Opportunities => "Opportunities",
            NavItem::Profile => "Profile",
        }
    }
}

const SIGNED_OUT_NAV: &[NavItem] = &[
    NavItem::Home,
    NavItem::Features,
    NavItem::Roles,
    NavItem::About,
];

const ADMIN_NAV: &[NavItem] = &[
    NavItem::Dashboard,
    NavItem::Users,
    NavItem::Events,
    NavItem::Verifications,
];

const ORGANIZER_NAV: &[NavItem] = &[
    NavItem::Dashboard,
    NavItem::MyEvents,
    NavItem::Partners,
    NavItem::Connections,
];

const PARTNER_NAV: &[NavItem] = &[
    NavItem::Dashboard,
    NavItem::Opportunities,
    NavItem::Connections,
    NavItem::Profile,
];

static ROLE_NAV: LazyLock<EnumMap<Role, &'static [NavItem]>> = LazyLock::new(|| {
    enum_map! {
        Role::Admin => ADMIN_NAV,
        Role::Organizer => ORGANIZER_NAV,
        Role::Vendor | Role::Speaker | Role::Sponsor => PARTNER_NAV,
    }
});

/// Navigation entries for the signed-in role, or the public ones.
pub fn nav_items(role: Option<Role>) -> &'static [NavItem] {
    role.map_or(SIGNED_OUT_NAV, |role| ROLE_NAV[role])
}

/// Wraps `index + delta` into the entry list for `role`.
pub fn step_nav(role: Option<Role>, index: usize, delta: isize) -> usize {
    let len = nav_items(role).len() as isize;
    if len == 0 {
        return 0;
    }
    (index as isize + delta).rem_euclid(len) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_out_nav() {
        let labels: Vec<&str> = nav_items(None).iter().map(|n| n.label()).collect();
        assert_eq!(labels, ["Home", "Features", "Roles", "About"]);
    }

    #[test]
    fn test_role_nav() {
        let labels = |role: Role| -> Vec<&'static str> {
            nav_items(Some(role)).iter().map(|n| n.label()).collect()
        };
        assert_eq!(
            labels(Role::Admin),
            ["Dashboard", "Users", "Events", "Verifications"]
        );
        assert_eq!(
            labels(Role::Organizer),
            ["Dashboard", "My Events", "Partners", "Connections"]
        );
        for role in [Role::Vendor, Role::Speaker, Role::Sponsor] {
            assert_eq!(
                labels(role),
                ["Dashboard", "Opportunities", "Connections", "Profile"]
            );
        }
    }

    #[test]
    fn test_step_nav_wraps() {
        assert_eq!(step_nav(None, 0, -1), 3);
        assert_eq!(step_nav(None, 3, 1), 0);
        assert_eq!(step_nav(Some(Role::Admin), 1, 1), 2);
    }
}
