//! Per-role presentation: glyph, accent colour and landing-page blurb.

use std::sync::LazyLock;

use enum_map::{EnumMap, enum_map};
use ratatui::style::Color;
use ticketshub_types::Role;

#[derive(Debug, Clone, Copy)]
pub struct RoleStyle {
    pub icon: &'static str,
    pub color: Color,
    pub tagline: &'static str,
}

static ROLE_STYLES: LazyLock<EnumMap<Role, RoleStyle>> = LazyLock::new(|| {
    enum_map! {
        Role::Admin => RoleStyle {
            icon: "◆",
            color: Color::Red,
            tagline: "Verify accounts, approve events, keep the platform healthy.",
        },
        Role::Organizer => RoleStyle {
            icon: "▣",
            color: Color::Cyan,
            tagline: "Plan events and find the partners to make them happen.",
        },
        Role::Vendor => RoleStyle {
            icon: "▲",
            color: Color::Green,
            tagline: "Offer catering, AV, decor and more to events that need you.",
        },
        Role::Speaker => RoleStyle {
            icon: "●",
            color: Color::Magenta,
            tagline: "Share your expertise on the stages looking for your topics.",
        },
        Role::Sponsor => RoleStyle {
            icon: "★",
            color: Color::Yellow,
            tagline: "Reach the right audience by backing the right events.",
        },
    }
});

pub fn role_style(role: Role) -> &'static RoleStyle {
    &ROLE_STYLES[role]
}
