//! Vendor, speaker and sponsor views.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ticketshub_core::MockStore;
use ticketshub_core::dashboard::{Opportunity, PartnerOverview};
use ticketshub_types::{ConnectionStatus, Profile, User};

use super::widgets::{
    event_status_color, panel, render_connections_table, render_notifications, render_stats,
};
use crate::common::{format_money, role_style};
use crate::features::header::NavItem;

pub fn render(frame: &mut Frame, area: Rect, store: &MockStore, user: &User, nav: NavItem) {
    let overview = PartnerOverview::compute(store, user);

    match nav {
        NavItem::Opportunities => render_opportunities(frame, area, &overview.opportunities),
        NavItem::Connections => {
            render_connections_table(frame, area, store, &user.id, &overview.connections);
        }
        NavItem::Profile => render_profile(frame, area, user),
        _ => render_overview(frame, area, store, user, &overview),
    }
}

/// One-line description of what a partner offers.
pub(super) fn summary(user: &User) -> String {
    match &user.profile {
        Profile::Vendor(v) => format!("{} · {} · ★ {:.1}", v.category, v.price_range, v.rating),
        Profile::Speaker(s) => format!(
            "{} · {} yrs · ★ {:.1}",
            s.expertise.join(", "),
            s.experience_years,
            s.rating
        ),
        Profile::Sponsor(s) => format!(
            "{} · budget {}",
            s.industry,
            format_money(s.sponsorship_budget)
        ),
        Profile::Admin | Profile::Organizer(_) => String::new(),
    }
}

fn render_overview(
    frame: &mut Frame,
    area: Rect,
    store: &MockStore,
    user: &User,
    overview: &PartnerOverview<'_>,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);

    let count = |status: ConnectionStatus| {
        overview
            .connections
            .iter()
            .filter(|c| c.status == status)
            .count()
    };
    render_stats(
        frame,
        rows[0],
        &[
            (
                "Opportunities",
                overview.opportunities.len().to_string(),
                Color::Cyan,
            ),
            (
                "Pending requests",
                count(ConnectionStatus::Pending).to_string(),
                Color::Yellow,
            ),
            (
                "Active",
                count(ConnectionStatus::Accepted).to_string(),
                Color::Green,
            ),
            (
                "Completed",
                count(ConnectionStatus::Completed).to_string(),
                Color::Gray,
            ),
        ],
    );

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    render_opportunities(frame, cols[0], &overview.opportunities);
    render_notifications(frame, cols[1], &store.notifications_by_user(&user.id));
}

fn render_opportunities(frame: &mut Frame, area: Rect, opportunities: &[Opportunity<'_>]) {
    let mut lines = Vec::new();
    for opportunity in opportunities {
        let event = opportunity.event;
        lines.push(Line::from(vec![
            Span::styled(
                event.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", event.status),
                Style::default().fg(event_status_color(event.status)),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "  {} · {} · {} attendees",
                event.date.format("%b %d, %Y"),
                event.location,
                event.expected_attendees
            ),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(vec![
            Span::styled("  Looking for: ", Style::default().fg(Color::DarkGray)),
            Span::styled(opportunity.matched.join(", "), Style::default().fg(Color::Green)),
        ]));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No open events match your profile right now",
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel(&format!("Opportunities ({})", opportunities.len()))),
        area,
    );
}

fn field(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<16}"), Style::default().fg(Color::Gray)),
        Span::raw(value.into()),
    ])
}

fn render_profile(frame: &mut Frame, area: Rect, user: &User) {
    let style = role_style(user.role());
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", style.icon, user.name),
            Style::default().fg(style.color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("Email", user.email.clone()),
        field("Phone", user.phone.clone()),
        field("Status", user.status.as_str()),
    ];

    match &user.profile {
        Profile::Vendor(v) => {
            lines.push(field("Business", v.business_name.clone()));
            lines.push(field("Category", v.category.clone()));
            lines.push(field("Services", v.services.join(", ")));
            lines.push(field("Price range", v.price_range.clone()));
            lines.push(field("Rating", format!("★ {:.1}", v.rating)));
        }
        Profile::Speaker(s) => {
            lines.push(field("Expertise", s.expertise.join(", ")));
            lines.push(field("Topics", s.topics.join(", ")));
            lines.push(field("Experience", format!("{} years", s.experience_years)));
            lines.push(field("Speaking fee", format_money(s.speaking_fee)));
            lines.push(field("Rating", format!("★ {:.1}", s.rating)));
            lines.push(Line::from(""));
            lines.push(Line::from(s.bio.clone()));
        }
        Profile::Sponsor(s) => {
            lines.push(field("Company", s.company_name.clone()));
            lines.push(field("Industry", s.industry.clone()));
            lines.push(field("Budget", format_money(s.sponsorship_budget)));
            lines.push(field("Sponsorships", s.sponsorship_types.join(", ")));
            lines.push(field("Audience", s.target_audience.clone()));
        }
        Profile::Admin | Profile::Organizer(_) => {}
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel("Profile")),
        area,
    );
}
