use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ticketshub_core::MockStore;
use ticketshub_core::dashboard::OrganizerOverview;
use ticketshub_types::{ConnectionStatus, PartnerType, User};

use super::widgets::{
    panel, render_connections_table, render_events_table, render_notifications, render_stats,
};
use crate::common::{format_money, role_style};
use crate::features::header::NavItem;

pub fn render(frame: &mut Frame, area: Rect, store: &MockStore, user: &User, nav: NavItem) {
    let overview = OrganizerOverview::compute(store, &user.id);

    match nav {
        NavItem::MyEvents => {
            render_events_table(
                frame,
                area,
                &format!("My events ({})", overview.events.len()),
                &overview.events,
            );
        }
        NavItem::Partners => render_partners(frame, area, store),
        NavItem::Connections => {
            render_connections_table(frame, area, store, &user.id, &overview.connections);
        }
        _ => render_overview(frame, area, store, user, &overview),
    }
}

fn render_overview(
    frame: &mut Frame,
    area: Rect,
    store: &MockStore,
    user: &User,
    overview: &OrganizerOverview<'_>,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);

    let pending = overview
        .connections
        .iter()
        .filter(|c| c.status == ConnectionStatus::Pending)
        .count();
    render_stats(
        frame,
        rows[0],
        &[
            ("My events", overview.events.len().to_string(), Color::Cyan),
            ("Upcoming", overview.upcoming().to_string(), Color::Blue),
            ("Pending requests", pending.to_string(), Color::Yellow),
            ("Total budget", format_money(overview.total_budget()), Color::Green),
        ],
    );

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    render_events_table(frame, cols[0], "Recent events", &overview.events);
    render_notifications(frame, cols[1], &store.notifications_by_user(&user.id));
}

/// Verified partners grouped by type.
fn render_partners(frame: &mut Frame, area: Rect, store: &MockStore) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (partner, col) in PartnerType::all().iter().zip(cols.iter()) {
        let role = partner.role();
        let style = role_style(role);
        let partners: Vec<&User> = store
            .users_by_role(role)
            .into_iter()
            .filter(|u| u.is_verified())
            .collect();

        let mut lines = Vec::new();
        for user in &partners {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", style.icon), Style::default().fg(style.color)),
                Span::styled(
                    user.company_name().unwrap_or(&user.name).to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", super::partner::summary(user)),
                Style::default().fg(Color::Gray),
            )));
        }
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(panel(&format!("{}s ({})", role.label(), partners.len()))),
            *col,
        );
    }
}
