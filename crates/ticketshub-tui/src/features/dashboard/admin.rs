//! Admin views: platform totals, user and event tables, verification queue.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{BarChart, Cell, List, ListItem, ListState, Paragraph, Row, Table};
use ticketshub_core::MockStore;
use ticketshub_core::dashboard::{AdminMetrics, MONTHLY_REGISTRATIONS, pending_verifications};
use ticketshub_types::{Role, User, VerificationStatus};

use super::DashboardState;
use super::widgets::{
    event_status_color, panel, render_events_table, render_notifications, render_stats,
};
use crate::common::role_style;
use crate::features::header::NavItem;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    store: &MockStore,
    admin: &User,
    state: &DashboardState,
    nav: NavItem,
) {
    match nav {
        NavItem::Users => render_users(frame, area, store),
        NavItem::Events => {
            let events: Vec<_> = store.events().iter().collect();
            render_events_table(frame, area, &format!("All events ({})", events.len()), &events);
        }
        NavItem::Verifications => render_verifications(frame, area, store, admin, state),
        _ => render_overview(frame, area, store, admin),
    }
}

fn render_overview(frame: &mut Frame, area: Rect, store: &MockStore, admin: &User) {
    let metrics = AdminMetrics::compute(store);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(10),
        ])
        .split(area);

    render_stats(
        frame,
        rows[0],
        &[
            ("Total users", metrics.total_users.to_string(), Color::Cyan),
            ("Total events", metrics.total_events.to_string(), Color::Blue),
            (
                "Pending verifications",
                metrics.pending_verifications.to_string(),
                Color::Yellow,
            ),
            (
                "Connections",
                metrics.total_connections.to_string(),
                Color::Green,
            ),
        ],
    );

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let role_rows: Vec<(&str, u64)> = Role::all()
        .iter()
        .map(|role| (role.label(), metrics.users_per_role[*role] as u64))
        .collect();
    frame.render_widget(
        BarChart::default()
            .block(panel("Users by role"))
            .data(role_rows.as_slice())
            .bar_width(9)
            .bar_gap(2)
            .bar_style(Style::default().fg(Color::Cyan))
            .value_style(Style::default().fg(Color::Black).bg(Color::Cyan)),
        middle[0],
    );

    frame.render_widget(
        BarChart::default()
            .block(panel("Monthly registrations"))
            .data(MONTHLY_REGISTRATIONS.as_slice())
            .bar_width(5)
            .bar_gap(1)
            .bar_style(Style::default().fg(Color::Green))
            .value_style(Style::default().fg(Color::Black).bg(Color::Green)),
        middle[1],
    );

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(rows[2]);

    let status_lines: Vec<Line> = metrics
        .events_per_status
        .iter()
        .map(|(status, count)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<10}", status.as_str()),
                    Style::default().fg(event_status_color(*status)),
                ),
                Span::styled(
                    "█".repeat(*count),
                    Style::default().fg(event_status_color(*status)),
                ),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(status_lines).block(panel("Events by status")),
        bottom[0],
    );

    let pending: Vec<Line> = pending_verifications(store)
        .into_iter()
        .map(user_line)
        .collect();
    frame.render_widget(
        Paragraph::new(pending).block(panel("Awaiting verification")),
        bottom[1],
    );
    render_notifications(frame, bottom[2], &store.notifications_by_user(&admin.id));
}

fn user_line(user: &User) -> Line<'static> {
    let style = role_style(user.role());
    Line::from(vec![
        Span::styled(format!("{} ", style.icon), Style::default().fg(style.color)),
        Span::styled(user.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  {}  {}", user.role().label(), user.email),
            Style::default().fg(Color::Gray),
        ),
    ])
}

fn verification_color(status: VerificationStatus) -> Color {
    match status {
        VerificationStatus::Pending => Color::Yellow,
        VerificationStatus::Verified => Color::Green,
        VerificationStatus::Rejected => Color::Red,
    }
}

fn render_users(frame: &mut Frame, area: Rect, store: &MockStore) {
    let header = Row::new(["Name", "Email", "Role", "Company", "Status", "Joined"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let rows = store.users().iter().map(|user| {
        let style = role_style(user.role());
        Row::new(vec![
            Cell::from(user.name.clone()),
            Cell::from(user.email.clone()),
            Cell::from(Span::styled(
                user.role().label(),
                Style::default().fg(style.color),
            )),
            Cell::from(user.company_name().unwrap_or("-").to_string()),
            Cell::from(Span::styled(
                user.status.as_str(),
                Style::default().fg(verification_color(user.status)),
            )),
            Cell::from(user.created_at.format("%Y-%m-%d").to_string()),
        ])
    });
    let widths = [
        Constraint::Length(20),
        Constraint::Min(24),
        Constraint::Length(10),
        Constraint::Length(24),
        Constraint::Length(9),
        Constraint::Length(10),
    ];
    frame.render_widget(
        Table::new(rows, widths)
            .header(header)
            .block(panel(&format!("Users ({})", store.users().len()))),
        area,
    );
}

fn render_verifications(
    frame: &mut Frame,
    area: Rect,
    store: &MockStore,
    admin: &User,
    state: &DashboardState,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let pending = pending_verifications(store);
    let items: Vec<ListItem> = pending.iter().map(|u| ListItem::new(user_line(u))).collect();
    let mut list_state = ListState::default();
    if !pending.is_empty() {
        list_state.select(Some(state.selected_pending.min(pending.len() - 1)));
    }
    frame.render_stateful_widget(
        List::new(items)
            .block(panel(&format!("Pending verifications ({})", pending.len())))
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("› "),
        cols[0],
        &mut list_state,
    );

    let notifications = store.notifications_by_user(&admin.id);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(4)])
        .split(cols[1]);
    let help = vec![
        Line::from(vec![
            Span::styled("↑/↓", Style::default().fg(Color::Cyan)),
            Span::raw(" select"),
        ]),
        Line::from(vec![
            Span::styled("a", Style::default().fg(Color::Green)),
            Span::raw(" approve   "),
            Span::styled("r", Style::default().fg(Color::Red)),
            Span::raw(" reject"),
        ]),
    ];
    frame.render_widget(Paragraph::new(help).block(panel("Actions")), rows[0]);
    render_notifications(frame, rows[1], &notifications);
}
