//! Panels shared by the dashboards.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ticketshub_core::MockStore;
use ticketshub_types::{Connection, ConnectionStatus, Event, EventStatus, Notification};

use crate::common::{format_money, truncate_with_ellipsis};

pub fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().add_modifier(Modifier::BOLD),
        ))
}

/// A row of labelled numbers.
pub fn render_stats(frame: &mut Frame, area: Rect, stats: &[(&str, String, Color)]) {
    if stats.is_empty() {
        return;
    }
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, stats.len() as u32); stats.len()])
        .split(area);

    for ((label, value, color), col) in stats.iter().zip(cols.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                value.clone(),
                Style::default().fg(*color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*label, Style::default().fg(Color::Gray))),
        ];
        frame.render_widget(Paragraph::new(lines).block(panel("")), *col);
    }
}

pub fn event_status_color(status: EventStatus) -> Color {
    match status {
        EventStatus::Draft => Color::DarkGray,
        EventStatus::Pending => Color::Yellow,
        EventStatus::Approved => Color::Blue,
        EventStatus::Published => Color::Green,
        EventStatus::Completed => Color::Gray,
    }
}

pub fn connection_status_color(status: ConnectionStatus) -> Color {
    match status {
        ConnectionStatus::Pending => Color::Yellow,
        ConnectionStatus::Accepted => Color::Green,
        ConnectionStatus::Rejected => Color::Red,
        ConnectionStatus::Completed => Color::Gray,
    }
}

pub fn render_notifications(frame: &mut Frame, area: Rect, notifications: &[&Notification]) {
    let width = area.width.saturating_sub(6) as usize;
    let mut lines = Vec::new();
    for notification in notifications {
        let marker = if notification.read {
            Span::styled("  ", Style::default())
        } else {
            Span::styled("● ", Style::default().fg(Color::Cyan))
        };
        let title_style = if notification.kind.is_negative() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(vec![
            marker,
            Span::styled(truncate_with_ellipsis(&notification.title, width), title_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", truncate_with_ellipsis(&notification.message, width)),
            Style::default().fg(Color::Gray),
        )));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No notifications",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let unread = notifications.iter().filter(|n| !n.read).count();
    frame.render_widget(
        Paragraph::new(lines).block(panel(&format!("Notifications ({unread} unread)"))),
        area,
    );
}

pub fn render_events_table(frame: &mut Frame, area: Rect, title: &str, events: &[&Event]) {
    let header = Row::new(["Title", "Date", "Location", "Status", "Attendees", "Budget"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let rows = events.iter().map(|event| {
        Row::new(vec![
            Cell::from(event.title.clone()),
            Cell::from(event.date.format("%b %d, %Y").to_string()),
            Cell::from(event.location.clone()),
            Cell::from(Span::styled(
                event.status.as_str(),
                Style::default().fg(event_status_color(event.status)),
            )),
            Cell::from(event.expected_attendees.to_string()),
            Cell::from(format_money(event.budget)),
        ])
    });
    let widths = [
        Constraint::Min(20),
        Constraint::Length(13),
        Constraint::Length(18),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
    ];
    frame.render_widget(
        Table::new(rows, widths).header(header).block(panel(title)),
        area,
    );
}

/// Connections with the event title and the other party's name resolved.
pub fn render_connections_table(
    frame: &mut Frame,
    area: Rect,
    store: &MockStore,
    viewer_id: &str,
    connections: &[&Connection],
) {
    let header = Row::new(["Event", "With", "Type", "Status", "Message"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let rows = connections.iter().map(|connection| {
        let event = store
            .event_by_id(&connection.event_id)
            .map_or(connection.event_id.as_str(), |e| e.title.as_str());
        let other_id = if connection.organizer_id == viewer_id {
            &connection.partner_id
        } else {
            &connection.organizer_id
        };
        let other = store.user_by_id(other_id).map_or(other_id.as_str(), |u| {
            u.company_name().unwrap_or(u.name.as_str())
        });
        Row::new(vec![
            Cell::from(event.to_string()),
            Cell::from(other.to_string()),
            Cell::from(connection.partner_type.to_string()),
            Cell::from(Span::styled(
                connection.status.as_str(),
                Style::default().fg(connection_status_color(connection.status)),
            )),
            Cell::from(connection.message.clone()),
        ])
    });
    let widths = [
        Constraint::Length(28),
        Constraint::Length(24),
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Min(10),
    ];
    frame.render_widget(
        Table::new(rows, widths)
            .header(header)
            .block(panel(&format!("Connections ({})", connections.len()))),
        area,
    );
}
