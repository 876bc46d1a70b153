use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::nav_items;
use crate::common::role_style;
use crate::state::TuiState;

pub const HEADER_HEIGHT: u16 = 3;

const BRAND: &str = "TICKETSHUB Management";

pub fn render_header(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let right_width = if tui.session.is_authenticated() { 40 } else { 28 };
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BRAND.len() as u16 + 4),
            Constraint::Min(10),
            Constraint::Length(right_width),
        ])
        .split(inner);

    let brand = Line::from(vec![
        Span::styled("◆ ", Style::default().fg(Color::Cyan)),
        Span::styled(BRAND, Style::default().add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(Paragraph::new(brand), cols[0]);

    frame.render_widget(Paragraph::new(nav_line(tui)), cols[1]);
    frame.render_widget(
        Paragraph::new(account_line(tui)).alignment(Alignment::Right),
        cols[2],
    );
}

fn nav_line(tui: &TuiState) -> Line<'static> {
    let accent = tui.role().map_or(Color::Cyan, |r| role_style(r).color);
    let mut spans = Vec::new();
    for (idx, item) in nav_items(tui.role()).iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        let selected = idx == tui.nav_index;
        let style = if selected {
            Style::default()
                .fg(accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("{}", idx + 1), Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(format!(" {}", item.label()), style));
    }
    Line::from(spans)
}

fn account_line(tui: &TuiState) -> Line<'static> {
    let Some(user) = tui.session.current_user() else {
        return Line::from(vec![
            Span::styled("[l]", Style::default().fg(Color::Cyan)),
            Span::raw(" Sign in  "),
            Span::styled("[s]", Style::default().fg(Color::Green)),
            Span::raw(" Sign up"),
        ]);
    };

    let style = role_style(user.role());
    let unread = tui.unread_count();
    let badge = if unread > 0 {
        Span::styled(
            format!("[n] ✉ {unread}  "),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("[n] ✉  ", Style::default().fg(Color::DarkGray))
    };

    Line::from(vec![
        badge,
        Span::raw(" "),
        Span::styled("[u] ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} {}", style.icon, user.initials()),
            Style::default().fg(style.color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", user.role().label()),
            Style::default().fg(Color::Gray),
        ),
    ])
}
