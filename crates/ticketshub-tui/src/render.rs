//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::dashboard::render_dashboard;
use crate::header::{HEADER_HEIGHT, render_header};
use crate::landing::render_landing;
use crate::overlays::OverlayExt;
use crate::state::{AppState, ToastKind, TuiState};

/// Height of the key hint line at the bottom.
const FOOTER_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let tui = &app.tui;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    render_header(frame, chunks[0], tui);

    let body = Rect::new(
        chunks[1].x + 1,
        chunks[1].y,
        chunks[1].width.saturating_sub(2),
        chunks[1].height,
    );
    let nav = tui.current_nav();
    if tui.session.is_authenticated() {
        render_dashboard(frame, body, tui, nav);
    } else {
        render_landing(frame, body, &tui.landing, nav);
    }

    render_footer(frame, chunks[2], app);
    render_toast(frame, chunks[1], tui);

    app.overlay.render(frame, chunks[1], tui);
}

fn hint(key: &str, action: &str) -> [Span<'static>; 2] {
    [
        Span::styled(format!(" {key}"), Style::default().fg(Color::Cyan)),
        Span::styled(format!(" {action} "), Style::default().fg(Color::DarkGray)),
    ]
}

fn render_footer(frame: &mut Frame, area: Rect, app: &AppState) {
    let tui = &app.tui;
    let mut spans = Vec::new();
    if app.overlay.is_none() {
        spans.extend(hint("←/→", "navigate"));
        spans.extend(hint("1-4", "jump"));
        if tui.session.is_authenticated() {
            spans.extend(hint("n", "notifications"));
            spans.extend(hint("u", "account"));
            if tui.current_nav() == crate::header::NavItem::Verifications {
                spans.extend(hint("a/r", "approve/reject"));
            }
        } else {
            spans.extend(hint("l", "sign in"));
            spans.extend(hint("s", "sign up"));
        }
        spans.extend(hint("q", "quit"));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draws the active toast in the top-right corner of `area`.
fn render_toast(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let Some(toast) = &tui.toast else {
        return;
    };

    let (icon, color) = match toast.kind {
        ToastKind::Success => ("✓", Color::Green),
        ToastKind::Info => ("ℹ", Color::Cyan),
        ToastKind::Error => ("✗", Color::Red),
    };
    let text = format!("{icon} {}", toast.message);
    let width = (text.width() as u16 + 4).min(area.width);
    let popup = Rect::new(area.x + area.width - width, area.y, width, 3.min(area.height));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        ),
        popup,
    );
}
