use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use super::OverlayUpdate;
use super::render_utils::{InputHint, OverlayConfig, render_overlay};
use crate::common::truncate_with_ellipsis;
use crate::state::TuiState;

#[derive(Debug, Clone, Default)]
pub struct NotificationsState {
    pub selected: usize,
}

impl NotificationsState {
    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        render_notifications_overlay(frame, self, area, tui);
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let count = tui
            .session
            .current_user()
            .map_or(0, |u| tui.store.notifications_by_user(&u.id).len());

        match key.code {
            KeyCode::Esc | KeyCode::Char('n') => OverlayUpdate::close(),
            KeyCode::Char('c') if ctrl => OverlayUpdate::close(),
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                OverlayUpdate::stay()
            }
            KeyCode::Down => {
                if self.selected + 1 < count {
                    self.selected += 1;
                }
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }
}

fn render_notifications_overlay(
    frame: &mut Frame,
    state: &NotificationsState,
    area: Rect,
    tui: &TuiState,
) {
    let notifications = tui
        .session
        .current_user()
        .map(|u| tui.store.notifications_by_user(&u.id))
        .unwrap_or_default();
    let unread = notifications.iter().filter(|n| !n.read).count();
    let title = format!("Notifications · {unread} unread");

    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title: &title,
            border_color: Color::Cyan,
            width: 72,
            height: 22,
            hints: &[
                InputHint::new("↑/↓", "scroll"),
                InputHint::new("Esc", "close"),
            ],
        },
    );

    let width = layout.body.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = notifications
        .iter()
        .map(|n| {
            let marker = if n.read {
                Span::raw("  ")
            } else {
                Span::styled("● ", Style::default().fg(Color::Cyan))
            };
            let title_style = if n.kind.is_negative() {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            ListItem::new(vec![
                Line::from(vec![
                    marker,
                    Span::styled(truncate_with_ellipsis(&n.title, width), title_style),
                ]),
                Line::from(Span::styled(
                    format!("  {}", truncate_with_ellipsis(&n.message, width)),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::styled(
                    format!("  {}", n.created_at.format("%b %d, %H:%M")),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    if items.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "You're all caught up",
                Style::default().fg(Color::DarkGray),
            )),
            layout.body,
        );
        return;
    }

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected.min(items.len() - 1)));
    frame.render_stateful_widget(
        List::new(items)
            .highlight_style(Style::default().bg(Color::Rgb(40, 40, 48)))
            .highlight_symbol("› "),
        layout.body,
        &mut list_state,
    );
}
