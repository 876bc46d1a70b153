use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use ticketshub_types::User;

use super::render_utils::{InputHint, render_hints, render_overlay_container};
use super::{OverlayRequest, OverlayUpdate};
use crate::common::role_style;
use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::state::TuiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Dashboard,
    Notifications,
    SignOut,
}

impl MenuAction {
    fn all() -> &'static [MenuAction] {
        &[
            MenuAction::Dashboard,
            MenuAction::Notifications,
            MenuAction::SignOut,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            MenuAction::Dashboard => "Dashboard",
            MenuAction::Notifications => "Notifications",
            MenuAction::SignOut => "Sign out",
        }
    }
}

const MENU_WIDTH: u16 = 42;
const MENU_HEIGHT: u16 = 12;

#[derive(Debug, Clone, Default)]
pub struct UserMenuState {
    pub selected: usize,
}

impl UserMenuState {
    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        let Some(user) = tui.session.current_user() else {
            return;
        };
        render_user_menu(frame, self, area, user);
    }

    pub fn handle_key(&mut self, _tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc | KeyCode::Char('u') => OverlayUpdate::close(),
            KeyCode::Char('c') if ctrl => OverlayUpdate::close(),
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                OverlayUpdate::stay()
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(MenuAction::all().len() - 1);
                OverlayUpdate::stay()
            }
            KeyCode::Enter => match MenuAction::all().get(self.selected) {
                Some(MenuAction::Dashboard) => {
                    OverlayUpdate::close().with_mutations(vec![StateMutation::ResetNav])
                }
                Some(MenuAction::Notifications) => {
                    OverlayUpdate::open(OverlayRequest::Notifications)
                }
                Some(MenuAction::SignOut) => {
                    OverlayUpdate::close().with_ui_effects(vec![UiEffect::Logout])
                }
                None => OverlayUpdate::close(),
            },
            _ => OverlayUpdate::stay(),
        }
    }
}

/// Anchors the menu below the header on the right edge.
fn menu_area(area: Rect) -> Rect {
    let width = MENU_WIDTH.min(area.width);
    let height = MENU_HEIGHT.min(area.height);
    Rect::new(area.x + area.width - width, area.y, width, height)
}

fn render_user_menu(frame: &mut Frame, menu: &UserMenuState, area: Rect, user: &User) {
    let popup = menu_area(area);
    let style = role_style(user.role());
    render_overlay_container(frame, popup, "Account", style.color);

    let inner = Rect::new(
        popup.x + 2,
        popup.y + 1,
        popup.width.saturating_sub(4),
        popup.height.saturating_sub(2),
    );

    let mut details = vec![
        Line::from(Span::styled(
            format!("{} {}", style.icon, user.name),
            Style::default().fg(style.color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(user.email.clone(), Style::default().fg(Color::Gray))),
    ];
    let mut role_line = user.role().label().to_string();
    if let Some(company) = user.company_name() {
        role_line.push_str(" · ");
        role_line.push_str(company);
    }
    details.push(Line::from(Span::styled(
        role_line,
        Style::default().fg(Color::DarkGray),
    )));
    let details_height = details.len() as u16 + 1;
    frame.render_widget(
        Paragraph::new(details),
        Rect::new(inner.x, inner.y, inner.width, details_height),
    );

    let items: Vec<ListItem> = MenuAction::all()
        .iter()
        .map(|action| {
            let item_style = if *action == MenuAction::SignOut {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(action.label(), item_style))
        })
        .collect();
    let mut state = ListState::default();
    state.select(Some(menu.selected));
    let list_area = Rect::new(
        inner.x,
        inner.y + details_height,
        inner.width,
        inner.height.saturating_sub(details_height + 1),
    );
    frame.render_stateful_widget(
        List::new(items)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("› "),
        list_area,
        &mut state,
    );

    render_hints(
        frame,
        inner,
        &[InputHint::new("Enter", "select"), InputHint::new("Esc", "close")],
        style.color,
    );
}
