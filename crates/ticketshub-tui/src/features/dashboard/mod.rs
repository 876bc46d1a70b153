//! Role dashboards shown after sign-in.
//!
//! Admins get platform totals and the verification queue; organizers get
//! their events and connections; vendors, speakers and sponsors get their
//! connections and matching opportunities. Every dashboard carries the
//! user's notifications.

mod admin;
mod organizer;
mod partner;
mod render;
mod widgets;

use crossterm::event::{KeyCode, KeyEvent};
pub use render::render_dashboard;
use ticketshub_core::MockStore;
use ticketshub_core::dashboard::{ModerationAction, pending_verifications};

use crate::effects::UiEffect;
use crate::features::header::NavItem;

#[derive(Debug, Default, Clone)]
pub struct DashboardState {
    /// Selected row in the verification queue.
    pub selected_pending: usize,
}

impl DashboardState {
    /// Handles keys for the current dashboard view.
    ///
    /// Returns `None` when the key is not meaningful for this view.
    pub fn handle_key(
        &mut self,
        store: &MockStore,
        nav: NavItem,
        key: KeyEvent,
    ) -> Option<Vec<UiEffect>> {
        if nav != NavItem::Verifications {
            return None;
        }

        let pending = pending_verifications(store);
        if pending.is_empty() {
            return None;
        }
        self.selected_pending = self.selected_pending.min(pending.len() - 1);

        match key.code {
            KeyCode::Up => {
                self.selected_pending = self.selected_pending.saturating_sub(1);
                Some(vec![])
            }
            KeyCode::Down => {
                self.selected_pending = (self.selected_pending + 1).min(pending.len() - 1);
                Some(vec![])
            }
            KeyCode::Char(c @ ('a' | 'r')) => {
                let action = if c == 'a' {
                    ModerationAction::Approve
                } else {
                    ModerationAction::Reject
                };
                let user_id = pending[self.selected_pending].id.clone();
                Some(vec![UiEffect::Moderate { user_id, action }])
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_approve_targets_selected_pending_user() {
        let store = MockStore::seeded();
        let mut state = DashboardState::default();

        state.handle_key(&store, NavItem::Verifications, key(KeyCode::Down));
        let effects = state
            .handle_key(&store, NavItem::Verifications, key(KeyCode::Char('a')))
            .unwrap();

        match effects.as_slice() {
            [UiEffect::Moderate { user_id, action }] => {
                assert_eq!(user_id, "vnd-3");
                assert_eq!(*action, ModerationAction::Approve);
            }
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn test_selection_is_clamped() {
        let store = MockStore::seeded();
        let mut state = DashboardState::default();
        for _ in 0..10 {
            state.handle_key(&store, NavItem::Verifications, key(KeyCode::Down));
        }
        assert_eq!(state.selected_pending, 2);
    }

    #[test]
    fn test_other_views_ignore_keys() {
        let store = MockStore::seeded();
        let mut state = DashboardState::default();
        assert!(
            state
                .handle_key(&store, NavItem::Dashboard, key(KeyCode::Char('a')))
                .is_none()
        );
    }
}
