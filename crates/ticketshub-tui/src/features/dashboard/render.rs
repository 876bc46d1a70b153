use ratatui::Frame;
use ratatui::layout::Rect;
use ticketshub_types::Role;

use super::{admin, organizer, partner};
use crate::features::header::NavItem;
use crate::state::TuiState;

/// Renders the signed-in view for `nav`, picked by the user's role.
pub fn render_dashboard(frame: &mut Frame, area: Rect, tui: &TuiState, nav: NavItem) {
    let Some(user) = tui.session.current_user() else {
        return;
    };
    let store = tui.store.as_ref();

    match user.role() {
        Role::Admin => admin::render(frame, area, store, user, &tui.dashboard, nav),
        Role::Organizer => organizer::render(frame, area, store, user, nav),
        Role::Vendor | Role::Speaker | Role::Sponsor => {
            partner::render(frame, area, store, user, nav);
        }
    }
}
