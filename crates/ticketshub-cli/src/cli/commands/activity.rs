//! Connection and notification command handlers.

use anyhow::Result;
use ticketshub_core::MockStore;
use ticketshub_types::Notification;

use super::table;

pub fn connections(store: &MockStore, user_id: &str) -> Result<()> {
    store.require_user(user_id)?;
    let connections = store.connections_by_user(user_id);
    if connections.is_empty() {
        println!("No connections found.");
        return Ok(());
    }

    let name = |id: &str| store.user_by_id(id).map_or_else(|| id.to_string(), |u| u.name.clone());
    let mut out = table(["ID", "Event", "Organizer", "Partner", "Type", "Status"]);
    for connection in connections {
        let event = store
            .event_by_id(&connection.event_id)
            .map_or_else(|| connection.event_id.clone(), |e| e.title.clone());
        out.add_row([
            connection.id.clone(),
            event,
            name(&connection.organizer_id),
            name(&connection.partner_id),
            connection.partner_type.to_string(),
            connection.status.to_string(),
        ]);
    }
    println!("{out}");
    Ok(())
}

pub fn notifications(store: &MockStore, user_id: &str, unread_only: bool) -> Result<()> {
    store.require_user(user_id)?;
    let mut notifications: Vec<&Notification> = store
        .notifications_by_user(user_id)
        .into_iter()
        .filter(|n| !unread_only || !n.read)
        .collect();
    notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    if notifications.is_empty() {
        println!("No notifications.");
        return Ok(());
    }

    let mut out = table(["", "Kind", "Title", "Message", "Received"]);
    for n in notifications {
        out.add_row([
            if n.read { "" } else { "●" }.to_string(),
            n.kind.to_string(),
            n.title.clone(),
            n.message.clone(),
            n.created_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }
    println!("{out}");
    println!("{} unread", store.unread_count(user_id));
    Ok(())
}
