//! Event command handlers.

use anyhow::Result;
use ticketshub_core::MockStore;
use ticketshub_types::{Event, PartnerType};

use super::table;

pub fn list(store: &MockStore, organizer: Option<&str>) -> Result<()> {
    let events: Vec<&Event> = match organizer {
        Some(id) => {
            store.require_user(id)?;
            store.events_by_organizer(id)
        }
        None => store.events().iter().collect(),
    };
    if events.is_empty() {
        println!("No events found.");
        return Ok(());
    }

    let mut out = table(["ID", "Title", "Date", "Location", "Status", "Budget", "Attendees"]);
    for event in events {
        out.add_row([
            event.id.clone(),
            event.title.clone(),
            event.date.format("%Y-%m-%d").to_string(),
            event.location.clone(),
            event.status.to_string(),
            format!("${}", event.budget),
            event.expected_attendees.to_string(),
        ]);
    }
    println!("{out}");
    Ok(())
}

pub fn show(store: &MockStore, id: &str) -> Result<()> {
    let event = store.require_event(id)?;
    let organizer = store
        .user_by_id(&event.organizer_id)
        .map_or(event.organizer_id.as_str(), |u| u.name.as_str());

    println!("{} ({})", event.title, event.id);
    println!("{}", event.description);
    println!();
    println!("Category:  {}", event.category);
    println!(
        "When:      {} {}",
        event.date.format("%Y-%m-%d"),
        event.time.format("%H:%M")
    );
    println!("Where:     {}, {}", event.venue, event.location);
    println!("Organizer: {organizer}");
    println!("Status:    {}", event.status);
    println!("Budget:    ${}", event.budget);
    println!("Attendees: {}", event.expected_attendees);

    let mut out = table(["Partner", "Looking for", "Confirmed"]);
    for partner in PartnerType::all() {
        let confirmed: Vec<&str> = event
            .partners
            .for_partner(*partner)
            .iter()
            .map(|id| store.user_by_id(id).map_or(id.as_str(), |u| u.name.as_str()))
            .collect();
        out.add_row([
            partner.to_string(),
            event.requirements.for_partner(*partner).join(", "),
            confirmed.join(", "),
        ]);
    }
    println!();
    println!("{out}");
    Ok(())
}
