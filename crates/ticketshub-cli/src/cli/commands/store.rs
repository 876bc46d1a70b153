//! Store command handlers.

use anyhow::Result;
use ticketshub_core::MockStore;

pub fn check(store: &MockStore) -> Result<()> {
    let issues = store.validate();
    if issues.is_empty() {
        println!(
            "Store OK: {} users, {} events, {} connections, {} notifications",
            store.users().len(),
            store.events().len(),
            store.connections().len(),
            store.notifications().len()
        );
        return Ok(());
    }

    for issue in &issues {
        println!("- {issue}");
    }
    anyhow::bail!("{} store issue(s) found", issues.len())
}
