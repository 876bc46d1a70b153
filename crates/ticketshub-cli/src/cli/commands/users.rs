//! User command handlers.

use anyhow::{Context, Result};
use ticketshub_core::MockStore;
use ticketshub_types::{Role, User};

use super::table;

pub fn list(store: &MockStore, role: Option<Role>) {
    let users: Vec<&User> = match role {
        Some(role) => store.users_by_role(role),
        None => store.users().iter().collect(),
    };
    if users.is_empty() {
        println!("No users found.");
        return;
    }

    let mut out = table(["ID", "Name", "Email", "Role", "Status", "Company"]);
    for user in users {
        out.add_row([
            user.id.as_str(),
            user.name.as_str(),
            user.email.as_str(),
            user.role().label(),
            user.status.as_str(),
            user.company_name().unwrap_or("-"),
        ]);
    }
    println!("{out}");
}

/// Prints the user as JSON. The password is never serialized.
pub fn show(store: &MockStore, id: &str) -> Result<()> {
    let user = store.require_user(id)?;
    let json = serde_json::to_string_pretty(user).context("serialize user")?;
    println!("{json}");
    Ok(())
}
