//! Sign-in command handlers.

use anyhow::{Context, Result};
use ticketshub_core::{SessionManager, demo};
use ticketshub_types::{Role, User};

pub async fn login(
    mut session: SessionManager,
    email: Option<String>,
    password: Option<String>,
    demo_role: Option<Role>,
) -> Result<()> {
    let (email, password) = match (demo_role, email, password) {
        (Some(role), _, _) => {
            let credential = demo::credential(role);
            (credential.email.to_string(), credential.password.to_string())
        }
        (None, Some(email), Some(password)) => (email, password),
        _ => anyhow::bail!("Please specify --email and --password, or --demo <ROLE>"),
    };

    let user = session.login(email.trim(), &password).await?;
    println!("Signed in as {}", describe(user));
    Ok(())
}

pub fn logout(mut session: SessionManager) -> Result<()> {
    let was_signed_in = session.is_authenticated();
    session.logout().context("sign out")?;
    if was_signed_in {
        println!("Signed out.");
    } else {
        println!("Not signed in.");
    }
    Ok(())
}

pub fn whoami(session: &SessionManager) {
    match session.current_user() {
        Some(user) => {
            println!("{}", describe(user));
            if let Some(at) = user.last_login {
                println!("Last login: {}", at.format("%Y-%m-%d %H:%M UTC"));
            }
        }
        None => println!("Not signed in."),
    }
}

fn describe(user: &User) -> String {
    format!("{} <{}> ({})", user.name, user.email, user.role().label())
}
