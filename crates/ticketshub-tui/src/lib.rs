//! Full-screen TUI for TICKETSHUB Management.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
pub use features::{auth, dashboard, header, landing};
pub use runtime::TuiRuntime;
use ticketshub_core::SessionManager;
use ticketshub_core::config::Config;

/// Runs the full-screen application until the user quits.
///
/// # Errors
/// Returns an error if stderr is not a terminal or the terminal fails.
#[allow(clippy::unused_async)]
pub async fn run_app(config: Config, session: SessionManager) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The interactive app requires a terminal.\n\
             Use the subcommands (e.g. `ticketshub users list`) for non-interactive access."
        );
    }

    if let Some(user) = session.current_user() {
        tracing::info!(user_id = %user.id, "resuming saved session");
    }

    let mut runtime = TuiRuntime::new(config, session)?;
    runtime.run()?;
    drop(runtime);

    // Terminal is restored once the runtime is dropped.
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
