//! Runtime execution modes.
//!
//! - `tui`: Full-screen interactive terminal UI (optional feature)

#[cfg(feature = "tui")]
pub use ticketshub_tui::run_app;

#[cfg(not(feature = "tui"))]
#[allow(clippy::unused_async)]
pub async fn run_app(
    _config: ticketshub_core::config::Config,
    _session: ticketshub_core::SessionManager,
) -> anyhow::Result<()> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}
