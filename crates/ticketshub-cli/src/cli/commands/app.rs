//! Interactive app command handler.

use anyhow::{Context, Result};
use ticketshub_core::SessionManager;
use ticketshub_core::config::Config;

use crate::modes;

pub async fn run(config: Config, session: SessionManager) -> Result<()> {
    modes::run_app(config, session)
        .await
        .context("interactive app failed")
}
