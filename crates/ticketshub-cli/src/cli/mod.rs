//! CLI entry and dispatch.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use ticketshub_core::config::Config;
use ticketshub_core::session::{FileSessionStorage, MemorySessionStorage};
use ticketshub_core::{MockStore, SessionManager, SessionStorage, logging};
use ticketshub_types::Role;

mod commands;

#[derive(Parser)]
#[command(name = "ticketshub")]
#[command(version)]
#[command(about = "TICKETSHUB Management console")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Keep the session in memory only (nothing is written to session.json)
    #[arg(long = "no-persist", global = true)]
    no_persist: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Sign in with email and password, or as a demo account
    Login {
        /// Account email
        #[arg(long, requires = "password", conflicts_with = "demo")]
        email: Option<String>,

        /// Account password
        #[arg(long, env = "TICKETSHUB_PASSWORD", hide_env_values = true)]
        password: Option<String>,

        /// Sign in to the demo account of a role (admin, organizer, vendor, speaker, sponsor)
        #[arg(long, value_name = "ROLE")]
        demo: Option<Role>,
    },
    /// Sign out and clear the saved session
    Logout,
    /// Show the signed-in user
    Whoami,

    /// Browse users
    Users {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Browse events
    Events {
        #[command(subcommand)]
        command: EventCommands,
    },
    /// List the connections a user is part of
    Connections {
        #[arg(value_name = "USER_ID")]
        user_id: String,
    },
    /// List a user's notifications, newest first
    Notifications {
        #[arg(value_name = "USER_ID")]
        user_id: String,

        /// Only unread notifications
        #[arg(long)]
        unread: bool,
    },
    /// Inspect the data store
    Store {
        #[command(subcommand)]
        command: StoreCommands,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum UserCommands {
    /// Lists users
    List {
        /// Only users with this role
        #[arg(long)]
        role: Option<Role>,
    },
    /// Shows one user (password omitted)
    Show {
        #[arg(value_name = "USER_ID")]
        id: String,
    },
}

#[derive(clap::Subcommand)]
enum EventCommands {
    /// Lists events
    List {
        /// Only events run by this organizer
        #[arg(long, value_name = "USER_ID")]
        organizer: Option<String>,
    },
    /// Shows one event with its requirements and partners
    Show {
        #[arg(value_name = "EVENT_ID")]
        id: String,
    },
}

#[derive(clap::Subcommand)]
enum StoreCommands {
    /// Validates referential and uniqueness invariants
    Check,
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;

    // Logging must not keep the CLI from working.
    let _log_guard = match logging::init(&config) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        }
    };

    let Cli {
        command,
        no_persist,
    } = cli;

    let store = MockStore::seeded();
    let session = || open_session(&config, Arc::clone(&store), no_persist);

    // default to the interactive app
    let Some(command) = command else {
        let session = session();
        return commands::app::run(config, session).await;
    };

    match command {
        Commands::Login {
            email,
            password,
            demo,
        } => commands::auth::login(session(), email, password, demo).await,
        Commands::Logout => commands::auth::logout(session()),
        Commands::Whoami => {
            commands::auth::whoami(&session());
            Ok(())
        }

        Commands::Users { command } => match command {
            UserCommands::List { role } => {
                commands::users::list(&store, role);
                Ok(())
            }
            UserCommands::Show { id } => commands::users::show(&store, &id),
        },

        Commands::Events { command } => match command {
            EventCommands::List { organizer } => {
                commands::events::list(&store, organizer.as_deref())
            }
            EventCommands::Show { id } => commands::events::show(&store, &id),
        },

        Commands::Connections { user_id } => commands::activity::connections(&store, &user_id),
        Commands::Notifications { user_id, unread } => {
            commands::activity::notifications(&store, &user_id, unread)
        }

        Commands::Store { command } => match command {
            StoreCommands::Check => commands::store::check(&store),
        },

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}

/// Restores the saved session unless persistence is turned off.
fn open_session(config: &Config, store: Arc<MockStore>, no_persist: bool) -> SessionManager {
    if no_persist || !config.persist_session {
        let storage: Box<dyn SessionStorage> = Box::new(MemorySessionStorage::default());
        return SessionManager::new(store, storage);
    }
    let storage = FileSessionStorage::default_location();
    SessionManager::restore(store, Box::new(storage))
}
