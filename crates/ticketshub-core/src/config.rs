//! Configuration management for TICKETSHUB.
//!
//! Loads configuration from ${TICKETSHUB_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Merges user config values into the default template.
///
/// This keeps template comments/sections present while preserving the
/// user's customized values.
fn merge_with_template(user_config: &str) -> Result<String> {
    use toml_edit::DocumentMut;

    let mut doc: DocumentMut = default_config_template()
        .parse()
        .context("Failed to parse default config template")?;
    let user_doc: DocumentMut = user_config.parse().context("Failed to parse user config")?;

    merge_items(doc.as_table_mut(), user_doc.as_table());

    Ok(doc.to_string())
}

/// Recursively merges items from source table into target table.
fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, value) in source {
        match value {
            Item::Value(v) => {
                target[key] = Item::Value(v.clone());
            }
            Item::Table(src_table) => {
                if let Some(Item::Table(target_table)) = target.get_mut(key) {
                    merge_items(target_table, src_table);
                } else {
                    target[key] = Item::Table(src_table.clone());
                }
            }
            Item::ArrayOfTables(src_arr) => {
                target[key] = Item::ArrayOfTables(src_arr.clone());
            }
            Item::None => {}
        }
    }
}

pub mod paths {
    //! Path resolution for TICKETSHUB configuration and data directories.
    //!
    //! TICKETSHUB_HOME resolution order:
    //! 1. TICKETSHUB_HOME environment variable (if set)
    //! 2. ~/.config/ticketshub (default)
    //! 3. ./.ticketshub when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the TICKETSHUB home directory.
    pub fn ticketshub_home() -> PathBuf {
        if let Ok(home) = std::env::var("TICKETSHUB_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".ticketshub"),
            |h| h.join(".config").join("ticketshub"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        ticketshub_home().join("config.toml")
    }

    /// Returns the path to the persisted session snapshot.
    pub fn session_path() -> PathBuf {
        ticketshub_home().join("session.json")
    }

    /// Returns the directory holding log files.
    pub fn logs_dir() -> PathBuf {
        ticketshub_home().join("logs")
    }
}

/// Timing of the simulated sign-up verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// Time spent in the "verifying" stage.
    pub verifying_delay_ms: u64,
    /// Time the "verified" confirmation stays up before auto sign-in.
    pub verified_delay_ms: u64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            verifying_delay_ms: 10_000,
            verified_delay_ms: 2_000,
        }
    }
}

impl VerificationConfig {
    pub fn verifying_delay(&self) -> Duration {
        Duration::from_millis(self.verifying_delay_ms)
    }

    pub fn verified_delay(&self) -> Duration {
        Duration::from_millis(self.verified_delay_ms)
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub tick_ms: u64,
    pub carousel_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            carousel_secs: 5,
        }
    }
}

impl UiConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(10))
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log filter directive (overridden by TICKETSHUB_LOG).
    pub log_level: String,

    /// Whether the signed-in user survives restarts.
    pub persist_session: bool,

    /// Last email that signed in successfully.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_email: Option<String>,

    /// Sign-up verification timing.
    pub verification: VerificationConfig,

    /// Terminal UI settings.
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
            persist_session: true,
            last_email: None,
            verification: VerificationConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    ///
    /// # Errors
    /// Returns an error if the file exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Saves only the `last_email` field to the config file.
    ///
    /// # Errors
    /// Returns an error if the config cannot be read, merged or written.
    pub fn save_last_email(email: &str) -> Result<()> {
        Self::save_last_email_to(&paths::config_path(), email)
    }

    /// Saves only the `last_email` field to a specific config file path.
    ///
    /// Creates the file with default template if it doesn't exist.
    /// If file exists, merges user values into the latest template.
    ///
    /// # Errors
    /// Returns an error if the config cannot be read, merged or written.
    pub fn save_last_email_to(path: &Path, email: &str) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            let user_config = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            merge_with_template(&user_config)?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        doc["last_email"] = value(email);

        Self::write_config(path, &doc.to_string())
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.log_level, "info");
        assert!(config.persist_session);
        assert_eq!(config.verification.verifying_delay(), Duration::from_secs(10));
        assert_eq!(config.verification.verified_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            "persist_session = false\n[verification]\nverifying_delay_ms = 50\n",
        )
        .unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert!(!config.persist_session);
        assert_eq!(config.verification.verifying_delay_ms, 50);
        assert_eq!(config.verification.verified_delay_ms, 2_000);
        assert_eq!(config.ui.tick_ms, 100);
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let parsed: Config = toml::from_str(default_config_template()).unwrap();
        let defaults = Config::default();
        assert_eq!(parsed.log_level, defaults.log_level);
        assert_eq!(
            parsed.verification.verifying_delay_ms,
            defaults.verification.verifying_delay_ms
        );
        assert_eq!(parsed.ui.carousel_secs, defaults.ui.carousel_secs);
        assert_eq!(parsed.last_email, None);
    }

    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("verifying_delay_ms = 10000"));
        assert!(contents.contains("# last_email ="));
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "").unwrap();

        assert!(Config::init(&config_path).is_err());
    }

    #[test]
    fn test_save_last_email_preserves_user_values() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "log_level = \"debug\"\n").unwrap();

        Config::save_last_email_to(&config_path, "vendor@management.ticketshub.com").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(
            config.last_email.as_deref(),
            Some("vendor@management.ticketshub.com")
        );
        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("[verification]"));
    }

    #[test]
    fn test_tick_interval_has_floor() {
        let ui = UiConfig {
            tick_ms: 0,
            carousel_secs: 5,
        };
        assert_eq!(ui.tick_interval(), Duration::from_millis(10));
    }
}
