//! Configuration loading and management.
//!
//! This module is split into:
//! - [`defaults`]: serde default functions
//! - [`validation`]: startup checks that collect every problem at once

mod defaults;
pub mod validation;

use defaults::{
    default_chantypes, default_command_prefix, default_cycle_rejoin_delay_ms,
    default_max_alias_depth, default_nick, default_restrict_server_port,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
pub use validation::{ValidationError, validate};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {}", format_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Client configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Identity and command-line behavior.
    #[serde(default)]
    pub client: ClientConfig,
    /// Connection restrictions for `/server`.
    #[serde(default)]
    pub connection: ConnectionConfig,
    /// Settings persistence.
    #[serde(default)]
    pub settings: SettingsConfig,
    /// User aliases, merged over the built-in defaults.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        validate(&config).map_err(ConfigError::Invalid)?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Nickname used for new connections.
    #[serde(default = "default_nick")]
    pub nick: String,
    /// Character that marks a line as a command.
    #[serde(default = "default_command_prefix")]
    pub command_prefix: char,
    /// Maximum alias rewrites for one input line.
    #[serde(default = "default_max_alias_depth")]
    pub max_alias_depth: usize,
    /// Pause between part and re-join for `/cycle`.
    #[serde(default = "default_cycle_rejoin_delay_ms")]
    pub cycle_rejoin_delay_ms: u64,
    /// Channel type characters.
    #[serde(default = "default_chantypes")]
    pub chantypes: String,
}

impl ClientConfig {
    pub fn cycle_rejoin_delay(&self) -> Duration {
        Duration::from_millis(self.cycle_rejoin_delay_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            nick: default_nick(),
            command_prefix: default_command_prefix(),
            max_alias_depth: default_max_alias_depth(),
            cycle_rejoin_delay_ms: default_cycle_rejoin_delay_ms(),
            chantypes: default_chantypes(),
        }
    }
}

/// When `restrict_server` is set, `/server` may not connect elsewhere.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionConfig {
    pub restrict_server: Option<String>,
    #[serde(default = "default_restrict_server_port")]
    pub restrict_server_port: u16,
    #[serde(default)]
    pub restrict_server_ssl: bool,
}

impl ConnectionConfig {
    /// The only allowed target as `host:[+]port`, when restricted.
    pub fn restricted_target(&self) -> Option<String> {
        let host = self.restrict_server.as_deref()?;
        let tls = if self.restrict_server_ssl { "+" } else { "" };
        Some(format!("{host}:{tls}{}", self.restrict_server_port))
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            restrict_server: None,
            restrict_server_port: default_restrict_server_port(),
            restrict_server_ssl: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsConfig {
    /// File written by `/save`. Settings stay in memory when unset.
    pub path: Option<PathBuf>,
}
