//! Client settings store.
//!
//! Values typed at the `/set` prompt are parsed into [`SettingValue`]s and
//! kept in memory until `/save` writes them out as TOML.

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl SettingValue {
    /// Parse user input: `true`/`false`, a canonical integer, or text.
    ///
    /// `"007"` and `"+5"` stay text because they would not print back the
    /// same way as integers.
    pub fn parse(input: &str) -> Self {
        match input {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => match input.parse::<i64>() {
                Ok(n) if n.to_string() == input => Self::Int(n),
                _ => Self::Text(input.to_string()),
            },
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Settings accessor handed to command handlers.
pub trait SettingsStore: Send {
    fn get(&self, name: &str) -> Option<SettingValue>;

    fn set(&mut self, name: &str, value: SettingValue);

    /// Persist the current values.
    fn save(&self) -> Result<(), SettingsError>;
}

/// TOML-backed settings, optionally bound to a file.
#[derive(Debug, Clone, Default)]
pub struct TomlSettings {
    values: BTreeMap<String, SettingValue>,
    path: Option<PathBuf>,
}

impl TomlSettings {
    /// Settings that live only in memory; [`save`](SettingsStore::save)
    /// fails with [`SettingsError::NoPath`].
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Read settings from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let values = toml::from_str(&content)?;
        Ok(Self {
            values,
            path: Some(path.to_path_buf()),
        })
    }

    /// Like [`load`](Self::load), but a missing file yields an empty store
    /// bound to `path`.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "settings file not found, starting empty");
            Ok(Self {
                values: BTreeMap::new(),
                path: Some(path.to_path_buf()),
            })
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl SettingsStore for TomlSettings {
    fn get(&self, name: &str) -> Option<SettingValue> {
        self.values.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: SettingValue) {
        self.values.insert(name.to_string(), value);
    }

    fn save(&self) -> Result<(), SettingsError> {
        let path = self.path.as_ref().ok_or(SettingsError::NoPath)?;
        let content = toml::to_string(&self.values)?;
        std::fs::write(path, content)?;
        info!(path = %path.display(), count = self.values.len(), "settings saved");
        Ok(())
    }
}
