use crate::error::SettingsError;
use crate::rules::RuleTable;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_STORE_DIR: &str = "LIFELINK_STORE_DIR";
pub const ENV_RULES: &str = "LIFELINK_RULES";
pub const ENV_EXPORT_DIR: &str = "LIFELINK_EXPORT_DIR";

/// Runtime settings for the command-line tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Directory of the JSON file store.
    pub store_dir: PathBuf,
    /// Optional custom rule table; the standard table is used when unset.
    pub rules_path: Option<PathBuf>,
    /// Where exports are written.
    pub export_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(".lifelink"),
            rules_path: None,
            export_dir: PathBuf::from("."),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|e| SettingsError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Reads `path` if given, then applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let settings = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(settings.with_overrides(|key| env::var(key).ok()))
    }

    /// Applies overrides looked up by variable name.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_STORE_DIR).filter(|v| !v.is_empty()) {
            self.store_dir = PathBuf::from(dir);
        }
        if let Some(rules) = lookup(ENV_RULES).filter(|v| !v.is_empty()) {
            self.rules_path = Some(PathBuf::from(rules));
        }
        if let Some(dir) = lookup(ENV_EXPORT_DIR).filter(|v| !v.is_empty()) {
            self.export_dir = PathBuf::from(dir);
        }
        self
    }

    /// The configured rule table, or the standard one.
    pub fn rule_table(&self) -> Result<RuleTable, SettingsError> {
        let Some(path) = &self.rules_path else {
            return Ok(RuleTable::standard());
        };
        let json = fs::read_to_string(path).map_err(|e| SettingsError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(RuleTable::from_json(&json)?)
    }
}
