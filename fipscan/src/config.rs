// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::messages::Language;
use crate::models::RivaltaStatus;

pub const CONFIG_FILE_NAME: &str = ".fipscan.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub language: Language,
    /// YAML record file; relative paths are resolved against the config file's directory.
    pub records: Option<PathBuf>,
    pub rivalta: RivaltaStatus,
    pub report_glob: String,
    pub contact: Option<Contact>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            records: None,
            rivalta: RivaltaStatus::default(),
            report_glob: String::from("*.csv"),
            contact: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Contact {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(email) = &self.email {
            write!(f, "\nEmail: {email}")?;
        }
        if let Some(phone) = &self.phone {
            write!(f, "\nTel: {phone}")?;
        }
        Ok(())
    }
}

/// Loads configuration from the first `.fipscan.toml` found in `dir` or one of
/// its parents. Falls back to defaults when there is none.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file exists but cannot be read
/// * The file is not valid TOML or has unknown keys
#[inline]
pub fn load_config(dir: &Path) -> Result<Config> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while !visited.contains(&current_dir) {
        visited.insert(current_dir.clone());

        let config_file = current_dir.join(CONFIG_FILE_NAME);
        if config_file.is_file() {
            return load_config_file(&config_file);
        }

        if let Some(parent) = current_dir.parent() {
            current_dir = parent.to_path_buf();
        } else {
            break;
        }
    }

    debug!(start = %dir.display(), "no config file found, using defaults");
    Ok(Config::default())
}

/// Loads configuration from an explicit file.
///
/// # Errors
///
/// This function may return an error if the file cannot be read or parsed.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    if let Some(base) = path.parent() {
        config.records = config.records.take().map(|records| {
            if records.is_relative() {
                base.join(records)
            } else {
                records
            }
        });
    }

    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}
