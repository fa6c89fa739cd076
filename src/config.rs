//! Runtime configuration: optional YAML file, then environment overrides.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::data::loader::DEFAULT_EMPLOYEE_DATA_PATH;

pub const DEFAULT_CONFIG_PATH: &str = "config/synergy.yaml";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_LOG_FILTER: &str = "synergy_select=info,tower_http=info";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub data_path: PathBuf,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            data_path: PathBuf::from(DEFAULT_EMPLOYEE_DATA_PATH),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl AppConfig {
    /// Reads `$SYNERGY_CONFIG` (must exist when set) or the default path (optional),
    /// then applies `SYNERGY_BIND`, `SYNERGY_DATA` and `SYNERGY_LOG`.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match env::var("SYNERGY_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).is_file() => Self::from_file(DEFAULT_CONFIG_PATH)?,
            Err(_) => Self::default(),
        };
        Ok(base.with_overrides(|key| env::var(key).ok()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&raw)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup("SYNERGY_BIND").filter(|v| !v.trim().is_empty()) {
            self.bind_addr = bind;
        }
        if let Some(data) = lookup("SYNERGY_DATA").filter(|v| !v.trim().is_empty()) {
            self.data_path = PathBuf::from(data);
        }
        if let Some(filter) = lookup("SYNERGY_LOG").filter(|v| !v.trim().is_empty()) {
            self.log_filter = filter;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{AppConfig, DEFAULT_BIND_ADDR};

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = AppConfig::from_yaml_str("data_path: /srv/hr/employees.csv\n").expect("valid yaml");
        assert_eq!(config.data_path, PathBuf::from("/srv/hr/employees.csv"));
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(AppConfig::from_yaml_str("  \n").expect("empty ok"), AppConfig::default());
    }

    #[test]
    fn unknown_shape_is_rejected() {
        assert!(AppConfig::from_yaml_str("bind_addr: [1, 2]").is_err());
    }

    #[test]
    fn environment_overrides_file_values() {
        let config = AppConfig::default().with_overrides(|key| match key {
            "SYNERGY_BIND" => Some("0.0.0.0:9000".to_string()),
            "SYNERGY_LOG" => Some(" ".to_string()),
            _ => None,
        });
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.log_filter, AppConfig::default().log_filter);
    }
}
