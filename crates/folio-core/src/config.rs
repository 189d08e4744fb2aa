//! Workspace configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use folio_tabs::TabPersistence;

use crate::error::CoreError;
use crate::Result;

const DATA_DIR_ENV: &str = "FOLIO_DATA_DIR";
const STORAGE_KEY_ENV: &str = "FOLIO_STORAGE_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file
    pub database_path: PathBuf,
    /// Key the tab record is stored under
    pub storage_key: String,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("folio.db"),
            storage_key: TabPersistence::DEFAULT_KEY.to_string(),
        }
    }

    /// Defaults with `FOLIO_DATA_DIR` and `FOLIO_STORAGE_KEY` applied.
    pub fn from_env() -> Result<Self> {
        Self::from_env_in(Self::data_dir())
    }

    /// Configuration rooted at `data_dir` with `FOLIO_STORAGE_KEY` applied.
    pub fn from_env_in(data_dir: PathBuf) -> Result<Self> {
        let storage_key = std::env::var(STORAGE_KEY_ENV).ok();
        Self::with_overrides(data_dir, storage_key)
    }

    fn with_overrides(data_dir: PathBuf, storage_key: Option<String>) -> Result<Self> {
        let mut config = Self::new(data_dir);
        if let Some(key) = storage_key {
            config.storage_key = key;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(CoreError::Config("storage key cannot be empty".to_string()));
        }
        if self.database_path.as_os_str().is_empty() {
            return Err(CoreError::Config("database path cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn data_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            return PathBuf::from(dir);
        }

        dirs::data_local_dir()
            .map(|d| d.join("Folio"))
            .unwrap_or_else(|| PathBuf::from(".folio"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_layout() {
        let config = Config::new(PathBuf::from("/tmp/folio-test"));
        assert_eq!(config.database_path, PathBuf::from("/tmp/folio-test/folio.db"));
        assert_eq!(config.storage_key, "tab-storage");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_storage_key_override_keeps_data_dir() {
        let config =
            Config::with_overrides(PathBuf::from("/srv/forms"), Some("survey-tabs".to_string()))
                .unwrap();
        assert_eq!(config.database_path, PathBuf::from("/srv/forms/folio.db"));
        assert_eq!(config.storage_key, "survey-tabs");

        let config = Config::with_overrides(PathBuf::from("/srv/forms"), None).unwrap();
        assert_eq!(config.storage_key, "tab-storage");

        let blank = Config::with_overrides(PathBuf::from("/srv/forms"), Some(" ".to_string()));
        assert!(matches!(blank, Err(CoreError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_blank_key() {
        let mut config = Config::new(PathBuf::from("/tmp/folio-test"));
        config.storage_key = "  ".to_string();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_serde_round_trip() {
        let config = Config::new(PathBuf::from("/data"));
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
