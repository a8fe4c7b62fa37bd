//! Runtime configuration resolved from the process environment.
//!
//! | Variable            | Meaning                          | Default                      |
//! |---------------------|----------------------------------|------------------------------|
//! | `CATALOG_DB_PATH`   | SQLite database file             | `<temp_dir>/catalog.sqlite3` |
//! | `CATALOG_LOG_LEVEL` | log level name                   | build-mode default           |
//! | `CATALOG_LOG_DIR`   | absolute rolling-log directory   | unset (file logging off)     |
//!
//! Blank values are treated as unset.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "CATALOG_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "CATALOG_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "CATALOG_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "catalog.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    /// File logging is enabled only when a directory is configured.
    pub log_dir: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CatalogConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        Self {
            db_path: read(DB_PATH_ENV).map_or(defaults.db_path, PathBuf::from),
            log_level: read(LOG_LEVEL_ENV).unwrap_or(defaults.log_level),
            log_dir: read(LOG_DIR_ENV).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogConfig, DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn missing_and_blank_values_fall_back_to_defaults() {
        let env = HashMap::from([(DB_PATH_ENV, "   ")]);
        let config = CatalogConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn values_are_trimmed() {
        let env = HashMap::from([
            (DB_PATH_ENV, " /var/lib/catalog.db "),
            (LOG_LEVEL_ENV, "warn"),
            (LOG_DIR_ENV, "/var/log/catalog"),
        ]);
        let config = CatalogConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.db_path, PathBuf::from("/var/lib/catalog.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/catalog")));
    }
}
