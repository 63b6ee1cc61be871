use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use whaledone_core::Language;
use whaledone_core::prefs::StoreConfig;

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "whaledone.toml";

/// Settings read from `whaledone.toml`. Every field is optional in the file.
///
/// ```toml
/// language = "en"
///
/// [store]
/// backend = "sqlite"
/// path = "whaledone.db"
///
/// [logging]
/// level = "debug"
/// stdout = true
/// file = "logs/whaledone.log"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub store: StoreSection,
    /// Overrides the stored language preference at startup.
    pub language: Option<Language>,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    pub backend: String,
    pub path: String,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            backend: "sqlite".to_string(),
            path: "whaledone.db".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` still takes precedence.
    pub level: Option<String>,
    pub stdout: bool,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            stdout: true,
            file: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from `path`.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            backend: self.store.backend.clone(),
            connection_string: self.store.path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("whaledone.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();

        let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.store.backend, "sqlite");
        assert!(config.logging.stdout);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let (_dir, path) = write_config("language = \"ja\"\n\n[store]\nbackend = \"memory\"\n");

        let config = AppConfig::load_from(&path).unwrap();

        assert_eq!(config.language, Some(Language::Ja));
        assert_eq!(config.store.backend, "memory");
        assert_eq!(config.store.path, "whaledone.db");
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn logging_section_parses() {
        let (_dir, path) = write_config(
            "[logging]\nlevel = \"debug\"\nstdout = false\nfile = \"logs/app.log\"\n",
        );

        let config = AppConfig::load_from(&path).unwrap();

        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert!(!config.logging.stdout);
        assert_eq!(config.logging.file, Some(PathBuf::from("logs/app.log")));
    }

    #[test]
    fn malformed_file_names_the_path() {
        let (_dir, path) = write_config("language = [");

        let err = AppConfig::load_from(&path).unwrap_err();

        assert!(format!("{err}").contains("whaledone.toml"));
    }

    #[test]
    fn unknown_language_is_rejected() {
        let (_dir, path) = write_config("language = \"klingon\"\n");

        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn store_config_maps_path_to_connection_string() {
        let config = AppConfig {
            store: StoreSection {
                backend: "sqlite".to_string(),
                path: ":memory:".to_string(),
            },
            ..Default::default()
        };

        assert_eq!(
            config.store_config(),
            StoreConfig {
                backend: "sqlite".to_string(),
                connection_string: ":memory:".to_string(),
            }
        );
    }
}
