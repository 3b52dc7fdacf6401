//! Application settings for drupalarch.
//!
//! User settings live at `~/.drupalarch/drupalarch.toml`.
//! CLI flags override settings file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, Result};

/// Default settings file name.
const CONFIG_FILE_NAME: &str = "drupalarch.toml";

/// Default settings directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".drupalarch";

// ---------------------------------------------------------------------------
// Settings structs (matching drupalarch.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application settings, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Directory scanned for configuration files.
    #[serde(default = "default_dir")]
    pub read_dir: PathBuf,

    /// Directory the CSV reports are written to.
    #[serde(default = "default_dir")]
    pub write_dir: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            read_dir: default_dir(),
            write_dir: default_dir(),
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

/// `[logging]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Log line format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info".into()
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Run config (runtime, merged from settings + CLI flags)
// ---------------------------------------------------------------------------

/// The two directory roots a run works against. Built once, then read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory scanned for configuration files.
    pub read_dir: PathBuf,
    /// Directory the CSV reports are written to.
    pub write_dir: PathBuf,
}

impl RunConfig {
    /// Merge CLI flag values over the settings file defaults.
    pub fn resolve(
        config: &AppConfig,
        read_dir: Option<PathBuf>,
        write_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            read_dir: read_dir.unwrap_or_else(|| config.defaults.read_dir.clone()),
            write_dir: write_dir.unwrap_or_else(|| config.defaults.write_dir.clone()),
        }
    }
}

impl From<&AppConfig> for RunConfig {
    fn from(config: &AppConfig) -> Self {
        Self::resolve(config, None, None)
    }
}

// ---------------------------------------------------------------------------
// Settings loading
// ---------------------------------------------------------------------------

/// Get the path to the settings directory (`~/.drupalarch/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| InventoryError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the settings file (`~/.drupalarch/drupalarch.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the settings from disk. Returns defaults if the file does not exist
/// or no home directory can be determined.
pub fn load_config() -> Result<AppConfig> {
    let path = match config_file_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!(error = %e, "no settings location, using defaults");
            return Ok(AppConfig::default());
        }
    };

    if !path.exists() {
        tracing::debug!(?path, "settings file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the settings from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| InventoryError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        InventoryError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("read_dir"));
        assert!(toml_str.contains("format = \"text\""));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[defaults]
write_dir = "/tmp/reports"

[logging]
format = "json"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.defaults.read_dir, PathBuf::from("."));
        assert_eq!(config.defaults.write_dir, PathBuf::from("/tmp/reports"));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn cli_flags_override_settings() {
        let mut config = AppConfig::default();
        config.defaults.read_dir = PathBuf::from("/srv/config/sync");
        config.defaults.write_dir = PathBuf::from("/srv/reports");

        let run = RunConfig::resolve(&config, None, Some(PathBuf::from("out")));
        assert_eq!(run.read_dir, PathBuf::from("/srv/config/sync"));
        assert_eq!(run.write_dir, PathBuf::from("out"));
    }

    #[test]
    fn run_config_defaults_to_current_dir() {
        let run = RunConfig::from(&AppConfig::default());
        assert_eq!(run.read_dir, PathBuf::from("."));
        assert_eq!(run.write_dir, PathBuf::from("."));
    }

    #[test]
    fn load_config_from_reports_parse_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[logging\nlevel = ").expect("write");

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, InventoryError::Config { .. }));
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn load_config_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_config_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, InventoryError::Io { .. }));
    }
}
