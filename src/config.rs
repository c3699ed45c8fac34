//! User configuration
//!
//! Read from `--config FILE`, else `<config dir>/algoflow/config.toml`. A
//! missing default file means "use defaults"; a missing explicit file is an
//! error.
//!
//! ```toml
//! [player]
//! default_speed = "1x"
//!
//! [ui]
//! show_code = true
//!
//! [log]
//! level = "info"
//! ```

use crate::player::Speed;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Speed a freshly mounted player starts at
    pub default_speed: Speed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show the code-sample pane under the pseudocode
    pub show_code: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { show_code: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: LogLevel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

impl Config {
    /// `<config dir>/algoflow/config.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("algoflow").join("config.toml"))
    }

    /// Load from an explicit path, or from the default path if it exists
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.player.default_speed, Speed::Normal);
        assert!(config.ui.show_code);
        assert_eq!(config.log.level, LogLevel::Info);
    }

    #[test]
    fn renders_back_to_the_file_format() {
        let mut config = Config::default();
        config.player.default_speed = Speed::Half;
        let text = toml::to_string_pretty(&config).unwrap();

        assert!(text.contains("default_speed = \"0.5x\""));
        assert!(text.contains("show_code = true"));
        assert!(text.contains("level = \"info\""));
        assert_eq!(toml::from_str::<Config>(&text).unwrap(), config);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str("[player]\ndefault_speed = \"2x\"\n").unwrap();
        assert_eq!(config.player.default_speed, Speed::Double);
        assert!(config.ui.show_code);
    }

    #[test]
    fn loads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\nshow_code = false\n[log]\nlevel = \"debug\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();

        assert!(!config.ui.show_code);
        assert_eq!(LevelFilter::from(config.log.level), LevelFilter::DEBUG);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn rejects_unknown_speed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[player]\ndefault_speed = \"4x\"").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
