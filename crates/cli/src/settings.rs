use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use liftplan_domain::Service;
use log::LevelFilter;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub catalog_path: Option<PathBuf>,
    pub history_path: Option<PathBuf>,
    /// Number of most recent sessions whose exercises are avoided.
    pub recent_window: usize,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            history_path: None,
            recent_window: Service::<()>::DEFAULT_RECENT_WINDOW,
            log_level: "warn".to_string(),
        }
    }
}

/// Command-line flags taking precedence over the settings file.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct Overrides {
    /// Catalog file (JSON), the built-in catalog is used if unset
    #[arg(long, global = true, env = "LIFTPLAN_CATALOG")]
    pub catalog: Option<PathBuf>,
    /// History file (JSON)
    #[arg(long, global = true, env = "LIFTPLAN_HISTORY")]
    pub history: Option<PathBuf>,
    /// Number of recent sessions to avoid exercises from
    #[arg(long, global = true, env = "LIFTPLAN_RECENT_WINDOW")]
    pub recent_window: Option<usize>,
    /// One of off, error, warn, info, debug, trace
    #[arg(long, global = true, env = "LIFTPLAN_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

impl Settings {
    /// Reads the settings file, or returns the defaults if no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(catalog) = &overrides.catalog {
            self.catalog_path = Some(catalog.clone());
        }
        if let Some(history) = &overrides.history {
            self.history_path = Some(history.clone());
        }
        if let Some(recent_window) = overrides.recent_window {
            self.recent_window = recent_window;
        }
        if let Some(log_level) = &overrides.log_level {
            self.log_level.clone_from(log_level);
        }
    }

    pub fn level_filter(&self) -> Result<LevelFilter, SettingsError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| SettingsError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_load_defaults() {
        assert_eq!(Settings::load(None).unwrap(), Settings::default());
        assert_eq!(Settings::default().recent_window, 3);
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"historyPath": "/var/lib/liftplan/history.json", "logLevel": "debug"}"#,
        )
        .unwrap();
        assert_eq!(
            Settings::load(Some(&path)).unwrap(),
            Settings {
                history_path: Some(PathBuf::from("/var/lib/liftplan/history.json")),
                log_level: "debug".to_string(),
                ..Settings::default()
            }
        );
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Settings::load(Some(&dir.path().join("missing.json"))),
            Err(SettingsError::Read { .. })
        ));
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"recentWindow": "three"}"#).unwrap();
        assert!(matches!(
            Settings::load(Some(&path)),
            Err(SettingsError::Parse { .. })
        ));
    }

    #[test]
    fn test_apply_overrides() {
        let mut settings = Settings {
            catalog_path: Some(PathBuf::from("catalog.json")),
            ..Settings::default()
        };
        settings.apply(&Overrides {
            history: Some(PathBuf::from("history.json")),
            recent_window: Some(5),
            ..Overrides::default()
        });
        assert_eq!(
            settings,
            Settings {
                catalog_path: Some(PathBuf::from("catalog.json")),
                history_path: Some(PathBuf::from("history.json")),
                recent_window: 5,
                log_level: "warn".to_string(),
            }
        );
    }

    #[rstest]
    #[case("warn", Some(LevelFilter::Warn))]
    #[case("DEBUG", Some(LevelFilter::Debug))]
    #[case("off", Some(LevelFilter::Off))]
    #[case("loud", None)]
    fn test_level_filter(#[case] log_level: &str, #[case] expected: Option<LevelFilter>) {
        let settings = Settings {
            log_level: log_level.to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.level_filter().ok(), expected);
    }
}
