//! App Settings
//!
//! Theme preference with JSON persistence: load-or-default on start, save on
//! change. The stored file lives in the platform config directory.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

// ============================================================
// 错误类型定义
// ============================================================

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

// ============================================================
// 主题偏好
// ============================================================

/// Theme preference. `System` defers to the host theme, resolving to
/// `Light` when the host does not report one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// The concrete theme to render: `System` falls back to `Light`.
    pub fn resolved(&self) -> ThemePreference {
        match self {
            ThemePreference::System => ThemePreference::Light,
            other => *other,
        }
    }

    /// Flip between light and dark. An unresolved `System` preference
    /// resolves first, so toggling from the default yields `Dark`.
    pub fn toggled(&self) -> ThemePreference {
        match self.resolved() {
            ThemePreference::Light => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub theme: ThemePreference,
    /// When the settings were last saved
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::System,
            updated_at: None,
        }
    }
}

impl AppSettings {
    /// Flip the theme and stamp the change time.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.updated_at = Some(Utc::now());
    }
}

// ============================================================
// 持久化
// ============================================================

/// JSON-file settings store.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/jibu/settings.json`, when the platform reports a
    /// config directory.
    pub fn default_location() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("jibu").join("settings.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored settings. A missing or unreadable file yields the
    /// defaults; settings are never a startup failure.
    pub fn load(&self) -> AppSettings {
        match fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(settings) => settings,
                Err(err) => {
                    warn!(path = %self.path.display(), %err, "settings file corrupt, using defaults");
                    AppSettings::default()
                }
            },
            Err(_) => AppSettings::default(),
        }
    }

    pub fn save(&self, settings: &AppSettings) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_theme_is_system() {
        assert_eq!(AppSettings::default().theme, ThemePreference::System);
    }

    #[test]
    fn test_toggle_from_system_yields_dark() {
        // system resolves to light first, so the first toggle lands on dark
        let mut settings = AppSettings::default();
        settings.toggle_theme();
        assert_eq!(settings.theme, ThemePreference::Dark);
        assert!(settings.updated_at.is_some());
    }

    #[test]
    fn test_toggle_alternates() {
        let mut settings = AppSettings::default();
        settings.toggle_theme();
        settings.toggle_theme();
        assert_eq!(settings.theme, ThemePreference::Light);
        settings.toggle_theme();
        assert_eq!(settings.theme, ThemePreference::Dark);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("nested").join("settings.json"));

        let mut settings = AppSettings::default();
        settings.toggle_theme();
        store.save(&settings).unwrap();

        assert_eq!(store.load(), settings);
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("absent.json"));
        assert_eq!(store.load(), AppSettings::default());
    }

    #[test]
    fn test_load_corrupt_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = SettingsStore::new(path);
        assert_eq!(store.load(), AppSettings::default());
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        let json = serde_json::to_string(&ThemePreference::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let back: ThemePreference = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(back, ThemePreference::System);
    }
}
