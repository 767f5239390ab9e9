//! Application settings persistence
//!
//! Handles saving and loading presenter preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::KeyBindings;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Display and stage settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Custom keybindings
    #[serde(default)]
    pub keybindings: KeyBindings,
}

/// Display and stage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark stage instead of the print-style white background
    pub dark_mode: bool,
    /// Power saving mode - disables the ambient layer and all animation
    #[serde(default)]
    pub power_saving_mode: bool,
    /// Enter fullscreen as soon as the window opens
    #[serde(default)]
    pub start_fullscreen: bool,
    /// Render the floating-dot decoration layer
    #[serde(default = "default_true")]
    pub decorations: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            power_saving_mode: false,
            start_fullscreen: false,
            decorations: true,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "podium", "Podium")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path(tag: &str) -> PathBuf {
        std::env::temp_dir()
            .join("podium-settings-tests")
            .join(format!("{tag}-{}.json", std::process::id()))
    }

    #[test]
    fn round_trips_through_a_file() {
        let path = temp_settings_path("roundtrip");
        let mut settings = Settings::default();
        settings.display.dark_mode = true;
        settings.display.power_saving_mode = true;
        settings.display.decorations = false;

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(loaded.display.dark_mode);
        assert!(loaded.display.power_saving_mode);
        assert!(!loaded.display.decorations);
    }

    #[test]
    fn missing_file_is_an_error_and_defaults_apply() {
        let path = temp_settings_path("missing");
        assert!(Settings::load_from_file(&path).is_err());

        let defaults = Settings::default();
        assert!(!defaults.display.dark_mode);
        assert!(defaults.display.decorations);
        assert!(!defaults.display.start_fullscreen);
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let path = temp_settings_path("forward-compat");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"display":{"dark_mode":true},"future":42}"#).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(loaded.display.dark_mode);
        // Fields absent from the file fall back to defaults
        assert!(loaded.display.decorations);
    }
}
