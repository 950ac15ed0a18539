//! Configuration management for FolderPilot
//!
//! Persistent settings for the placement pass. Supports Windows, macOS,
//! and Linux.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Owner name of the window the companion parks beneath
    #[serde(default = "default_target_app")]
    pub target_app: String,
    /// Companion window height in pixels
    #[serde(default = "default_panel_height")]
    pub panel_height: u32,
    /// Delay before the post-dialog re-placement pass, in milliseconds
    #[serde(default = "default_reposition_delay_ms")]
    pub reposition_delay_ms: u64,
}

fn default_target_app() -> String {
    "Finder".to_string()
}

fn default_panel_height() -> u32 {
    100
}

fn default_reposition_delay_ms() -> u64 {
    450
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            target_app: default_target_app(),
            panel_height: default_panel_height(),
            reposition_delay_ms: default_reposition_delay_ms(),
        }
    }
}

impl AppConfig {
    /// Gets the config directory path (cross-platform)
    fn config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("APPDATA")
                .ok()
                .map(|p| PathBuf::from(p).join("FolderPilot"))
        }

        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|p| PathBuf::from(p).join("Library/Application Support/FolderPilot"))
        }

        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_CONFIG_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|p| PathBuf::from(p).join(".config"))
                })
                .map(|p| p.join("folderpilot"))
        }

        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }

    /// Gets the config file path
    fn config_path() -> Option<PathBuf> {
        let config_dir = Self::config_dir()?;

        // Create directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).ok()?;
        }

        Some(config_dir.join("config.json"))
    }

    /// Loads configuration from disk, falling back to defaults
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Loads configuration from a specific file
    fn load_from(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Saves configuration to disk
    pub fn save(&self) -> Result<(), String> {
        let path = Self::config_path().ok_or("Could not determine config path")?;
        self.write_to(&path)
    }

    /// Writes configuration to a specific file
    fn write_to(&self, path: &Path) -> Result<(), String> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        fs::write(path, content).map_err(|e| format!("Failed to write config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.target_app, "Finder");
        assert_eq!(config.panel_height, 100);
        assert_eq!(config.reposition_delay_ms, 450);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = AppConfig {
            target_app: "Path Finder".to_string(),
            panel_height: 120,
            reposition_delay_ms: 300,
        };

        let json = serde_json::to_string(&config).unwrap();
        let loaded: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let loaded: AppConfig = serde_json::from_str(r#"{"panel_height": 80}"#).unwrap();
        assert_eq!(loaded.panel_height, 80);
        assert_eq!(loaded.target_app, "Finder");
        assert_eq!(loaded.reposition_delay_ms, 450);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = AppConfig {
            target_app: "Files".to_string(),
            panel_height: 90,
            reposition_delay_ms: 500,
        };
        config.write_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_from_missing_or_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("nope.json");
        assert!(AppConfig::load_from(&missing).is_none());

        let corrupt = dir.path().join("corrupt.json");
        fs::write(&corrupt, "not json at all").unwrap();
        assert!(AppConfig::load_from(&corrupt).is_none());
    }
}
