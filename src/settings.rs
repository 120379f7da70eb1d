//! User settings persistence.
//!
//! This module handles loading and saving user preferences across sessions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::api::DEFAULT_API_BASE;
use crate::i18n::Language;

/// Environment variable that overrides the configured API location
pub const API_URL_ENV: &str = "VORA_API_URL";

/// User settings that persist across sessions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserSettings {
    /// Settings file version for migration support
    #[serde(default = "default_version")]
    pub version: u32,
    /// Selected language
    #[serde(default)]
    pub language: Language,
    /// Dark theme (the default) or light theme
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
    /// Base URL of the VORA API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_version() -> u32 {
    1
}

fn default_dark_mode() -> bool {
    true
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            version: 1,
            language: Language::default(),
            dark_mode: true,
            api_base_url: default_api_base_url(),
        }
    }
}

impl UserSettings {
    /// Get the config directory path for VORA
    pub fn get_config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::data_dir().map(|p| p.join("VORA"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|p| p.join("VORA"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            dirs::config_dir().map(|p| p.join("vora"))
        }
    }

    /// Get the path to the settings JSON file
    pub fn get_settings_path() -> Option<PathBuf> {
        Self::get_config_dir().map(|p| p.join("settings.json"))
    }

    /// Load settings from disk
    pub fn load() -> Self {
        match Self::get_settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load settings from a specific file, falling back to defaults
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable settings file: {}", e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), String> {
        let path = Self::get_settings_path()
            .ok_or_else(|| "Could not determine config directory".to_string())?;
        self.save_to(&path)
    }

    /// Save settings to a specific file
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write settings file: {}", e))?;

        Ok(())
    }

    /// The API base URL to use: `VORA_API_URL` if set, else the saved value
    pub fn effective_api_url(&self) -> String {
        resolve_api_url(std::env::var(API_URL_ENV).ok(), &self.api_base_url)
    }
}

fn resolve_api_url(env_value: Option<String>, configured: &str) -> String {
    env_value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| configured.to_string())
}
