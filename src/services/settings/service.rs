use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "config.toml";

/// Loads and saves [`Settings`] as TOML
pub struct SettingsService;

impl SettingsService {
    /// `config.toml` inside the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "DayWidgets", "DayWidgets")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Load settings from the default location
    pub fn load() -> Result<Settings> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("No config directory available, using default settings");
                Ok(Settings::default())
            }
        }
    }

    /// Load settings from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Settings> {
        if !path.exists() {
            log::info!("No settings file at {:?}, using defaults", path);
            return Ok(Settings::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {:?}", path))?;
        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file {:?}", path))?;

        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {:?}: {}", path, e))?;

        log::info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Write settings to `path`, creating parent directories as needed
    pub fn save_to(path: &Path, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory {:?}", parent))?;
        }

        let contents = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write settings file {:?}", path))?;

        log::info!("Saved settings to {:?}", path);
        Ok(())
    }
}
