// Settings module
// Stored as TOML in the platform config directory

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::date::DayNames;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// "light" or "dark"
    pub theme: String,
    /// Font file with Hangul glyphs, tried before the system locations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
    pub day_names: DayNames,
    pub button: ButtonColors,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            font_path: None,
            day_names: DayNames::default(),
            button: ButtonColors::default(),
        }
    }
}

impl Settings {
    pub fn is_dark(&self) -> bool {
        self.theme == "dark"
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.theme != "light" && self.theme != "dark" {
            return Err(format!("Unknown theme '{}', expected 'light' or 'dark'", self.theme));
        }

        if let Some(index) = self.day_names.names.iter().position(|n| n.trim().is_empty()) {
            return Err(format!("Day name {} is empty", index));
        }

        Ok(())
    }
}

/// Button colors as `#RRGGBB` strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonColors {
    pub default_fill: String,
    pub default_hover: String,
    pub warning_fill: String,
    pub warning_hover: String,
    pub text: String,
}

impl Default for ButtonColors {
    fn default() -> Self {
        Self {
            default_fill: "#7C5CFC".to_string(),
            default_hover: "#5B3FD9".to_string(),
            warning_fill: "#F04452".to_string(),
            warning_hover: "#C9303C".to_string(),
            text: "#FFFFFF".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert!(!settings.is_dark());
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let settings = Settings {
            theme: "sepia".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_empty_day_name_rejected() {
        let mut settings = Settings::default();
        settings.day_names.names[4] = " ".to_string();
        assert_eq!(settings.validate(), Err("Day name 4 is empty".to_string()));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            theme = "dark"

            [day_names]
            fallback = "invalid number"
            "#,
        )
        .unwrap();

        assert!(settings.is_dark());
        assert_eq!(settings.day_names.fallback, "invalid number");
        assert_eq!(settings.day_names.names, DayNames::default().names);
        assert_eq!(settings.button, ButtonColors::default());
    }
}
