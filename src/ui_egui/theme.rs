//! Button theme for the egui widgets
//!
//! Defines the colors a [`TinyButton`](super::tiny_button::TinyButton) is
//! painted with and the conversion from the hex strings stored in the
//! settings file.

use anyhow::{anyhow, Context as _, Result};
use egui::{Color32, Rounding, Stroke, Visuals};

use crate::models::settings::ButtonColors;

/// Corner radius of a button
pub const BUTTON_ROUNDING: f32 = 8.0;

/// Minimum button height
pub const BUTTON_MIN_HEIGHT: f32 = 24.0;

/// Horizontal padding between the frame and the label
pub const BUTTON_PADDING_X: f32 = 8.0;

/// The two mutually exclusive button looks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    #[default]
    Default,
    /// Destructive or cautionary action
    Warning,
}

impl ButtonStyle {
    pub fn from_warning(is_warning: bool) -> Self {
        if is_warning {
            ButtonStyle::Warning
        } else {
            ButtonStyle::Default
        }
    }

    pub fn is_warning(self) -> bool {
        self == ButtonStyle::Warning
    }

    /// Resting fill color
    pub fn fill(self, palette: &ButtonPalette) -> Color32 {
        match self {
            ButtonStyle::Default => palette.default_fill,
            ButtonStyle::Warning => palette.warning_fill,
        }
    }

    /// Fill color while hovered or pressed
    pub fn hover_fill(self, palette: &ButtonPalette) -> Color32 {
        match self {
            ButtonStyle::Default => palette.default_hover,
            ButtonStyle::Warning => palette.warning_hover,
        }
    }

    /// Override the widget visuals so an `egui::Button` is painted in this style
    pub fn apply_to_visuals(self, visuals: &mut Visuals, palette: &ButtonPalette) {
        let fill = self.fill(palette);
        let hover = self.hover_fill(palette);
        visuals.override_text_color = Some(palette.text);
        let widgets = &mut visuals.widgets;

        widgets.inactive.weak_bg_fill = fill;
        widgets.hovered.weak_bg_fill = hover;
        widgets.active.weak_bg_fill = hover;

        for state in [
            &mut widgets.inactive,
            &mut widgets.hovered,
            &mut widgets.active,
        ] {
            state.bg_stroke = Stroke::NONE;
            state.rounding = Rounding::same(BUTTON_ROUNDING);
            state.fg_stroke.color = palette.text;
        }
    }
}

/// Colors used by the action button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPalette {
    pub default_fill: Color32,
    pub default_hover: Color32,
    pub warning_fill: Color32,
    pub warning_hover: Color32,
    /// Label color for both styles
    pub text: Color32,
}

impl Default for ButtonPalette {
    fn default() -> Self {
        Self {
            default_fill: Color32::from_rgb(124, 92, 252),
            default_hover: Color32::from_rgb(91, 63, 217),
            warning_fill: Color32::from_rgb(240, 68, 82),
            warning_hover: Color32::from_rgb(201, 48, 60),
            text: Color32::from_rgb(255, 255, 255),
        }
    }
}

impl ButtonPalette {
    /// Build a palette from the hex strings in the settings file
    pub fn from_colors(colors: &ButtonColors) -> Result<Self> {
        let parse = |field: &str, value: &str| {
            hex_to_color(value)
                .map_err(|e| anyhow!(e))
                .with_context(|| format!("Invalid button color `{}`: {:?}", field, value))
        };

        Ok(Self {
            default_fill: parse("default_fill", &colors.default_fill)?,
            default_hover: parse("default_hover", &colors.default_hover)?,
            warning_fill: parse("warning_fill", &colors.warning_fill)?,
            warning_hover: parse("warning_hover", &colors.warning_hover)?,
            text: parse("text", &colors.text)?,
        })
    }

    /// Inverse of [`ButtonPalette::from_colors`]
    pub fn to_colors(&self) -> ButtonColors {
        ButtonColors {
            default_fill: color_to_hex(self.default_fill),
            default_hover: color_to_hex(self.default_hover),
            warning_fill: color_to_hex(self.warning_fill),
            warning_hover: color_to_hex(self.warning_hover),
            text: color_to_hex(self.text),
        }
    }
}

/// Convert Color32 to hex string for display
pub fn color_to_hex(color: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}

/// Parse hex string to Color32
pub fn hex_to_color(hex: &str) -> Result<Color32, String> {
    let hex = hex.trim().trim_start_matches('#');

    if hex.len() != 6 || !hex.is_ascii() {
        return Err("Hex color must be 6 characters".to_string());
    }

    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid hex color")?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid hex color")?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid hex color")?;

    Ok(Color32::from_rgb(r, g, b))
}
