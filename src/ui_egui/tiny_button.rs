//! Compact action button.
//!
//! A rounded, borderless button that shows its label verbatim and comes in two
//! looks: the default (purple) and a warning look (red) for destructive
//! actions. Options the widget does not know about are handed straight to the
//! underlying [`egui::Button`] through [`TinyButton::with_button`].

use egui::{vec2, Response, Ui, Widget};

use super::theme::{ButtonPalette, ButtonStyle, BUTTON_MIN_HEIGHT, BUTTON_PADDING_X};

type ClickHandler<'a> = Box<dyn FnMut() + 'a>;
type ButtonCustomizer<'a> = Box<dyn FnOnce(egui::Button<'a>) -> egui::Button<'a> + 'a>;

/// Action button widget, built fresh every frame.
///
/// ```no_run
/// # fn show(ui: &mut egui::Ui) {
/// use day_widgets::ui_egui::TinyButton;
///
/// ui.add(TinyButton::new("Delete").warning(true).on_click(|| log::info!("deleted")));
/// # }
/// ```
pub struct TinyButton<'a> {
    label: String,
    style: ButtonStyle,
    palette: ButtonPalette,
    on_click: Option<ClickHandler<'a>>,
    customize: Option<ButtonCustomizer<'a>>,
    hover_text: Option<String>,
    enabled: bool,
}

impl<'a> TinyButton<'a> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: ButtonStyle::Default,
            palette: ButtonPalette::default(),
            on_click: None,
            customize: None,
            hover_text: None,
            enabled: true,
        }
    }

    /// Select the warning look instead of the default one
    pub fn warning(mut self, is_warning: bool) -> Self {
        self.style = ButtonStyle::from_warning(is_warning);
        self
    }

    /// Callback run once per click
    pub fn on_click(mut self, handler: impl FnMut() + 'a) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn palette(mut self, palette: ButtonPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Adjust the underlying `egui::Button` before it is added
    pub fn with_button(
        mut self,
        customize: impl FnOnce(egui::Button<'a>) -> egui::Button<'a> + 'a,
    ) -> Self {
        self.customize = Some(Box::new(customize));
        self
    }

    pub fn hover_text(mut self, text: impl Into<String>) -> Self {
        self.hover_text = Some(text.into());
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn style(&self) -> ButtonStyle {
        self.style
    }

    pub fn has_click_handler(&self) -> bool {
        self.on_click.is_some()
    }

    /// Run the click handler, if there is one
    pub fn activate(&mut self) {
        match self.on_click.as_mut() {
            Some(handler) => {
                log::debug!("TinyButton '{}' activated", self.label);
                handler();
            }
            None => log::trace!("TinyButton '{}' activated without a handler", self.label),
        }
    }
}

impl Widget for TinyButton<'_> {
    fn ui(mut self, ui: &mut Ui) -> Response {
        let style = self.style;
        let palette = self.palette;
        let enabled = self.enabled;
        let label = self.label.clone();
        let customize = self.customize.take();

        let mut response = ui
            .scope(|ui| {
                let ui_style = ui.style_mut();
                ui_style.spacing.button_padding.x = BUTTON_PADDING_X;
                style.apply_to_visuals(&mut ui_style.visuals, &palette);

                let mut button = egui::Button::new(label).min_size(vec2(0.0, BUTTON_MIN_HEIGHT));
                if let Some(customize) = customize {
                    button = customize(button);
                }
                ui.add_enabled(enabled, button)
            })
            .inner;

        if let Some(text) = self.hover_text.take() {
            response = response.on_hover_text(text);
        }

        if response.clicked() {
            self.activate();
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_default_style_when_warning_not_set() {
        let button = TinyButton::new("Save");
        assert_eq!(button.style(), ButtonStyle::Default);
        assert!(!button.has_click_handler());
    }

    #[test]
    fn test_warning_flag_selects_warning_style() {
        assert_eq!(TinyButton::new("Delete").warning(true).style(), ButtonStyle::Warning);
        assert_eq!(TinyButton::new("Delete").warning(false).style(), ButtonStyle::Default);
        assert!(TinyButton::new("Delete").warning(true).style().is_warning());
    }

    #[test]
    fn test_label_is_kept_verbatim() {
        let label = "  Delete ALL 항목  ";
        assert_eq!(TinyButton::new(label).label(), label);
    }

    #[test]
    fn test_activate_runs_handler_once_per_call() {
        let clicks = Cell::new(0);
        let mut button = TinyButton::new("Save").on_click(|| clicks.set(clicks.get() + 1));

        button.activate();
        assert_eq!(clicks.get(), 1);

        button.activate();
        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn test_activate_without_handler_is_noop() {
        let mut button = TinyButton::new("Save");
        button.activate();
    }
}
