use chrono::{Datelike, Local};
use egui::Visuals;

use super::fonts::install_hangul_font;
use super::theme::ButtonPalette;
use super::tiny_button::TinyButton;
use crate::models::settings::Settings;
use crate::utils::date::weekday_name;

const MIN_DAY_INDEX: i64 = -3;
const MAX_DAY_INDEX: i64 = 10;

/// Small window showing the day-name lookup and both button styles
pub struct DemoApp {
    settings: Settings,
    palette: ButtonPalette,
    /// None models an absent index
    selected_day: Option<i64>,
    save_count: u32,
    last_action: Option<String>,
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| self.render(ui));
    }
}

impl DemoApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        install_hangul_font(&cc.egui_ctx, settings.font_path.as_deref());
        cc.egui_ctx.set_visuals(if settings.is_dark() {
            Visuals::dark()
        } else {
            Visuals::light()
        });

        let palette = ButtonPalette::from_colors(&settings.button).unwrap_or_else(|err| {
            log::warn!("{:#}; using default button colors", err);
            ButtonPalette::default()
        });

        let today = Local::now().weekday().num_days_from_sunday();

        Self {
            settings,
            palette,
            selected_day: Some(i64::from(today)),
            save_count: 0,
            last_action: None,
        }
    }

    fn render(&mut self, ui: &mut egui::Ui) {
        ui.heading(format!("Today: {}", weekday_name(Local::now().weekday())));
        ui.separator();

        let mut absent = self.selected_day.is_none();
        ui.horizontal(|ui| {
            ui.label("Day index");
            if ui.checkbox(&mut absent, "absent").changed() {
                self.selected_day = if absent { None } else { Some(0) };
            }
            if let Some(day) = self.selected_day.as_mut() {
                ui.add(egui::DragValue::new(day).range(MIN_DAY_INDEX..=MAX_DAY_INDEX));
            }
        });
        ui.label(format!(
            "→ {}",
            self.settings.day_names.resolve(self.selected_day)
        ));

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.add(
                TinyButton::new("Save")
                    .palette(self.palette)
                    .hover_text("Count a save")
                    .on_click(|| {
                        self.save_count += 1;
                        self.last_action = Some(format!("Saved ({})", self.save_count));
                    }),
            );
            ui.add(
                TinyButton::new("Delete")
                    .warning(true)
                    .palette(self.palette)
                    .enabled(self.save_count > 0)
                    .on_click(|| {
                        self.save_count = 0;
                        self.last_action = Some("Deleted".to_string());
                    }),
            );
        });

        if let Some(action) = &self.last_action {
            ui.label(action);
        }
    }
}
