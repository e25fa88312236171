// Day Widgets demo
// Main entry point

use day_widgets::models::settings::Settings;
use day_widgets::services::settings::SettingsService;
use day_widgets::ui_egui::DemoApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Day Widgets demo");

    let settings = SettingsService::load().unwrap_or_else(|err| {
        log::warn!("{:#}; using default settings", err);
        Settings::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 260.0])
            .with_min_inner_size([320.0, 200.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Day Widgets",
        options,
        Box::new(move |cc| Ok(Box::new(DemoApp::new(cc, settings)))),
    )
}
