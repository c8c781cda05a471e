// Entry point kept minimal: logging, settings, localization, window config.
// All application logic lives in the app module.

use eframe::egui;

mod app;
mod library;
mod localization;
mod logger;
mod types;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    logger::init();
    app::settings::load_settings_from_disk();

    let preferred = app::settings::with_settings(|st| st.language);
    localization::initialize_localization(preferred);
    log::info!(
        "language: {}",
        localization::get_current_language().code()
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 420.0]),
        centered: true,
        ..Default::default()
    };
    eframe::run_native(
        "MediaDesk",
        native_options,
        Box::new(|_cc| Ok(Box::new(app::MediaDeskApp::default()))),
    )
}
