// About viewport (separate OS window).

use eframe::egui;
use lazy_static::lazy_static;
use std::sync::RwLock;

use crate::localization::translate;

lazy_static! {
    static ref ABOUT_OPEN: RwLock<bool> = RwLock::new(false);
}

pub fn open_about() {
    if let Ok(mut v) = ABOUT_OPEN.write() {
        *v = true;
    }
}

pub fn draw_about_viewport(ctx: &egui::Context) {
    let is_open = ABOUT_OPEN.read().map(|g| *g).unwrap_or(false);
    if !is_open {
        return;
    }

    let viewport_id = egui::ViewportId::from_hash_of("about_window");
    ctx.show_viewport_deferred(
        viewport_id,
        egui::ViewportBuilder::default()
            .with_title(translate("about-title"))
            .with_inner_size([360.0, 180.0])
            .with_resizable(false),
        move |ctx, _class| {
            if ctx.input(|i| i.viewport().close_requested()) {
                if let Ok(mut v) = ABOUT_OPEN.write() {
                    *v = false;
                }
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }

            egui::CentralPanel::default().show(ctx, |ui| {
                ui.add_space(16.0);
                ui.vertical_centered(|ui| {
                    ui.heading(translate("app-title"));
                    ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(8.0);
                    ui.label(translate("about-description"));
                });
            });
        },
    );
}
