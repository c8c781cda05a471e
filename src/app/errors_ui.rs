// Errors viewport (separate OS window) and floating "Errors" button.
// Collects scan/move errors and lets the user inspect/clear them.

use eframe::egui;
use lazy_static::lazy_static;
use std::collections::VecDeque;
use std::sync::{Mutex, RwLock};

use crate::localization::{translate, translate_with};

const MAX_ERRORS: usize = 500;

lazy_static! {
    static ref ERRORS_OPEN: RwLock<bool> = RwLock::new(false);
    static ref ERRORS: Mutex<VecDeque<String>> = Mutex::new(VecDeque::new());
}

pub(super) fn append_error(msg: impl Into<String>) {
    if let Ok(mut q) = ERRORS.lock() {
        q.push_back(msg.into());
        if q.len() > MAX_ERRORS {
            q.pop_front();
        }
    }
}

fn len() -> usize {
    ERRORS.lock().map(|q| q.len()).unwrap_or(0)
}

fn all_lines() -> Vec<String> {
    ERRORS
        .lock()
        .map(|q| q.iter().cloned().collect())
        .unwrap_or_default()
}

/// Floating button in the bottom-right corner of the main window.
/// Appears only when there are errors collected.
pub(super) fn draw_errors_button(ctx: &egui::Context) {
    let n = len();
    if n == 0 {
        return;
    }

    egui::Area::new(egui::Id::new("errors_button"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -12.0])
        .show(ctx, |ui| {
            let label = translate_with("errors-button", &[("count", n.to_string())]);
            if ui
                .button(egui::RichText::new(label).color(egui::Color32::from_rgb(230, 90, 90)))
                .clicked()
            {
                if let Ok(mut v) = ERRORS_OPEN.write() {
                    *v = true;
                }
            }
        });
}

pub(super) fn draw_errors_viewport(ctx: &egui::Context) {
    let is_open = ERRORS_OPEN.read().map(|g| *g).unwrap_or(false);
    if !is_open {
        return;
    }

    let viewport_id = egui::ViewportId::from_hash_of("errors_window");
    ctx.show_viewport_deferred(
        viewport_id,
        egui::ViewportBuilder::default()
            .with_title(translate("errors-title"))
            .with_inner_size([640.0, 360.0])
            .with_resizable(true),
        move |ctx, _class| {
            if ctx.input(|i| i.viewport().close_requested()) {
                if let Ok(mut v) = ERRORS_OPEN.write() {
                    *v = false;
                }
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }

            egui::CentralPanel::default().show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button(translate("errors-clear")).clicked() {
                        if let Ok(mut q) = ERRORS.lock() {
                            q.clear();
                        }
                    }
                });
                ui.separator();
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for line in all_lines() {
                            ui.label(
                                egui::RichText::new(line)
                                    .monospace()
                                    .color(egui::Color32::from_rgb(230, 120, 120)),
                            );
                        }
                    });
            });
        },
    );
}
