use eframe::egui::{self, Color32, RichText, Rounding};

use crate::library::FolderEntry;
use crate::localization::translate_with;
use crate::ui_constants::card;

/// Single-line summary plaque: subfolder count, asset count, kind badges.
pub fn draw_folder_meta(ui: &mut egui::Ui, entry: &FolderEntry) {
    egui::Frame::none()
        .fill(Color32::from_rgba_premultiplied(28, 28, 28, 180))
        .rounding(Rounding::same(card::META_ROUNDING))
        .inner_margin(egui::Margin::symmetric(
            card::META_MARGIN_H,
            card::META_MARGIN_V,
        ))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 8.0;
                let col = Color32::from_rgb(170, 170, 170);

                let folders = translate_with(
                    "meta-subfolders",
                    &[("count", entry.subfolders().to_string())],
                );
                let assets =
                    translate_with("meta-assets", &[("count", entry.assets().to_string())]);
                ui.label(RichText::new(folders).small().color(col));
                ui.label(RichText::new(assets).small().color(col));
                let badges = entry.kinds().glyphs();
                if !badges.is_empty() {
                    ui.label(RichText::new(badges).small().color(col));
                }
            });
        });
}
