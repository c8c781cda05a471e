use eframe::egui::{self, Color32};
use strum::IntoEnumIterator;

use crate::localization::translate;
use crate::types::Sorting;
use crate::views::toolbar::EnumWithGlyph;
use crate::views::ui_helpers::{clicked_outside, popup_rounding, show_popup_area};

/// Sort selector button with a dropdown of all orders. Returns true when the
/// selection changed.
pub fn sort_menu(ui: &mut egui::Ui, sort: &mut Sorting) -> bool {
    let open_id = ui.make_persistent_id("sort_menu_open");
    let mut is_open = ui
        .memory(|m| m.data.get_temp::<bool>(open_id))
        .unwrap_or(false);

    let button = ui.button(format!("{} {}", sort.glyph(), translate(sort.l10n_key())));
    if button.clicked() {
        is_open = !is_open;
    }

    let mut changed = false;
    if is_open {
        let pos = egui::pos2(button.rect.min.x, button.rect.max.y + 4.0);
        let inner = show_popup_area(
            ui,
            open_id.with("area"),
            pos,
            180.0,
            Color32::from_gray(60),
            popup_rounding(),
            |ui| {
                for variant in Sorting::iter() {
                    let label = format!("{} {}", variant.glyph(), translate(variant.l10n_key()));
                    if ui.selectable_label(variant == *sort, label).clicked() {
                        *sort = variant;
                        changed = true;
                    }
                }
            },
        );

        if changed || clicked_outside(ui, &[button.rect, inner.response.rect]) {
            is_open = false;
        }
    }

    ui.memory_mut(|m| m.data.insert_temp(open_id, is_open));
    changed
}
