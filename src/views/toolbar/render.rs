use eframe::egui::{self, RichText};

use super::items::sort_menu;
use crate::library::route;
use crate::localization::{translate, translate_with};
use crate::types::Sorting;

/// What the toolbar asked the app to do this frame.
#[derive(Default)]
pub struct ToolbarAction {
    /// History back.
    pub back: bool,
    /// Breadcrumb navigation target.
    pub navigate: Option<String>,
    pub sort_changed: bool,
    pub query_changed: bool,
    pub selection_toggled: bool,
    pub open_move: bool,
    pub open_settings: bool,
    pub open_logs: bool,
    pub open_about: bool,
}

/// Top panel: back button, breadcrumb, search, sort, selection controls and
/// window shortcuts. Pure input/output; the app applies the returned action.
pub fn draw_toolbar(
    ctx: &egui::Context,
    at_route: &str,
    can_go_back: bool,
    query: &mut String,
    sort: &mut Sorting,
    selection_active: &mut bool,
    selection_count: usize,
) -> ToolbarAction {
    let mut action = ToolbarAction::default();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let back = ui.add_enabled(can_go_back, egui::Button::new("◀"));
            if back.on_hover_text(translate("toolbar-back")).clicked() {
                action.back = true;
            }

            // Breadcrumb: app title is the root, then one button per segment.
            if ui
                .selectable_label(false, RichText::new(translate("app-title")).strong())
                .clicked()
            {
                action.navigate = Some(route::ROOT.to_string());
            }
            let mut prefix = route::ROOT.to_string();
            for segment in route::segments(at_route) {
                ui.label("/");
                prefix = route::child(&prefix, segment);
                if ui.selectable_label(false, segment).clicked() {
                    action.navigate = Some(prefix.clone());
                }
            }

            ui.separator();

            let search = ui.add(
                egui::TextEdit::singleline(query)
                    .hint_text(translate("toolbar-search-hint"))
                    .desired_width(180.0),
            );
            action.query_changed = search.changed();

            action.sort_changed = sort_menu(ui, sort);

            ui.separator();

            if ui
                .checkbox(selection_active, translate("toolbar-select"))
                .changed()
            {
                action.selection_toggled = true;
            }
            if *selection_active {
                ui.label(translate_with(
                    "selection-count",
                    &[("count", selection_count.to_string())],
                ));
                let move_btn =
                    ui.add_enabled(selection_count > 0, egui::Button::new(translate("toolbar-move")));
                if move_btn.clicked() {
                    action.open_move = true;
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(translate("toolbar-about")).clicked() {
                    action.open_about = true;
                }
                if ui.button(translate("toolbar-logs")).clicked() {
                    action.open_logs = true;
                }
                if ui.button(translate("toolbar-settings")).clicked() {
                    action.open_settings = true;
                }
            });
        });
        ui.add_space(4.0);
    });

    action
}
