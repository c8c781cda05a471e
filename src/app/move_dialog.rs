// "Move to folder" modal: destination folders are rendered as plain action
// cards (no route), so activating one performs the move instead of navigating.

use eframe::egui;

use crate::library::{route, FolderEntry};
use crate::localization::{translate, translate_with};
use crate::ui_constants::{spacing, PICKER_CARD_WIDTH};
use crate::views::cards::{
    folder_card, folder_card_body, folder_card_height, folder_card_title, FolderCardProps,
    SequentialIds,
};

impl super::MediaDeskApp {
    pub(super) fn draw_move_dialog(&mut self, ctx: &egui::Context, ids: &mut SequentialIds) {
        if !self.ui.move_dialog_open {
            return;
        }

        let candidates: Vec<FolderEntry> = self
            .scan
            .listing
            .as_ref()
            .map(|l| {
                l.entries()
                    .iter()
                    .filter(|e| !self.selection.selected.contains(e.route()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        let title = translate_with(
            "move-dialog-title",
            &[("count", self.selection.selected.len().to_string())],
        );

        let mut open = true;
        let mut picked: Option<FolderEntry> = None;
        let mut cancel = false;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                if candidates.is_empty() {
                    ui.label(translate("move-dialog-empty"));
                } else {
                    let card_h = folder_card_height(ui, PICKER_CARD_WIDTH, false);
                    egui::ScrollArea::vertical()
                        .max_height(320.0)
                        .show(ui, |ui| {
                            for entry in &candidates {
                                let aria_label = translate_with(
                                    "card-aria-folder",
                                    &[("name", entry.name().clone())],
                                );
                                let props = FolderCardProps {
                                    id: entry.name(),
                                    aria_label: &aria_label,
                                    to: None,
                                    width: PICKER_CARD_WIDTH,
                                    height: card_h,
                                };
                                let mut activated = false;
                                folder_card(
                                    ui,
                                    &props,
                                    ids,
                                    &mut || activated = true,
                                    None,
                                    |ui, cx| {
                                        folder_card_body(ui, cx, |ui, cx| {
                                            folder_card_title(ui, cx, entry.name());
                                        });
                                    },
                                );
                                if activated {
                                    picked = Some(entry.clone());
                                }
                                ui.add_space(spacing::MEDIUM);
                            }
                        });
                }
                ui.add_space(spacing::SMALL);
                if ui.button(translate("move-dialog-cancel")).clicked() {
                    cancel = true;
                }
            });

        if let Some(dest) = picked {
            self.move_selection_into(&dest, ctx);
        } else if cancel || !open {
            self.ui.move_dialog_open = false;
        }
    }

    fn move_selection_into(&mut self, dest: &FolderEntry, ctx: &egui::Context) {
        let root = super::settings::with_settings(|st| st.library_root.clone());

        for selected in self.selection.selected.clone() {
            let source = root.join(route::rel_path(&selected));
            if !super::settings::folder_exists(&source) {
                log::warn!("skipping move of vanished folder {}", selected);
                continue;
            }
            let Some(file_name) = source.file_name() else {
                continue;
            };
            let target = dest.path().join(file_name);
            match std::fs::rename(&source, &target) {
                Ok(()) => log::info!("moved {} into {}", selected, dest.route()),
                Err(err) => {
                    let msg = format!("move of {} failed: {}", selected, err);
                    log::warn!("{}", msg);
                    super::errors_ui::append_error(msg);
                }
            }
        }

        self.selection.clear();
        self.ui.move_dialog_open = false;
        self.start_scan(ctx);
    }
}
