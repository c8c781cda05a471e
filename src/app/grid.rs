// Virtualized grid of folder cards: only rows intersecting the viewport are
// laid out, with a small overscan for smooth scrolling.

use eframe::egui;

use crate::library::FolderEntry;
use crate::localization::{translate, translate_with};
use crate::ui_constants::{card, spacing};
use crate::views::cards::{
    draw_folder_meta, folder_card, folder_card_body, folder_card_body_action,
    folder_card_checkbox, folder_card_height, folder_card_title, FolderCardContext,
    FolderCardProps, SequentialIds,
};

impl super::MediaDeskApp {
    fn card_cell(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        entry: &FolderEntry,
        card_w: f32,
        card_h: f32,
        gap: f32,
        c: usize,
        cols: usize,
        ids: &mut SequentialIds,
    ) {
        let aria_label = translate_with("card-aria-folder", &[("name", entry.name().clone())]);
        let dest = entry.route().clone();
        let cover = self.images.covers.get(entry.route()).cloned();

        let selection_active = self.selection.active;
        let mut checked = self.selection.selected.contains(entry.route());
        let mut toggled = false;
        let mut start_fn = |ui: &mut egui::Ui, cx: &FolderCardContext| {
            if folder_card_checkbox(ui, cx, &mut checked).changed() {
                toggled = true;
            }
        };
        let start_slot: Option<&mut dyn FnMut(&mut egui::Ui, &FolderCardContext)> =
            if selection_active {
                Some(&mut start_fn)
            } else {
                None
            };

        let mut title_clicked = false;
        let mut navigate: Option<String> = None;

        ui.vertical(|ui| {
            ui.set_min_width(card_w);
            ui.set_max_width(card_w);

            let props = FolderCardProps {
                id: entry.name(),
                aria_label: &aria_label,
                to: Some(&dest),
                width: card_w,
                height: card_h,
            };

            let resp = folder_card(ui, &props, ids, &mut || {}, start_slot, |ui, cx| {
                folder_card_body(ui, cx, |ui, cx| {
                    if let Some(tex) = &cover {
                        let inner_w = card_w - 2.0 * card::INNER_MARGIN;
                        let size = egui::vec2(inner_w, inner_w / card::COVER_ASPECT);
                        ui.add(
                            egui::Image::new(tex)
                                .fit_to_exact_size(size)
                                .rounding(egui::Rounding::same(card::ROUNDING / 2.0)),
                        );
                        ui.add_space(card::POST_COVER_GAP);
                    }
                    let title = folder_card_body_action(ui, Some(&dest), |ui| {
                        folder_card_title(ui, cx, entry.name());
                    });
                    title_clicked = title.clicked();
                    ui.add_space(spacing::SMALL);
                    draw_folder_meta(ui, entry);
                });
            });

            resp.response.context_menu(|ui| {
                if !super::settings::is_folder_hidden(entry.route())
                    && ui.button(translate("card-hide")).clicked()
                {
                    super::settings::hide_folder(entry.route());
                    ctx.request_repaint();
                    ui.close_menu();
                }
                if ui.button(translate("card-reveal")).clicked() {
                    super::settings::reveal_in_file_manager(entry.path());
                    ui.close_menu();
                }
            });

            if let Some(to) = resp.navigation() {
                navigate = Some(to.to_string());
            }
        });

        if toggled {
            self.selection.toggle(entry.route());
        }
        if let Some(to) = navigate.or_else(|| title_clicked.then(|| dest.clone())) {
            self.navigate_to(to, ctx);
        }

        if c + 1 < cols {
            ui.add_space(gap);
        }
    }

    pub(super) fn draw_folder_grid(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        entries: &[FolderEntry],
        cols: usize,
        left_pad: f32,
        gap: f32,
        card_w: f32,
        ids: &mut SequentialIds,
    ) {
        let total_items = entries.len();
        if total_items == 0 || cols == 0 {
            return;
        }
        let cols = cols.max(1);
        let total_rows = (total_items + cols - 1) / cols;

        let with_covers = super::settings::with_settings(|st| st.thumbnails);
        let card_h = folder_card_height(ui, card_w, with_covers);
        let row_h = card_h + gap;

        // Visible row window within the clip rect, plus overscan.
        let start_y = ui.cursor().min.y;
        let clip = ui.clip_rect();
        let overscan: isize = 2;
        let first_row = (((clip.top() - start_y) / row_h).floor() as isize - overscan).max(0);
        let last_row =
            (((clip.bottom() - start_y) / row_h).ceil() as isize + overscan).min(total_rows as isize);
        let start_row = first_row as usize;
        let end_row = last_row as usize;

        let top_skip = (start_row as f32) * row_h;
        if top_skip > 0.0 {
            ui.add_space(top_skip);
        }

        for r in start_row..end_row {
            ui.horizontal(|ui| {
                ui.add_space(left_pad);
                let base = r * cols;
                for c in 0..cols {
                    if let Some(entry) = entries.get(base + c) {
                        let entry = entry.clone();
                        self.card_cell(ui, ctx, &entry, card_w, card_h, gap, c, cols, ids);
                    }
                }
            });
            // Constant spacing after every row keeps the total height stable.
            ui.add_space(gap);
        }

        let rendered_rows = end_row.saturating_sub(start_row) as f32;
        let total_h = (total_rows as f32) * row_h;
        let bottom_skip = (total_h - (top_skip + rendered_rows * row_h)).max(0.0);
        if bottom_skip > 0.0 {
            ui.add_space(bottom_skip);
        }
    }
}
