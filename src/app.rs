// Application shell: state, the frame update loop, and auxiliary windows.
// Background work (scans, thumbnails) lives in the scan module; the grid and
// the move dialog are split out the same way.

use eframe::{egui, App};
use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::library::{route, FolderEntry};
use crate::localization::translate;
use crate::types::Sorting;
use crate::ui_constants::{CARD_GAP, CARD_WIDTH, SEARCH_DEBOUNCE_MS};
use crate::views::cards::SequentialIds;
use crate::views::toolbar::draw_toolbar;

mod about_ui;
mod errors_ui;
mod grid;
mod logs_ui;
mod move_dialog;
mod runtime;
mod scan;
pub mod settings;
mod state;

pub use runtime::rt;
use state::{ImagesState, RouterState, ScanState, SelectionState, UiState};

pub struct MediaDeskApp {
    router: RouterState,
    scan: ScanState,
    images: ImagesState,
    selection: SelectionState,
    ui: UiState,
}

impl Default for MediaDeskApp {
    fn default() -> Self {
        Self {
            router: RouterState::default(),
            scan: ScanState::new(),
            images: ImagesState::new(),
            selection: SelectionState::default(),
            ui: UiState::default(),
        }
    }
}

impl App for MediaDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Any new logs? keep the logs window fresh.
        if crate::logger::take_new_flag() {
            ctx.request_repaint();
        }

        self.poll_incoming(ctx);

        // First scan on startup.
        if self.scan.listing.is_none() && !self.scan.loading && self.scan.last_error.is_none() {
            self.start_scan(ctx);
        }

        self.schedule_cover_loads(ctx);

        // Title ids are render-scoped: a fresh provider every frame.
        let mut ids = SequentialIds::new();

        let selection_count = self.selection.selected.len();
        let mut selection_active = self.selection.active;
        let action = draw_toolbar(
            ctx,
            &self.router.current().to_string(),
            self.router.can_go_back(),
            &mut self.ui.query,
            &mut self.ui.sort,
            &mut selection_active,
            selection_count,
        );
        self.selection.active = selection_active;

        if action.selection_toggled && !self.selection.active {
            self.selection.clear();
        }
        if action.back && self.router.back() {
            log::info!("navigate back to {}", self.router.current());
            self.selection.clear();
            self.ui.move_dialog_open = false;
            self.refresh_window_title(ctx);
            self.start_scan(ctx);
        }
        if let Some(dest) = action.navigate {
            self.navigate_to(dest, ctx);
        }
        if action.query_changed {
            // Debounce: apply the query a moment after the last edit.
            self.ui.search_due_at =
                Some(Instant::now() + Duration::from_millis(SEARCH_DEBOUNCE_MS));
            ctx.request_repaint_after(Duration::from_millis(SEARCH_DEBOUNCE_MS));
        }
        if let Some(due) = self.ui.search_due_at {
            if Instant::now() >= due {
                self.ui.search_due_at = None;
                self.ui.applied_query = self.ui.query.clone();
            }
        }
        if action.open_move {
            self.ui.move_dialog_open = true;
        }
        if action.open_settings {
            settings::open_settings();
            ctx.request_repaint();
        }
        if action.open_logs {
            logs_ui::open_logs();
            ctx.request_repaint();
        }
        if action.open_about {
            about_ui::open_about();
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let avail_w = ui.available_width().floor();
                    let card_w = CARD_WIDTH;
                    let gap = CARD_GAP;
                    let mut cols = ((avail_w + gap) / (card_w + gap)).floor() as usize;
                    if cols == 0 {
                        cols = 1;
                    }
                    let row_w = (cols as f32) * card_w + ((cols - 1) as f32) * gap;
                    let left_pad = ((avail_w - row_w) / 2.0).max(0.0);

                    if let Some(err) = &self.scan.last_error {
                        ui.add_space(24.0);
                        ui.vertical_centered(|ui| {
                            ui.colored_label(
                                egui::Color32::RED,
                                format!("{}: {}", translate("error-prefix"), err),
                            );
                        });
                    } else if self.scan.loading && self.scan.listing.is_none() {
                        ui.add_space(24.0);
                        ui.vertical_centered(|ui| {
                            ui.add(egui::Spinner::new());
                            ui.label(translate("loading"));
                        });
                    } else if self.scan.listing.is_some() {
                        let display = self.display_entries();
                        if display.is_empty() {
                            ui.add_space(24.0);
                            ui.vertical_centered(|ui| {
                                ui.label(translate("empty-folder"));
                            });
                        } else {
                            self.draw_folder_grid(
                                ui, ctx, &display, cols, left_pad, gap, card_w, &mut ids,
                            );
                        }
                    }
                });
        });

        self.draw_move_dialog(ctx, &mut ids);

        errors_ui::draw_errors_button(ctx);
        errors_ui::draw_errors_viewport(ctx);
        logs_ui::draw_logs_viewport(ctx);
        about_ui::draw_about_viewport(ctx);
        settings::draw_settings_viewport(ctx);
    }
}

impl MediaDeskApp {
    fn navigate_to(&mut self, dest: String, ctx: &egui::Context) {
        if dest == self.router.current() {
            return;
        }
        log::info!("navigate to {}", dest);
        self.router.push(dest);
        self.selection.clear();
        self.ui.move_dialog_open = false;
        self.refresh_window_title(ctx);
        self.start_scan(ctx);
    }

    fn refresh_window_title(&self, ctx: &egui::Context) {
        let title = match route::leaf_name(self.router.current()) {
            Some(name) => format!("{} - {}", translate("app-title"), name),
            None => translate("app-title"),
        };
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(title));
    }

    /// Current listing filtered by hidden routes and the applied query, in
    /// the selected sort order.
    fn display_entries(&self) -> Vec<FolderEntry> {
        let Some(listing) = &self.scan.listing else {
            return Vec::new();
        };

        let hidden: HashSet<String> =
            settings::with_settings(|st| st.hidden_routes.iter().cloned().collect());
        let query = self.ui.applied_query.to_lowercase();

        let mut display: Vec<FolderEntry> = listing
            .entries()
            .iter()
            .filter(|e| !hidden.contains(e.route()))
            .filter(|e| query.is_empty() || e.name().to_lowercase().contains(&query))
            .cloned()
            .collect();

        match self.ui.sort {
            Sorting::Name => {
                display.sort_by(|a, b| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
            }
            Sorting::Modified => display.sort_by(|a, b| b.modified().cmp(a.modified())),
            Sorting::Assets => display.sort_by(|a, b| b.assets().cmp(a.assets())),
            Sorting::Subfolders => display.sort_by(|a, b| b.subfolders().cmp(a.subfolders())),
        }

        display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{route, scan_listing};
    use std::fs::{self, File};

    fn app_with_listing(tmp: &tempfile::TempDir) -> MediaDeskApp {
        let mut app = MediaDeskApp::default();
        app.scan.listing = Some(scan_listing(tmp.path(), route::ROOT).unwrap());
        app
    }

    fn fixture() -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["Art", "Music", "Archive"] {
            fs::create_dir(tmp.path().join(name)).unwrap();
        }
        File::create(tmp.path().join("Music").join("a.mp3")).unwrap();
        tmp
    }

    #[test]
    fn display_entries_filter_by_query() {
        let tmp = fixture();
        let mut app = app_with_listing(&tmp);
        app.ui.applied_query = "mus".to_string();
        let shown = app.display_entries();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].name(), "Music");
    }

    #[test]
    fn display_entries_sort_by_assets() {
        let tmp = fixture();
        let mut app = app_with_listing(&tmp);
        app.ui.sort = Sorting::Assets;
        let shown = app.display_entries();
        assert_eq!(shown[0].name(), "Music", "most assets first");
    }

    #[test]
    fn display_entries_skip_hidden_routes() {
        let tmp = fixture();
        let app = app_with_listing(&tmp);
        settings::with_settings_mut(|st| st.hidden_routes.push("/library/Archive".to_string()));
        let shown = app.display_entries();
        settings::with_settings_mut(|st| st.hidden_routes.clear());
        assert!(shown.iter().all(|e| e.name() != "Archive"));
        assert_eq!(shown.len(), 2);
    }
}
