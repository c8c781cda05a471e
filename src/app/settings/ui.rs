// Settings viewport (separate OS window). Edits go into a draft and are
// applied to the store only on Save.

use eframe::egui;
use lazy_static::lazy_static;
use std::path::PathBuf;
use std::sync::Mutex;

use super::store::{save_settings_to_disk, APP_SETTINGS};
use crate::localization::{self, translate, SupportedLang};

struct SettingsDraft {
    library_root: String,
    cache_dir: String,
    thumbnails: bool,
    language: Option<SupportedLang>,
    saved: bool,
}

impl SettingsDraft {
    fn from_store() -> Self {
        let st = APP_SETTINGS.read().unwrap();
        Self {
            library_root: st.library_root.display().to_string(),
            cache_dir: st.cache_dir.display().to_string(),
            thumbnails: st.thumbnails,
            language: st.language,
            saved: false,
        }
    }
}

lazy_static! {
    static ref DRAFT: Mutex<Option<SettingsDraft>> = Mutex::new(None);
}

pub fn open_settings() {
    let mut draft = DRAFT.lock().unwrap();
    if draft.is_none() {
        *draft = Some(SettingsDraft::from_store());
    }
}

pub fn draw_settings_viewport(ctx: &egui::Context) {
    if DRAFT.lock().unwrap().is_none() {
        return;
    }

    let viewport_id = egui::ViewportId::from_hash_of("settings_window");
    ctx.show_viewport_deferred(
        viewport_id,
        egui::ViewportBuilder::default()
            .with_title(translate("settings-title"))
            .with_inner_size([460.0, 280.0])
            .with_resizable(false),
        move |ctx, _class| {
            if ctx.input(|i| i.viewport().close_requested()) {
                *DRAFT.lock().unwrap() = None;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                return;
            }

            egui::CentralPanel::default().show(ctx, |ui| {
                let mut guard = DRAFT.lock().unwrap();
                let Some(draft) = guard.as_mut() else {
                    return;
                };

                egui::Grid::new("settings_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label(translate("settings-library-root"));
                        ui.text_edit_singleline(&mut draft.library_root);
                        ui.end_row();

                        ui.label(translate("settings-cache-dir"));
                        ui.text_edit_singleline(&mut draft.cache_dir);
                        ui.end_row();

                        ui.label(translate("settings-thumbnails"));
                        ui.checkbox(&mut draft.thumbnails, "");
                        ui.end_row();

                        ui.label(translate("settings-language"));
                        let current = match draft.language {
                            None => translate("settings-language-auto"),
                            Some(lang) => lang.code().to_string(),
                        };
                        egui::ComboBox::from_id_source("settings_language")
                            .selected_text(current)
                            .show_ui(ui, |ui| {
                                ui.selectable_value(
                                    &mut draft.language,
                                    None,
                                    translate("settings-language-auto"),
                                );
                                for lang in [SupportedLang::En, SupportedLang::Fr] {
                                    ui.selectable_value(
                                        &mut draft.language,
                                        Some(lang),
                                        lang.code(),
                                    );
                                }
                            });
                        ui.end_row();
                    });

                let hidden_count = APP_SETTINGS.read().unwrap().hidden_routes.len();
                if hidden_count > 0 {
                    ui.add_space(8.0);
                    let label = crate::localization::translate_with(
                        "settings-clear-hidden",
                        &[("count", hidden_count.to_string())],
                    );
                    if ui.button(label).clicked() {
                        super::store::clear_hidden();
                    }
                }

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui.button(translate("settings-save")).clicked() {
                        super::with_settings_mut(|st| {
                            st.library_root = PathBuf::from(draft.library_root.trim());
                            st.cache_dir = PathBuf::from(draft.cache_dir.trim());
                            st.thumbnails = draft.thumbnails;
                            st.language = draft.language;
                        });
                        save_settings_to_disk();
                        localization::initialize_localization(draft.language);
                        draft.saved = true;
                        log::info!("settings saved");
                    }
                    if draft.saved {
                        ui.label(translate("settings-saved"));
                    }
                });
            });
        },
    );
}
