use eframe::egui::{self, Checkbox};

use super::folder_card::FolderCardContext;

/// Leading selection control. Renders no text of its own; when the card
/// generated a title id, that title becomes the checkbox's accessible name.
pub fn folder_card_checkbox(
    ui: &mut egui::Ui,
    cx: &FolderCardContext,
    checked: &mut bool,
) -> egui::Response {
    let resp = ui.add(Checkbox::without_text(checked));
    match &cx.title_id {
        Some(title_id) => resp.labelled_by(egui::Id::new(title_id.as_str())),
        None => resp,
    }
}
