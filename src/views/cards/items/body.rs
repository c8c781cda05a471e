use eframe::egui::{self, RichText, Sense, WidgetInfo, WidgetType};

use super::folder_card::FolderCardContext;

/// Main column of the card body.
pub fn folder_card_body(
    ui: &mut egui::Ui,
    cx: &FolderCardContext,
    add_contents: impl FnOnce(&mut egui::Ui, &FolderCardContext),
) -> egui::Response {
    ui.vertical(|ui| add_contents(ui, cx)).response
}

/// Card title. When the card allocated a title id, the label is re-exposed
/// under that id so start actions can point their labelled-by relation at it.
pub fn folder_card_title(
    ui: &mut egui::Ui,
    cx: &FolderCardContext,
    text: &str,
) -> egui::Response {
    let label = ui.label(
        RichText::new(text)
            .heading()
            .color(egui::Color32::from_rgb(230, 230, 230)),
    );

    if let Some(title_id) = &cx.title_id {
        let title = ui.interact(label.rect, egui::Id::new(title_id.as_str()), Sense::hover());
        title.widget_info(|| WidgetInfo::labeled(WidgetType::Label, true, text));
        return title;
    }
    label
}

/// Nested clickable region inside the body (e.g. the title row). Reports
/// activation through the returned response; the caller decides what the
/// optional destination means.
pub fn folder_card_body_action(
    ui: &mut egui::Ui,
    to: Option<&str>,
    add_contents: impl FnOnce(&mut egui::Ui),
) -> egui::Response {
    let inner = ui.scope(add_contents);
    let resp = ui.interact(
        inner.response.rect,
        ui.id().with("body-action"),
        Sense::click(),
    );
    if to.is_some() {
        resp.on_hover_cursor(egui::CursorIcon::PointingHand)
    } else {
        resp
    }
}
