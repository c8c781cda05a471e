use eframe::egui::{self, Color32, Rounding, Stroke};

/// Common popup area with consistent styling (Area + Frame + width),
/// returns Area::show inner response so callers can use `inner.response.rect`.
pub fn show_popup_area<F>(
    ui: &egui::Ui,
    popup_id: egui::Id,
    pos: egui::Pos2,
    popup_width: f32,
    border_color: egui::Color32,
    rounding: egui::Rounding,
    content: F,
) -> egui::InnerResponse<egui::InnerResponse<()>>
where
    F: FnOnce(&mut egui::Ui),
{
    egui::Area::new(popup_id)
        .order(egui::Order::Foreground)
        .fixed_pos(pos)
        .show(ui.ctx(), |ui| {
            egui::Frame::default()
                .fill(Color32::from_rgb(28, 28, 28))
                .stroke(Stroke::new(1.0, border_color))
                .rounding(rounding)
                .show(ui, |ui| {
                    ui.set_min_width(popup_width);
                    content(ui);
                })
        })
}

pub fn clicked_outside(ui: &egui::Ui, avoid_rects: &[egui::Rect]) -> bool {
    ui.input(|i| {
        i.pointer.any_click()
            && i.pointer
                .latest_pos()
                .map_or(false, |p| !avoid_rects.iter().any(|r| r.contains(p)))
    })
}

/// Default rounding for popups spawned from toolbar buttons.
pub fn popup_rounding() -> Rounding {
    Rounding::same(6.0)
}
