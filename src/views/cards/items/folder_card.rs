use eframe::egui::{self, Color32, CursorIcon, Rounding, Sense, Stroke, WidgetInfo, WidgetType};

use super::a11y::{CardMode, TitleIdProvider};
use crate::ui_constants::card;

/// Context handed to the card's slots. Carries the generated title id when a
/// start action is present so slots can wire labelled-by relations to it.
pub struct FolderCardContext {
    pub title_id: Option<String>,
}

pub struct FolderCardProps<'a> {
    /// Base for the generated title id; must be unique among sibling cards.
    pub id: &'a str,
    /// Accessible name of the card region.
    pub aria_label: &'a str,
    /// Destination route; present = link mode, absent = button mode.
    pub to: Option<&'a str>,
    pub width: f32,
    pub height: f32,
}

pub struct FolderCardResponse {
    /// Response of the card region (the framed area).
    pub response: egui::Response,
    pub mode: CardMode,
    pub clicked: bool,
    pub title_id: Option<String>,
}

impl FolderCardResponse {
    /// Destination route, set when the card was activated in link mode.
    pub fn navigation(&self) -> Option<&str> {
        match (&self.mode, self.clicked) {
            (CardMode::Link(dest), true) => Some(dest),
            _ => None,
        }
    }

    /// The link destination regardless of activation, if any.
    pub fn destination(&self) -> Option<&str> {
        match &self.mode {
            CardMode::Link(dest) => Some(dest),
            CardMode::Button => None,
        }
    }
}

/// Interactive folder card. Fixed-size so grids can virtualize rows; the
/// whole card is the activation target while widgets rendered inside it
/// (start action, nested body actions) keep pointer priority.
pub fn folder_card(
    ui: &mut egui::Ui,
    props: &FolderCardProps<'_>,
    ids: &mut dyn TitleIdProvider,
    on_click: &mut dyn FnMut(),
    start_action: Option<&mut dyn FnMut(&mut egui::Ui, &FolderCardContext)>,
    children: impl FnOnce(&mut egui::Ui, &FolderCardContext),
) -> FolderCardResponse {
    let mode = CardMode::resolve(props.to);

    // The id pair only exists while a start action is rendered.
    let title_id = start_action
        .as_ref()
        .map(|_| format!("{}-title", ids.allocate(props.id)));
    let cx = FolderCardContext {
        title_id: title_id.clone(),
    };

    ui.set_min_width(props.width);
    ui.set_max_width(props.width);

    // Register the activation hit area before the content so the checkbox
    // and nested actions win pointer priority over it.
    let rect = egui::Rect::from_min_size(ui.cursor().min, egui::vec2(props.width, props.height));
    let hit = ui.interact(rect, ui.id().with((props.id, "activate")), Sense::click());
    let hit = match &mode {
        CardMode::Link(_) => {
            hit.widget_info(|| WidgetInfo::labeled(WidgetType::Link, true, props.aria_label));
            hit.on_hover_cursor(CursorIcon::PointingHand)
        }
        // No widget info on purpose: the hit area stays invisible to
        // assistive tech, the labelled card region carries the semantics.
        CardMode::Button => hit,
    };
    let clicked = hit.clicked();

    let fill = if hit.hovered() {
        Color32::from_rgb(44, 44, 44)
    } else {
        Color32::from_rgb(36, 36, 36)
    };
    let stroke = Stroke::new(1.0, Color32::from_rgb(64, 64, 64));

    let frame_out = egui::Frame::none()
        .fill(fill)
        .stroke(stroke)
        .rounding(Rounding::same(card::ROUNDING))
        .inner_margin(egui::Margin::symmetric(card::INNER_MARGIN, card::INNER_MARGIN))
        .show(ui, |ui| {
            ui.set_width(props.width - 2.0 * card::INNER_MARGIN);
            ui.set_min_height(props.height - 2.0 * card::INNER_MARGIN);
            ui.push_id(props.id, |ui| {
                ui.horizontal_top(|ui| {
                    if let Some(start) = start_action {
                        start(ui, &cx);
                    }
                    ui.vertical(|ui| children(ui, &cx));
                });
            });
        });

    // The card region carries the accessible name in both modes.
    frame_out
        .response
        .widget_info(|| WidgetInfo::labeled(WidgetType::Other, true, props.aria_label));

    if clicked {
        on_click();
    }

    FolderCardResponse {
        response: frame_out.response,
        mode,
        clicked,
        title_id,
    }
}
