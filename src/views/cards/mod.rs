// Facade for cards: primitives, accessibility plumbing, and sizing helpers
// shared between the browse grid and the move-to-folder picker.

pub mod items;

pub use items::a11y::{CardMode, FixedIds, SequentialIds, TitleIdProvider};
pub use items::{
    draw_folder_meta, folder_card, folder_card_body, folder_card_body_action,
    folder_card_checkbox, folder_card_title, FolderCardContext, FolderCardProps,
    FolderCardResponse,
};

pub use crate::ui_constants::CARD_WIDTH;

use crate::ui_constants::{card, spacing};
use eframe::egui;

/// Deterministic card height for a given width, used both by the card itself
/// and by grid virtualization.
pub fn folder_card_height(ui: &egui::Ui, width: f32, with_cover: bool) -> f32 {
    let heading_h = ui.text_style_height(&egui::TextStyle::Heading);
    let small_h = ui.text_style_height(&egui::TextStyle::Small);
    let inner_w = width - 2.0 * card::INNER_MARGIN;
    let cover_h = if with_cover {
        inner_w / card::COVER_ASPECT + card::POST_COVER_GAP
    } else {
        0.0
    };
    2.0 * card::INNER_MARGIN
        + cover_h
        + heading_h
        + spacing::SMALL
        + (small_h + 2.0 * card::META_MARGIN_V)
}
