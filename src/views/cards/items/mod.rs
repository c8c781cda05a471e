// Facade module for card building blocks.
pub mod a11y;
mod body;
mod checkbox;
mod folder_card;
mod meta_row;
#[cfg(test)]
mod tests;

pub use body::{folder_card_body, folder_card_body_action, folder_card_title};
pub use checkbox::folder_card_checkbox;
pub use folder_card::{folder_card, FolderCardContext, FolderCardProps, FolderCardResponse};
pub use meta_row::draw_folder_meta;
