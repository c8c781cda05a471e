pub mod cards;
pub mod toolbar;
pub mod ui_helpers;
