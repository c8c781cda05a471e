// Toolbar: breadcrumb navigation, search, sorting, and selection controls.

mod items;
mod render;

pub use render::{draw_toolbar, ToolbarAction};

/// Enums that render with a compact glyph next to their label.
pub trait EnumWithGlyph {
    fn glyph(&self) -> &'static str;
}
