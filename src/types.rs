use serde::{Deserialize, Serialize};

use crate::views::toolbar::EnumWithGlyph;

#[derive(
    strum::EnumCount,
    strum::EnumIter,
    strum::Display,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Default,
    Debug,
    Serialize,
    Deserialize,
)]
pub enum Sorting {
    #[default]
    Name,
    Modified,
    Assets,
    Subfolders,
}

impl EnumWithGlyph for Sorting {
    fn glyph(&self) -> &'static str {
        use Sorting::*;
        match self {
            Name => "🔤",
            Modified => "🕓",
            Assets => "🖼",
            Subfolders => "📁",
        }
    }
}

impl Sorting {
    /// Localization key for the toolbar sort menu.
    pub fn l10n_key(&self) -> &'static str {
        match self {
            Sorting::Name => "sort-name",
            Sorting::Modified => "sort-modified",
            Sorting::Assets => "sort-assets",
            Sorting::Subfolders => "sort-subfolders",
        }
    }
}
