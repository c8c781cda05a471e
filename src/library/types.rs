use bitflags::bitflags;
use derive_getters::Getters;
use std::path::PathBuf;
use std::time::SystemTime;

bitflags! {
    /// Kinds of assets found inside a folder, used for card badges.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AssetKinds: u8 {
        const IMAGE = 1;
        const VIDEO = 1 << 1;
        const AUDIO = 1 << 2;
        const DOCUMENT = 1 << 3;
        const ARCHIVE = 1 << 4;
    }
}

impl AssetKinds {
    /// Classify a file by its lowercase extension. Unknown extensions count
    /// as documents so the asset total stays honest.
    pub fn classify(ext: &str) -> AssetKinds {
        match ext {
            "jpg" | "jpeg" | "png" | "gif" | "webp" | "bmp" | "svg" | "tiff" => AssetKinds::IMAGE,
            "mp4" | "mkv" | "webm" | "avi" | "mov" | "m4v" => AssetKinds::VIDEO,
            "mp3" | "ogg" | "flac" | "wav" | "m4a" | "opus" => AssetKinds::AUDIO,
            "zip" | "rar" | "7z" | "tar" | "gz" | "xz" => AssetKinds::ARCHIVE,
            _ => AssetKinds::DOCUMENT,
        }
    }

    /// Whether the extension is a cover thumbnail candidate.
    pub fn is_cover_ext(ext: &str) -> bool {
        matches!(ext, "jpg" | "jpeg" | "png" | "gif" | "webp" | "bmp")
    }

    pub fn glyphs(&self) -> String {
        let mut out = String::new();
        for (flag, glyph) in [
            (AssetKinds::IMAGE, "🖼"),
            (AssetKinds::VIDEO, "🎬"),
            (AssetKinds::AUDIO, "🎵"),
            (AssetKinds::DOCUMENT, "📄"),
            (AssetKinds::ARCHIVE, "📦"),
        ] {
            if self.contains(flag) {
                out.push_str(glyph);
            }
        }
        out
    }
}

/// One subfolder of a scanned location.
#[derive(Debug, Clone, Getters)]
pub struct FolderEntry {
    pub(crate) name: String,
    pub(crate) path: PathBuf,
    pub(crate) route: String,
    pub(crate) subfolders: usize,
    pub(crate) assets: usize,
    pub(crate) kinds: AssetKinds,
    pub(crate) modified: Option<SystemTime>,
    pub(crate) cover: Option<PathBuf>,
}

/// Scanned children of one location; the unit the scan pipeline sends to the UI.
#[derive(Debug, Clone, Getters)]
pub struct FolderListing {
    pub(crate) route: String,
    pub(crate) entries: Vec<FolderEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_extensions() {
        assert_eq!(AssetKinds::classify("jpg"), AssetKinds::IMAGE);
        assert_eq!(AssetKinds::classify("mkv"), AssetKinds::VIDEO);
        assert_eq!(AssetKinds::classify("flac"), AssetKinds::AUDIO);
        assert_eq!(AssetKinds::classify("7z"), AssetKinds::ARCHIVE);
        assert_eq!(AssetKinds::classify("pdf"), AssetKinds::DOCUMENT);
        assert_eq!(AssetKinds::classify("xyz"), AssetKinds::DOCUMENT);
    }

    #[test]
    fn glyphs_follow_flag_order() {
        let kinds = AssetKinds::IMAGE | AssetKinds::AUDIO;
        assert_eq!(kinds.glyphs(), "🖼🎵");
        assert_eq!(AssetKinds::empty().glyphs(), "");
    }
}
