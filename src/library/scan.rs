// Filesystem scan of one library location: each child directory becomes a
// FolderEntry with its own content summary and cover candidate.

use std::fs;
use std::path::Path;

use super::error::ScanError;
use super::route;
use super::types::{AssetKinds, FolderEntry, FolderListing};

/// Scan the children of `location` (the absolute path the given route maps to).
/// Dot-entries are skipped; entries come back sorted by name.
pub fn scan_listing(location: &Path, at_route: &str) -> Result<FolderListing, ScanError> {
    if !location.exists() {
        return Err(ScanError::Missing(location.to_path_buf()));
    }
    if !location.is_dir() {
        return Err(ScanError::NotADirectory(location.to_path_buf()));
    }

    let read = fs::read_dir(location).map_err(|source| ScanError::Io {
        path: location.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for dir_entry in read {
        let dir_entry = dir_entry.map_err(|source| ScanError::Io {
            path: location.to_path_buf(),
            source,
        })?;
        let name = dir_entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        let path = dir_entry.path();
        if !path.is_dir() {
            continue;
        }

        let summary = summarize_dir(&path)?;
        entries.push(FolderEntry {
            route: route::child(at_route, &name),
            name,
            path,
            subfolders: summary.subfolders,
            assets: summary.assets,
            kinds: summary.kinds,
            modified: summary.modified,
            cover: summary.cover,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(FolderListing {
        route: at_route.to_string(),
        entries,
    })
}

struct DirSummary {
    subfolders: usize,
    assets: usize,
    kinds: AssetKinds,
    modified: Option<std::time::SystemTime>,
    cover: Option<std::path::PathBuf>,
}

fn summarize_dir(dir: &Path) -> Result<DirSummary, ScanError> {
    let read = fs::read_dir(dir).map_err(|source| ScanError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut subfolders = 0;
    let mut assets = 0;
    let mut kinds = AssetKinds::empty();
    let mut cover_candidates: Vec<std::path::PathBuf> = Vec::new();

    for child in read.flatten() {
        let name = child.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        let path = child.path();
        if path.is_dir() {
            subfolders += 1;
            continue;
        }
        assets += 1;
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        kinds |= AssetKinds::classify(&ext);
        if AssetKinds::is_cover_ext(&ext) {
            cover_candidates.push(path);
        }
    }

    // First image by name keeps covers stable across rescans.
    cover_candidates.sort();

    let modified = fs::metadata(dir).ok().and_then(|m| m.modified().ok());

    Ok(DirSummary {
        subfolders,
        assets,
        kinds,
        modified,
        cover: cover_candidates.into_iter().next(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    fn fixture_tree() -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();

        let pictures = root.join("Pictures");
        fs::create_dir(&pictures).unwrap();
        touch(&pictures.join("b.png"));
        touch(&pictures.join("a.jpg"));
        touch(&pictures.join("notes.txt"));
        fs::create_dir(pictures.join("Holidays")).unwrap();

        let music = root.join("Music");
        fs::create_dir(&music).unwrap();
        touch(&music.join("song.mp3"));

        fs::create_dir(root.join(".thumbs")).unwrap();
        touch(&root.join("stray.txt"));
        tmp
    }

    #[test]
    fn lists_folders_sorted_with_summaries() {
        let tmp = fixture_tree();
        let listing = scan_listing(tmp.path(), route::ROOT).unwrap();

        assert_eq!(listing.route(), route::ROOT);
        let names: Vec<_> = listing.entries().iter().map(|e| e.name().clone()).collect();
        assert_eq!(names, vec!["Music", "Pictures"]);

        let pictures = &listing.entries()[1];
        assert_eq!(pictures.route(), "/library/Pictures");
        assert_eq!(*pictures.subfolders(), 1);
        assert_eq!(*pictures.assets(), 3);
        assert!(pictures.kinds().contains(AssetKinds::IMAGE));
        assert!(pictures.kinds().contains(AssetKinds::DOCUMENT));
        assert!(!pictures.kinds().contains(AssetKinds::AUDIO));

        let music = &listing.entries()[0];
        assert_eq!(*music.assets(), 1);
        assert_eq!(*music.kinds(), AssetKinds::AUDIO);
        assert!(music.cover().is_none());
    }

    #[test]
    fn cover_is_first_image_by_name() {
        let tmp = fixture_tree();
        let listing = scan_listing(tmp.path(), route::ROOT).unwrap();
        let pictures = &listing.entries()[1];
        let cover = pictures.cover().as_ref().unwrap();
        assert_eq!(cover.file_name().unwrap(), "a.jpg");
    }

    #[test]
    fn dot_entries_and_files_are_not_folders() {
        let tmp = fixture_tree();
        let listing = scan_listing(tmp.path(), route::ROOT).unwrap();
        assert!(listing
            .entries()
            .iter()
            .all(|e| e.name() != ".thumbs" && e.name() != "stray.txt"));
    }

    #[test]
    fn missing_location_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let gone = tmp.path().join("nope");
        match scan_listing(&gone, route::ROOT) {
            Err(ScanError::Missing(p)) => assert_eq!(p, gone),
            other => panic!("expected Missing, got {other:?}"),
        }
    }

    #[test]
    fn file_location_is_not_a_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("plain.txt");
        touch(&file);
        assert!(matches!(
            scan_listing(&file, route::ROOT),
            Err(ScanError::NotADirectory(_))
        ));
    }
}
