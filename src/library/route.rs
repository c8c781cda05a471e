// Route strings identify library locations the way the rest of the app links
// to them: "/library" is the root, "/library/Pictures/Cats" a nested folder.

use std::path::PathBuf;

pub const ROOT: &str = "/library";

/// Route of a child folder inside `parent`.
pub fn child(parent: &str, name: &str) -> String {
    format!("{}/{}", parent.trim_end_matches('/'), name)
}

/// Folder name segments below the root, in order.
pub fn segments(route: &str) -> Vec<&str> {
    route
        .strip_prefix(ROOT)
        .unwrap_or("")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect()
}

/// Parent route, or None at the root.
pub fn parent(route: &str) -> Option<String> {
    let segs = segments(route);
    match segs.len() {
        0 => None,
        1 => Some(ROOT.to_string()),
        n => Some(format!("{}/{}", ROOT, segs[..n - 1].join("/"))),
    }
}

/// Relative filesystem path below the library root.
pub fn rel_path(route: &str) -> PathBuf {
    segments(route).iter().collect()
}

/// Display name of the location (root uses the localized app title instead).
pub fn leaf_name(route: &str) -> Option<&str> {
    segments(route).last().copied()
}
