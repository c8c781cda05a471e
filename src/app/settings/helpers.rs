// OS helpers for settings and card context menus.

use std::path::Path;
use std::process::Command;

pub fn folder_exists(path: &Path) -> bool {
    path.is_dir()
}

/// Open the platform file manager at the given folder.
pub fn reveal_in_file_manager(path: &Path) {
    #[cfg(target_os = "linux")]
    let result = Command::new("xdg-open").arg(path).spawn();
    #[cfg(target_os = "macos")]
    let result = Command::new("open").arg(path).spawn();
    #[cfg(target_os = "windows")]
    let result = Command::new("explorer").arg(path).spawn();

    if let Err(err) = result {
        log::warn!("failed to open file manager at {:?}: {}", path, err);
    }
}
