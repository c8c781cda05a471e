// Settings module split: store (data & persistence), helpers (OS utils),
// ui (egui viewport). This file aggregates submodules and the lock helpers.

mod helpers;
mod store;
mod ui;

pub use helpers::{folder_exists, reveal_in_file_manager};
pub use store::{
    clear_hidden, hide_folder, is_folder_hidden, load_settings_from_disk, save_settings_to_disk,
    AppSettings, APP_SETTINGS,
};
pub use ui::{draw_settings_viewport, open_settings};

/// Read settings with a closure, hiding the `.read().unwrap()` boilerplate.
pub fn with_settings<F, R>(f: F) -> R
where
    F: FnOnce(&AppSettings) -> R,
{
    let st = APP_SETTINGS.read().unwrap();
    f(&st)
}

/// Modify settings with a closure; the caller decides when to persist.
pub fn with_settings_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppSettings) -> R,
{
    let mut st = APP_SETTINGS.write().unwrap();
    f(&mut st)
}
