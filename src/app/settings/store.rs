// Settings store: data types, global state, and load/save.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::RwLock;

use crate::localization::SupportedLang;
use crate::types::Sorting;

const SETTINGS_FILE: &str = "settings.json";

fn default_cache_dir() -> PathBuf {
    PathBuf::from("cache")
}

fn default_thumbnails() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub library_root: PathBuf,
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,
    #[serde(default = "default_thumbnails")]
    pub thumbnails: bool,
    // Folder routes the user hid from the grid
    #[serde(default)]
    pub hidden_routes: Vec<String>,
    // Sort order applied at startup
    #[serde(default)]
    pub startup_sort: Sorting,
    // UI language (None = system locale)
    #[serde(default)]
    pub language: Option<SupportedLang>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            library_root: PathBuf::from("library"),
            cache_dir: default_cache_dir(),
            thumbnails: true,
            hidden_routes: Vec::new(),
            startup_sort: Sorting::default(),
            language: None,
        }
    }
}

lazy_static! {
    pub static ref APP_SETTINGS: RwLock<AppSettings> = RwLock::new(AppSettings::default());
}

pub fn load_settings_from_disk() {
    let Ok(text) = std::fs::read_to_string(SETTINGS_FILE) else {
        // First run keeps the defaults.
        return;
    };
    match serde_json::from_str::<AppSettings>(&text) {
        Ok(parsed) => {
            *APP_SETTINGS.write().unwrap() = parsed;
        }
        Err(err) => log::warn!("settings parse failed, using defaults: {}", err),
    }
}

pub fn save_settings_to_disk() {
    let json = {
        let st = APP_SETTINGS.read().unwrap();
        serde_json::to_string_pretty(&*st)
    };
    match json {
        Ok(text) => {
            if let Err(err) = std::fs::write(SETTINGS_FILE, text) {
                log::warn!("failed to write {}: {}", SETTINGS_FILE, err);
            }
        }
        Err(err) => log::warn!("failed to serialize settings: {}", err),
    }
}

pub fn hide_folder(folder_route: &str) {
    {
        let mut st = APP_SETTINGS.write().unwrap();
        if !st.hidden_routes.iter().any(|r| r == folder_route) {
            st.hidden_routes.push(folder_route.to_string());
        }
    }
    save_settings_to_disk();
}

pub fn is_folder_hidden(folder_route: &str) -> bool {
    let st = APP_SETTINGS.read().unwrap();
    st.hidden_routes.iter().any(|r| r == folder_route)
}

pub fn clear_hidden() {
    {
        let mut st = APP_SETTINGS.write().unwrap();
        st.hidden_routes.clear();
    }
    save_settings_to_disk();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn older_settings_json_rounds_out_with_defaults() {
        let parsed: AppSettings = serde_json::from_str(r#"{"library_root":"media"}"#).unwrap();
        assert_eq!(parsed.library_root, PathBuf::from("media"));
        assert_eq!(parsed.cache_dir, PathBuf::from("cache"));
        assert!(parsed.thumbnails);
        assert!(parsed.hidden_routes.is_empty());
        assert_eq!(parsed.startup_sort, Sorting::Name);
        assert!(parsed.language.is_none());
    }

    #[test]
    fn language_codes_serialize_compactly() {
        let mut settings = AppSettings::default();
        settings.language = Some(SupportedLang::Fr);
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains(r#""language":"fr""#), "got: {json}");
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.language, Some(SupportedLang::Fr));
    }
}
