// App state split into focused structs to keep app.rs readable.

use eframe::egui;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::mpsc;
use std::time::Instant;

use super::scan::{ScanMsg, ThumbMsg};
use crate::library::{route, FolderListing};
use crate::types::Sorting;

/// Current location plus the back-navigation history.
pub struct RouterState {
    current: String,
    history: Vec<String>,
}

impl Default for RouterState {
    fn default() -> Self {
        Self {
            current: route::ROOT.to_string(),
            history: Vec::new(),
        }
    }
}

impl RouterState {
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn push(&mut self, to: String) {
        if to != self.current {
            self.history.push(std::mem::replace(&mut self.current, to));
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(prev) => {
                self.current = prev;
                true
            }
            None => false,
        }
    }
}

pub struct UiState {
    pub query: String,
    /// Query actually applied to the listing; follows `query` after the
    /// debounce interval.
    pub applied_query: String,
    pub search_due_at: Option<Instant>,
    pub sort: Sorting,
    pub move_dialog_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            query: String::new(),
            applied_query: String::new(),
            search_due_at: None,
            sort: super::settings::with_settings(|st| st.startup_sort),
            move_dialog_open: false,
        }
    }
}

pub struct ScanState {
    pub counter: u64,
    pub loading: bool,
    pub tx: mpsc::Sender<ScanMsg>,
    pub rx: mpsc::Receiver<ScanMsg>,
    pub listing: Option<FolderListing>,
    pub last_error: Option<String>,
}

impl ScanState {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            counter: 0,
            loading: false,
            tx,
            rx,
            listing: None,
            last_error: None,
        }
    }
}

pub struct ImagesState {
    pub covers: HashMap<String, egui::TextureHandle>,
    pub covers_loading: HashSet<String>,
    pub thumb_tx: mpsc::Sender<ThumbMsg>,
    pub thumb_rx: mpsc::Receiver<ThumbMsg>,
}

impl ImagesState {
    pub fn new() -> Self {
        let (thumb_tx, thumb_rx) = mpsc::channel();
        Self {
            covers: HashMap::new(),
            covers_loading: HashSet::new(),
            thumb_tx,
            thumb_rx,
        }
    }
}

/// Multi-select over folder routes, driven by the card checkboxes.
#[derive(Default)]
pub struct SelectionState {
    pub active: bool,
    pub selected: BTreeSet<String>,
}

impl SelectionState {
    pub fn toggle(&mut self, folder_route: &str) {
        if !self.selected.remove(folder_route) {
            self.selected.insert(folder_route.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
