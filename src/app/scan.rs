// Background listing and thumbnail pipelines. Results cross back to the UI
// thread over mpsc channels polled at the start of every frame; responses for
// superseded requests are dropped by id.

use eframe::egui;

use crate::library::{
    CachingCover, CoverProvider, FileCover, FolderEntry, FolderListing, FolderProvider, FsProvider,
};

pub enum ScanMsg {
    Ok { req: u64, listing: FolderListing },
    Err { req: u64, error: String },
}

pub enum ThumbMsg {
    Ok {
        folder_route: String,
        width: u32,
        height: u32,
        rgba: Vec<u8>,
    },
    Err {
        folder_route: String,
        error: String,
    },
}

impl super::MediaDeskApp {
    pub(super) fn start_scan(&mut self, ctx: &egui::Context) {
        self.scan.counter += 1;
        let req = self.scan.counter;
        self.scan.loading = true;

        let tx = self.scan.tx.clone();
        let at_route = self.router.current().to_string();
        let root = super::settings::with_settings(|st| st.library_root.clone());
        let ctx2 = ctx.clone();

        super::rt().spawn(async move {
            let provider = FsProvider::new(root);
            let msg = match provider.list(&at_route).await {
                Ok(listing) => ScanMsg::Ok { req, listing },
                Err(err) => {
                    log::warn!("scan of {} failed: {}", at_route, err);
                    ScanMsg::Err {
                        req,
                        error: err.to_string(),
                    }
                }
            };
            let _ = tx.send(msg);
            ctx2.request_repaint();
        });
    }

    pub(super) fn poll_incoming(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.scan.rx.try_recv() {
            match msg {
                ScanMsg::Ok { req, listing } if req == self.scan.counter => {
                    self.scan.loading = false;
                    self.scan.last_error = None;
                    self.scan.listing = Some(listing);
                }
                ScanMsg::Err { req, error } if req == self.scan.counter => {
                    self.scan.loading = false;
                    self.scan.last_error = Some(error.clone());
                    super::errors_ui::append_error(error);
                }
                // Stale response from a superseded request.
                _ => {}
            }
        }

        while let Ok(msg) = self.images.thumb_rx.try_recv() {
            match msg {
                ThumbMsg::Ok {
                    folder_route,
                    width,
                    height,
                    rgba,
                } => {
                    self.images.covers_loading.remove(&folder_route);
                    let img = egui::ColorImage::from_rgba_unmultiplied(
                        [width as usize, height as usize],
                        &rgba,
                    );
                    let tex = ctx.load_texture(
                        format!("cover:{folder_route}"),
                        img,
                        egui::TextureOptions::LINEAR,
                    );
                    self.images.covers.insert(folder_route, tex);
                }
                ThumbMsg::Err {
                    folder_route,
                    error,
                } => {
                    self.images.covers_loading.remove(&folder_route);
                    log::debug!("cover for {} unavailable: {}", folder_route, error);
                }
            }
        }
    }

    /// Queue cover loads for listed folders that don't have a texture yet.
    /// Idempotent per frame thanks to the loading set.
    pub(super) fn schedule_cover_loads(&mut self, ctx: &egui::Context) {
        if !super::settings::with_settings(|st| st.thumbnails) {
            return;
        }
        let Some(listing) = &self.scan.listing else {
            return;
        };

        let to_load: Vec<FolderEntry> = listing
            .entries()
            .iter()
            .filter(|e| e.cover().is_some())
            .filter(|e| {
                !self.images.covers.contains_key(e.route())
                    && !self.images.covers_loading.contains(e.route())
            })
            .cloned()
            .collect();

        for entry in to_load {
            self.images.covers_loading.insert(entry.route().clone());
            self.spawn_cover_load(ctx, entry);
        }
    }

    fn spawn_cover_load(&self, ctx: &egui::Context, entry: FolderEntry) {
        let tx = self.images.thumb_tx.clone();
        let cache_dir = super::settings::with_settings(|st| st.cache_dir.clone());
        let ctx2 = ctx.clone();

        super::rt().spawn(async move {
            let provider = CachingCover::new(FileCover::new(), cache_dir);
            let folder_route = entry.route().clone();
            let msg = match provider.load_cover(&entry).await {
                Ok(data) => ThumbMsg::Ok {
                    folder_route,
                    width: data.width,
                    height: data.height,
                    rgba: data.rgba,
                },
                Err(err) => ThumbMsg::Err {
                    folder_route,
                    error: err.to_string(),
                },
            };
            let _ = tx.send(msg);
            ctx2.request_repaint();
        });
    }
}
