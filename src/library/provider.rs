// Provider traits for the background pipelines. The app talks to these
// instead of the filesystem directly so tests can substitute fixtures and
// the cover path can be wrapped with a cache decorator.

use async_trait::async_trait;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use super::error::ScanError;
use super::image_data::ImageData;
use super::route;
use super::scan::scan_listing;
use super::types::{FolderEntry, FolderListing};

#[async_trait]
pub trait FolderProvider: Send + Sync {
    async fn list(&self, at_route: &str) -> Result<FolderListing, ScanError>;
}

/// Lists folders straight from the library root on disk.
pub struct FsProvider {
    root: PathBuf,
}

impl FsProvider {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn resolve(&self, at_route: &str) -> PathBuf {
        self.root.join(route::rel_path(at_route))
    }
}

#[async_trait]
impl FolderProvider for FsProvider {
    async fn list(&self, at_route: &str) -> Result<FolderListing, ScanError> {
        let location = self.resolve(at_route);
        let at_route = at_route.to_string();
        tokio::task::spawn_blocking(move || scan_listing(&location, &at_route))
            .await
            .map_err(|e| ScanError::Task(e.to_string()))?
    }
}

#[async_trait]
pub trait CoverProvider: Send + Sync {
    async fn load_cover(&self, entry: &FolderEntry) -> Result<ImageData, ScanError>;
}

/// Decodes the folder's cover candidate from disk.
pub struct FileCover;

impl FileCover {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CoverProvider for FileCover {
    async fn load_cover(&self, entry: &FolderEntry) -> Result<ImageData, ScanError> {
        let path = entry
            .cover()
            .clone()
            .ok_or_else(|| ScanError::NoCover(entry.path().clone()))?;

        let bytes = tokio::fs::read(&path).await.map_err(|source| ScanError::Io {
            path: path.clone(),
            source,
        })?;

        tokio::task::spawn_blocking(move || {
            ImageData::decode_thumbnail(&bytes).map_err(|reason| ScanError::Decode {
                path: path.clone(),
                reason,
            })
        })
        .await
        .map_err(|e| ScanError::Task(e.to_string()))?
    }
}

/// Wraps another cover provider with an on-disk PNG cache keyed by route.
pub struct CachingCover<P: CoverProvider> {
    inner: P,
    cache_dir: PathBuf,
}

impl<P: CoverProvider> CachingCover<P> {
    pub fn new(inner: P, cache_dir: PathBuf) -> Self {
        Self { inner, cache_dir }
    }

    fn cover_path(&self, entry: &FolderEntry) -> PathBuf {
        let mut hasher = DefaultHasher::new();
        entry.route().hash(&mut hasher);
        self.cache_dir
            .join(format!("{:016x}", hasher.finish()))
            .join("cover.png")
    }

    async fn load_from_cache(&self, path: &Path) -> Option<ImageData> {
        if tokio::fs::metadata(path).await.is_err() {
            return None;
        }
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || {
            let bytes = std::fs::read(&path).ok()?;
            ImageData::decode_thumbnail(&bytes).ok()
        })
        .await
        .ok()
        .flatten()
    }

    async fn save_to_cache(&self, path: &Path, data: &ImageData) {
        if let Some(parent) = path.parent() {
            let _ = tokio::fs::create_dir_all(parent).await;
        }
        let path = path.to_path_buf();
        let (width, height, rgba) = (data.width, data.height, data.rgba.clone());
        let _ = tokio::task::spawn_blocking(move || {
            image::save_buffer(&path, &rgba, width, height, image::ColorType::Rgba8)
        })
        .await;
    }
}

#[async_trait]
impl<P: CoverProvider> CoverProvider for CachingCover<P> {
    async fn load_cover(&self, entry: &FolderEntry) -> Result<ImageData, ScanError> {
        let path = self.cover_path(entry);

        if let Some(cached) = self.load_from_cache(&path).await {
            return Ok(cached);
        }

        let data = self.inner.load_cover(entry).await?;
        self.save_to_cache(&path, &data).await;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn rt() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    #[test]
    fn fs_provider_resolves_routes_under_root() {
        let provider = FsProvider::new(PathBuf::from("/data/media"));
        assert_eq!(provider.resolve(route::ROOT), PathBuf::from("/data/media"));
        assert_eq!(
            provider.resolve("/library/Pictures/Cats"),
            PathBuf::from("/data/media").join("Pictures").join("Cats")
        );
    }

    #[test]
    fn fs_provider_lists_children() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("Docs")).unwrap();
        let provider = FsProvider::new(tmp.path().to_path_buf());

        let listing = rt().block_on(provider.list(route::ROOT)).unwrap();
        assert_eq!(listing.entries().len(), 1);
        assert_eq!(listing.entries()[0].name(), "Docs");
    }

    #[test]
    fn caching_cover_reuses_the_cached_file() {
        struct CountingCover(std::sync::atomic::AtomicUsize);

        #[async_trait]
        impl CoverProvider for CountingCover {
            async fn load_cover(&self, _entry: &FolderEntry) -> Result<ImageData, ScanError> {
                self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                // 2x1 opaque pixels
                Ok(ImageData::new(2, 1, vec![255u8; 8]))
            }
        }

        let tmp = tempfile::tempdir().unwrap();
        let entry = FolderEntry {
            name: "Pictures".into(),
            path: tmp.path().join("Pictures"),
            route: "/library/Pictures".into(),
            subfolders: 0,
            assets: 0,
            kinds: Default::default(),
            modified: None,
            cover: None,
        };

        let counting = CountingCover(std::sync::atomic::AtomicUsize::new(0));
        let caching = CachingCover::new(counting, tmp.path().join("cache"));

        let rt = rt();
        let first = rt.block_on(caching.load_cover(&entry)).unwrap();
        assert_eq!((first.width, first.height), (2, 1));
        let second = rt.block_on(caching.load_cover(&entry)).unwrap();
        assert_eq!((second.width, second.height), (2, 1));
        assert_eq!(
            caching.inner.0.load(std::sync::atomic::Ordering::SeqCst),
            1,
            "second load must come from the cache"
        );
    }
}
