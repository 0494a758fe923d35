//! Asset management module
//!
//! Handles loading and tracking of every image the board needs:
//! - Board and background images
//! - One image per (faction, piece type)
//! - Selection highlights and the move-hint dot
//!
//! # Loading Model
//!
//! [`AssetStore::load`] fans out one fetch-and-decode future per asset and
//! waits until every one of them has resolved. Each fetch is bounded by
//! [`LoadOptions::per_asset_timeout`], so an unreachable file ends the batch
//! with [`AssetError::LoadFailed`] naming that file instead of stalling
//! startup forever. A batch either loads completely or adds nothing.
//!
//! After loading, lookups through [`AssetStore::get`] are synchronous.

pub mod error;
pub mod source;
pub mod textures;

pub use error::{AssetError, AssetResult, LoadFailure};
pub use source::{AssetSource, FsAssetSource, MemoryAssetSource};
pub use textures::{Texture, TextureCatalog, TextureKey};

use futures::stream::{FuturesUnordered, StreamExt};
use image::RgbaImage;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// Default time a single asset may take before the batch fails
pub const DEFAULT_ASSET_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared handle to a decoded RGBA image
///
/// Cloning is cheap; all clones point at the same pixels.
#[derive(Clone)]
pub struct ImageHandle(Arc<RgbaImage>);

impl ImageHandle {
    /// Decode PNG, JPEG or any other format the `image` crate recognises
    pub fn decode(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let image = image::load_from_memory(bytes)?;
        Ok(Self(Arc::new(image.to_rgba8())))
    }

    pub fn from_rgba(image: RgbaImage) -> Self {
        Self(Arc::new(image))
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.0
    }
}

impl PartialEq for ImageHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ImageHandle {}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageHandle({}x{})", self.width(), self.height())
    }
}

/// Tuning for [`AssetStore::load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub per_asset_timeout: Duration,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            per_asset_timeout: DEFAULT_ASSET_TIMEOUT,
        }
    }
}

/// Asset loading progress (0.0 to 1.0)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadingProgress {
    /// Current loading progress (0.0 = none, 1.0 = complete)
    pub progress: f32,

    /// Total number of assets to load
    pub total_assets: usize,

    /// Number of assets loaded so far
    pub loaded_assets: usize,

    /// Number of assets that failed
    pub failed_assets: usize,

    /// Whether every asset loaded
    pub complete: bool,

    /// Whether any asset failed
    pub failed: bool,
}

impl LoadingProgress {
    pub fn new(total_assets: usize) -> Self {
        Self {
            total_assets,
            complete: total_assets == 0,
            progress: if total_assets == 0 { 1.0 } else { 0.0 },
            ..Self::default()
        }
    }

    pub fn increment(&mut self) {
        self.loaded_assets += 1;
        self.update_progress();
    }

    pub fn record_failure(&mut self) {
        self.failed_assets += 1;
        self.failed = true;
    }

    fn update_progress(&mut self) {
        if self.total_assets > 0 {
            self.progress = self.loaded_assets as f32 / self.total_assets as f32;
            self.complete = self.loaded_assets >= self.total_assets;
        }
    }

    pub fn percentage(&self) -> u32 {
        (self.progress * 100.0) as u32
    }
}

/// Name-keyed image cache filled by asynchronous batch loads
///
/// Entries are never evicted; the store lives as long as the session.
#[derive(Debug)]
pub struct AssetStore<K> {
    images: HashMap<K, ImageHandle>,
    options: LoadOptions,
    progress: LoadingProgress,
}

impl<K> Default for AssetStore<K> {
    fn default() -> Self {
        Self::new(LoadOptions::default())
    }
}

impl<K> AssetStore<K> {
    pub fn new(options: LoadOptions) -> Self {
        Self {
            images: HashMap::new(),
            options,
            progress: LoadingProgress::default(),
        }
    }

    /// Progress of the most recent batch
    pub fn progress(&self) -> &LoadingProgress {
        &self.progress
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl<K> AssetStore<K>
where
    K: Eq + Hash + Clone + fmt::Display,
{
    /// Fetch and decode every `(key, path)` pair concurrently
    ///
    /// Resolves once all fetches have finished. If any failed, nothing from
    /// this batch is stored and the first failure in request order is
    /// returned; every failure is logged.
    pub async fn load<S, I>(&mut self, source: &S, requests: I) -> AssetResult<()>
    where
        S: AssetSource + ?Sized,
        I: IntoIterator<Item = (K, String)>,
    {
        let requests: Vec<(K, String)> = requests.into_iter().collect();
        let timeout = self.options.per_asset_timeout;
        self.progress = LoadingProgress::new(requests.len());
        info!("[ASSETS] Loading {} assets", requests.len());

        let mut results = Vec::with_capacity(requests.len());
        {
            let mut pending: FuturesUnordered<_> = requests
                .iter()
                .enumerate()
                .map(|(index, (_, path))| async move {
                    (index, fetch_image(source, path, timeout).await)
                })
                .collect();

            while let Some((index, result)) = pending.next().await {
                let (key, path) = &requests[index];
                match &result {
                    Ok(image) => {
                        self.progress.increment();
                        debug!(
                            "[ASSETS] Loaded {} from {} ({}x{}), {}%",
                            key,
                            path,
                            image.width(),
                            image.height(),
                            self.progress.percentage()
                        );
                    }
                    Err(reason) => {
                        self.progress.record_failure();
                        error!("[ASSETS] Failed to load {} from {}: {}", key, path, reason);
                    }
                }
                results.push((index, result));
            }
        }
        results.sort_by_key(|(index, _)| *index);

        let mut loaded = Vec::with_capacity(results.len());
        for ((key, path), (_, result)) in requests.into_iter().zip(results) {
            match result {
                Ok(image) => loaded.push((key, image)),
                Err(reason) => {
                    return Err(AssetError::LoadFailed {
                        key: key.to_string(),
                        path,
                        reason,
                    });
                }
            }
        }

        self.images.extend(loaded);
        info!("[ASSETS] All {} assets loaded", self.progress.loaded_assets);
        Ok(())
    }

    /// Look up a loaded image
    pub fn get(&self, key: &K) -> AssetResult<ImageHandle> {
        self.images
            .get(key)
            .cloned()
            .ok_or_else(|| AssetError::NotLoaded {
                key: key.to_string(),
            })
    }

    pub fn contains(&self, key: &K) -> bool {
        self.images.contains_key(key)
    }
}

/// Fetch one asset within the timeout and decode it
async fn fetch_image<S>(
    source: &S,
    path: &str,
    timeout: Duration,
) -> Result<ImageHandle, LoadFailure>
where
    S: AssetSource + ?Sized,
{
    let bytes = tokio::time::timeout(timeout, source.fetch(path))
        .await
        .map_err(|_| LoadFailure::TimedOut(timeout))??;
    Ok(ImageHandle::decode(&bytes)?)
}
