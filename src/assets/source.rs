//! Where asset bytes come from
//!
//! [`AssetStore`](super::AssetStore) only knows how to ask an [`AssetSource`]
//! for the bytes at a relative path. The game reads from disk through
//! [`FsAssetSource`]; [`MemoryAssetSource`] serves embedded or generated
//! images and can simulate an asset that never arrives.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::PathBuf;

/// Asynchronous byte fetcher for asset paths
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Fetch the raw bytes stored at `path`, relative to the source root
    async fn fetch(&self, path: &str) -> io::Result<Vec<u8>>;
}

/// Reads assets from a directory on disk
#[derive(Debug, Clone)]
pub struct FsAssetSource {
    root: PathBuf,
}

impl FsAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl AssetSource for FsAssetSource {
    async fn fetch(&self, path: &str) -> io::Result<Vec<u8>> {
        tokio::fs::read(self.root.join(path)).await
    }
}

/// Serves assets from memory
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetSource {
    files: HashMap<String, Vec<u8>>,
    stalled: HashSet<String>,
}

impl MemoryAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, bytes: Vec<u8>) {
        self.files.insert(path.into(), bytes);
    }

    /// Make fetches of `path` hang forever
    pub fn stall(&mut self, path: impl Into<String>) {
        self.stalled.insert(path.into());
    }

    pub fn remove(&mut self, path: &str) -> Option<Vec<u8>> {
        self.files.remove(path)
    }
}

#[async_trait]
impl AssetSource for MemoryAssetSource {
    async fn fetch(&self, path: &str) -> io::Result<Vec<u8>> {
        if self.stalled.contains(path) {
            futures::future::pending::<()>().await;
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.to_string()))
    }
}
