//! Error types for asset loading and lookup

use std::time::Duration;
use thiserror::Error;

/// Why a single asset could not be loaded
#[derive(Error, Debug)]
pub enum LoadFailure {
    /// The source could not deliver the bytes
    #[error("fetch failed: {0}")]
    Fetch(#[from] std::io::Error),

    /// The source did not answer within the per-asset timeout
    #[error("timed out after {0:?}")]
    TimedOut(Duration),

    /// The bytes are not a decodable image
    #[error("decode failed: {0}")]
    Decode(#[from] image::ImageError),
}

/// Errors that can occur while loading or looking up assets
#[derive(Error, Debug)]
pub enum AssetError {
    /// Lookup before the asset's batch finished loading, or for an unknown key
    #[error("Asset not loaded: {key}")]
    NotLoaded { key: String },

    /// At least one asset of a batch failed; names the first in request order
    #[error("Failed to load asset {key} from {path}: {reason}")]
    LoadFailed {
        key: String,
        path: String,
        #[source]
        reason: LoadFailure,
    },
}

/// Result type alias for asset operations
pub type AssetResult<T> = Result<T, AssetError>;
