//! Error types for game module
//!
//! Provides custom error types for board setup and game initialization.

use crate::assets::AssetError;

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Side name other than "top" or "bottom"
    #[error("Invalid side: {0}")]
    InvalidSide(String),

    /// Starting coordinates and starting pieces disagree in length
    #[error("Placement length mismatch: {coordinates} coordinates for {pieces} pieces")]
    PlacementLengthMismatch { coordinates: usize, pieces: usize },

    /// A piece was placed onto a cell that already holds one
    #[error("Cell ({col}, {row}) is already occupied")]
    CellOccupied { col: u8, row: u8 },

    /// Texture loading or lookup failed
    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
