//! Error types for core module
//!
//! Provides custom error types for core functionality including theme loading
//! and layout validation.

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Theme file I/O error
    #[error("Theme I/O error: {0}")]
    ThemeIo(#[from] std::io::Error),

    /// Theme deserialization error
    #[error("Theme serialization error: {0}")]
    ThemeSerialization(#[from] serde_json::Error),

    /// Layout values that cannot describe a board
    #[error("Invalid board layout: {message}")]
    InvalidLayout { message: String },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
