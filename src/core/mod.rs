//! Core module - Application infrastructure
//!
//! Holds the pieces every other module leans on but that carry no game
//! rules of their own.
//!
//! # Contents
//!
//! - [`BoardLayoutConfig`] - Pixel geometry of the board (reference theme or JSON file)
//! - [`WindowConfig`] - Window settings derived from the layout
//! - [`CorePlugin`] - Camera and core resources for the bevy frontend
//! - [`init_tracing`] - Tracing subscriber installed by the binary
//! - [`CoreError`] - Theme and layout errors

pub mod error;
pub mod layout;
pub mod logging;
pub mod plugin;
pub mod window_config;

// Re-export commonly used items
pub use error::{CoreError, CoreResult};
pub use layout::BoardLayoutConfig;
pub use logging::init_tracing;
pub use plugin::CorePlugin;
pub use window_config::WindowConfig;
