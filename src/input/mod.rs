//! Input handling module
//!
//! Polls the mouse and keyboard each frame and forwards board clicks and the
//! new-game key to the [`crate::game::GameSession`].
//!
//! # Architecture
//!
//! - `pointer` - Cursor tracking, click routing and keyboard shortcuts

pub mod pointer;

pub use pointer::*;
