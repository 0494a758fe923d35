//! Xiangqi game resources - Session-wide game state
//!
//! - [`Selection`] - Currently selected piece
//! - [`ClickOutcome`] - Result of routing one click through the board
//! - [`CurrentTurn`] - Faction allowed to select pieces

pub mod selection;
pub mod turn;

// Re-export all resources for convenience
pub use selection::*;
pub use turn::*;
