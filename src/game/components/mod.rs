//! Xiangqi game components module
//!
//! Components are pure data structures with no logic beyond small helpers.

pub mod piece;


// Re-export all components for convenience
pub use piece::*;
