//! Board geometry
//!
//! - `coordinates` - Pixel <-> cell conversion for the active layout

pub mod coordinates;

pub use coordinates::BoardCoordinateSystem;
