//! Xiangqi game logic module
//!
//! Pure game state lives here, apart from the bevy frontend:
//!
//! - `components` - Factions, piece types, cells and the piece record
//! - `resources` - Selection state, click outcomes and the active faction
//! - `rules` - Starting placement, board state and the selection state machine
//! - `controller` - Loads textures, places pieces and routes pointer events
//! - `session` - Bevy resource pairing the controller with its frame
//! - `error` - Game error type

pub mod components;
pub mod controller;
pub mod error;
pub mod resources;
pub mod rules;
pub mod session;

pub use controller::GameController;
pub use error::{GameError, GameResult};
pub use session::GameSession;
