//! Xiangqi rules module
//!
//! Pure game logic with no rendering or input concerns:
//!
//! - [`placement`] - Starting position table and faction placement order
//! - [`board_state`] - Piece ownership, cell index and the selection state machine
//! - [`MoveRules`] - Legality check consulted when a selected piece is sent somewhere
//!
//! Move legality is not implemented; [`NoMoveRules`] rejects every move so a
//! click on a target cell leaves the board and selection untouched.

pub mod board_state;
pub mod placement;


pub use board_state::BoardState;
pub use placement::{coordinate_placement, piece_placement, Side, StartingPosition};

use crate::game::components::{CellCoord, PieceId};

/// Decides whether the selected piece may go to a target cell
///
/// A target is either an empty cell or one holding an opposing piece.
pub trait MoveRules: Send + Sync {
    fn is_legal(&self, board: &BoardState, piece: PieceId, target: CellCoord) -> bool;
}

/// Rules that allow nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMoveRules;

impl MoveRules for NoMoveRules {
    fn is_legal(&self, _board: &BoardState, _piece: PieceId, _target: CellCoord) -> bool {
        false
    }
}
