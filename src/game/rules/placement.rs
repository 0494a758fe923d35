//! Starting position of a Xiangqi game
//!
//! Data-driven placement: one table lists every starting piece together with
//! its cell, written for the top side. The bottom side is the same table
//! with rows mirrored across the river. Both [`coordinate_placement`] and
//! [`piece_placement`] read this table, so the i-th coordinate always belongs
//! to the i-th piece.

use crate::game::components::PieceType::*;
use crate::game::components::{CellCoord, Faction, Piece, PieceType};
use crate::game::error::GameError;
use std::fmt;
use std::str::FromStr;

/// Which edge of the board a faction starts on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Back rank on row 1
    Top,
    /// Back rank on row 10
    Bottom,
}

impl FromStr for Side {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Side::Top),
            "bottom" => Ok(Side::Bottom),
            other => Err(GameError::InvalidSide(other.to_string())),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Top => f.write_str("top"),
            Side::Bottom => f.write_str("bottom"),
        }
    }
}

/// Starting pieces for the top side, in placement order
///
/// Back rank left to right, then the two cannons, then the five pawns on the
/// odd files. The cannons sit on row 3 columns 2 and 8, which are fixed
/// points rather than anything derived from the piece type.
const STARTING_POSITION: [(PieceType, CellCoord); 16] = [
    (Rook, CellCoord::new(1, 1)),
    (Knight, CellCoord::new(2, 1)),
    (Elephant, CellCoord::new(3, 1)),
    (Mandarin, CellCoord::new(4, 1)),
    (King, CellCoord::new(5, 1)),
    (Mandarin, CellCoord::new(6, 1)),
    (Elephant, CellCoord::new(7, 1)),
    (Knight, CellCoord::new(8, 1)),
    (Rook, CellCoord::new(9, 1)),
    (Cannon, CellCoord::new(2, 3)),
    (Cannon, CellCoord::new(8, 3)),
    (Pawn, CellCoord::new(1, 4)),
    (Pawn, CellCoord::new(3, 4)),
    (Pawn, CellCoord::new(5, 4)),
    (Pawn, CellCoord::new(7, 4)),
    (Pawn, CellCoord::new(9, 4)),
];

/// The (type, cell) pairs one faction starts with
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartingPosition {
    pub side: Side,
    entries: Vec<(PieceType, CellCoord)>,
}

impl StartingPosition {
    pub fn for_side(side: Side) -> Self {
        let entries = STARTING_POSITION
            .iter()
            .map(|&(piece_type, cell)| match side {
                Side::Top => (piece_type, cell),
                Side::Bottom => (piece_type, cell.mirrored()),
            })
            .collect();
        Self { side, entries }
    }

    pub fn entries(&self) -> &[(PieceType, CellCoord)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Starting cells for one side, in placement order
pub fn coordinate_placement(side: Side) -> Vec<CellCoord> {
    StartingPosition::for_side(side)
        .entries()
        .iter()
        .map(|&(_, cell)| cell)
        .collect()
}

/// Unplaced starting pieces for one faction, in placement order
pub fn piece_placement(faction: Faction) -> Vec<Piece> {
    STARTING_POSITION
        .iter()
        .map(|&(piece_type, _)| Piece::new(faction, piece_type))
        .collect()
}
