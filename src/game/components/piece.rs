//! Piece-related components
//!
//! Factions, piece types, board cells and the piece record itself. These are
//! plain data; [`crate::game::rules::BoardState`] owns every [`Piece`] and is
//! the only place that mutates one.

use std::fmt;

/// Number of files (columns) on a Xiangqi board
pub const BOARD_FILES: u8 = 9;

/// Number of ranks (rows) on a Xiangqi board
pub const BOARD_RANKS: u8 = 10;

/// One of the two sides of the game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Faction {
    #[default]
    Red,
    Black,
}

impl Faction {
    /// Both factions, in asset loading order
    pub const ALL: [Faction; 2] = [Faction::Red, Faction::Black];

    pub fn opponent(self) -> Self {
        match self {
            Faction::Red => Faction::Black,
            Faction::Black => Faction::Red,
        }
    }

    /// Lowercase name used in asset file names
    pub fn name(self) -> &'static str {
        match self {
            Faction::Red => "red",
            Faction::Black => "black",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The seven Xiangqi piece kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
    Rook,
    Knight,
    Cannon,
    Elephant,
    Mandarin,
    King,
    Pawn,
}

impl PieceType {
    /// Every piece type, in asset loading order
    pub const ALL: [PieceType; 7] = [
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Cannon,
        PieceType::Elephant,
        PieceType::Mandarin,
        PieceType::King,
        PieceType::Pawn,
    ];

    /// Lowercase name used in asset file names
    pub fn name(self) -> &'static str {
        match self {
            PieceType::Rook => "rook",
            PieceType::Knight => "knight",
            PieceType::Cannon => "cannon",
            PieceType::Elephant => "elephant",
            PieceType::Mandarin => "mandarin",
            PieceType::King => "king",
            PieceType::Pawn => "pawn",
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A board intersection, 1-indexed
///
/// `col` runs 1..=9 left to right, `row` runs 1..=10 top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    pub col: u8,
    pub row: u8,
}

impl CellCoord {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Build a cell from unvalidated values, `None` when off the board
    pub fn on_board(col: i32, row: i32) -> Option<Self> {
        let col = u8::try_from(col).ok()?;
        let row = u8::try_from(row).ok()?;
        let cell = Self::new(col, row);
        cell.is_on_board().then_some(cell)
    }

    pub fn is_on_board(self) -> bool {
        (1..=BOARD_FILES).contains(&self.col) && (1..=BOARD_RANKS).contains(&self.row)
    }

    /// Reflect the row across the river, turning a top-side cell into the
    /// matching bottom-side cell and back
    pub fn mirrored(self) -> Self {
        Self::new(self.col, BOARD_RANKS + 1 - self.row)
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Stable handle to a piece owned by the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PieceId(pub(crate) usize);

impl PieceId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single piece on the board
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub faction: Faction,
    pub piece_type: PieceType,
    pub position: CellCoord,
    pub selected: bool,
    pub alive: bool,
}

impl Piece {
    /// A fresh, unplaced piece
    ///
    /// The position is a placeholder until the board assigns a starting cell.
    pub fn new(faction: Faction, piece_type: PieceType) -> Self {
        Self {
            faction,
            piece_type,
            position: CellCoord::new(0, 0),
            selected: false,
            alive: true,
        }
    }
}
