//! Board state: pieces, cell index and selection
//!
//! [`BoardState`] is the single owner of every piece in a session. It keeps
//! three views of the board consistent:
//!
//! - `pieces` - every piece in placement order (also the draw order)
//! - `cells` - live pieces keyed by the cell they stand on
//! - `selection` - at most one selected piece, mirrored by its `selected` flag
//!
//! All mutation goes through `&mut self` methods here, so no other code can
//! break the index.

use super::placement::{coordinate_placement, piece_placement, Side};
use super::MoveRules;
use crate::game::components::{CellCoord, Faction, Piece, PieceId};
use crate::game::error::{GameError, GameResult};
use crate::game::resources::{ClickOutcome, Selection};
use std::collections::HashMap;
use tracing::{debug, info, trace};

/// Pieces on the board plus the current selection
#[derive(Debug, Default)]
pub struct BoardState {
    pieces: Vec<Piece>,
    cells: HashMap<CellCoord, PieceId>,
    selection: Selection,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a faction's sixteen starting pieces on one side of the board
    ///
    /// Fails without touching the board if any starting cell is taken.
    pub fn create_faction(&mut self, faction: Faction, side: Side) -> GameResult<()> {
        let coordinates = coordinate_placement(side);
        let pieces = piece_placement(faction);
        if coordinates.len() != pieces.len() {
            return Err(GameError::PlacementLengthMismatch {
                coordinates: coordinates.len(),
                pieces: pieces.len(),
            });
        }

        if let Some(taken) = coordinates.iter().find(|cell| self.cells.contains_key(cell)) {
            return Err(GameError::CellOccupied {
                col: taken.col,
                row: taken.row,
            });
        }

        for (mut piece, cell) in pieces.into_iter().zip(coordinates) {
            piece.position = cell;
            let id = PieceId(self.pieces.len());
            self.cells.insert(cell, id);
            self.pieces.push(piece);
        }

        info!(
            "[BOARD] Placed {} faction on the {} side ({} pieces total)",
            faction,
            side,
            self.pieces.len()
        );
        Ok(())
    }

    /// Remove every piece and clear the selection
    pub fn reset(&mut self) {
        self.pieces.clear();
        self.cells.clear();
        self.selection = Selection::Unselected;
        debug!("[BOARD] Board cleared");
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0)
    }

    /// Id of the live piece standing on `cell`
    pub fn piece_at(&self, cell: CellCoord) -> Option<PieceId> {
        self.cells.get(&cell).copied()
    }

    /// All pieces in placement order, including captured ones
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Live pieces with their ids, in placement order
    pub fn live_pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .filter(|(_, piece)| piece.alive)
            .map(|(index, piece)| (PieceId(index), piece))
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected(&self) -> Option<&Piece> {
        self.selection.piece().and_then(|id| self.piece(id))
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Drive the selection state machine with a click on `cell`
    ///
    /// Own pieces toggle or take over the selection. Any other cell, while a
    /// piece is selected, is a move target and is handed to `rules`; the
    /// board itself is never changed by that branch.
    pub fn handle_cell_click(
        &mut self,
        cell: CellCoord,
        active_faction: Faction,
        rules: &dyn MoveRules,
    ) -> ClickOutcome {
        let own_piece = self
            .piece_at(cell)
            .filter(|&id| self.pieces[id.0].faction == active_faction);

        let outcome = match (own_piece, self.selection) {
            (Some(clicked), Selection::Unselected) => {
                self.select(clicked);
                ClickOutcome::Selected(clicked)
            }
            (Some(clicked), Selection::Selected(current)) if clicked == current => {
                self.deselect();
                ClickOutcome::Deselected(clicked)
            }
            (Some(clicked), Selection::Selected(current)) => {
                self.deselect();
                self.select(clicked);
                ClickOutcome::Reselected {
                    from: current,
                    to: clicked,
                }
            }
            (None, Selection::Selected(current)) => {
                if rules.is_legal(self, current, cell) {
                    ClickOutcome::MoveRequested {
                        piece: current,
                        target: cell,
                    }
                } else {
                    ClickOutcome::Rejected {
                        piece: current,
                        target: cell,
                    }
                }
            }
            (None, Selection::Unselected) => ClickOutcome::Ignored,
        };

        trace!("[BOARD] Click on {} -> {:?}", cell, outcome);
        outcome
    }

    fn select(&mut self, id: PieceId) {
        self.pieces[id.0].selected = true;
        self.selection = Selection::Selected(id);
    }

    fn deselect(&mut self) {
        if let Selection::Selected(id) = self.selection {
            self.pieces[id.0].selected = false;
        }
        self.selection = Selection::Unselected;
    }
}
