//! Selection state for click handling

use crate::game::components::{CellCoord, PieceId};

/// Currently selected piece, if any
///
/// The board keeps each piece's `selected` flag in step with this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(PieceId),
}

impl Selection {
    pub fn piece(&self) -> Option<PieceId> {
        match self {
            Selection::Unselected => None,
            Selection::Selected(id) => Some(*id),
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }
}

/// What a click on a board cell did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// An own piece became selected from nothing
    Selected(PieceId),
    /// The selected piece was clicked again and released
    Deselected(PieceId),
    /// Selection moved from one own piece to another
    Reselected { from: PieceId, to: PieceId },
    /// The rules allowed moving the selected piece to `target`;
    /// execution is left to the caller
    MoveRequested { piece: PieceId, target: CellCoord },
    /// The rules refused the move; the selection is kept
    Rejected { piece: PieceId, target: CellCoord },
    /// Nothing selected and nothing selectable under the click
    Ignored,
}

impl ClickOutcome {
    /// Whether the click changed which piece is selected
    pub fn changed_selection(&self) -> bool {
        matches!(
            self,
            ClickOutcome::Selected(_)
                | ClickOutcome::Deselected(_)
                | ClickOutcome::Reselected { .. }
        )
    }
}
