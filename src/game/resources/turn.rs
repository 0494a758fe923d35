//! Turn tracking resource
//!
//! Holds the faction whose pieces may be selected. Turn alternation is not
//! implemented yet, so the active faction stays on Red for the session.

use crate::game::components::Faction;

/// Tracks whose turn it currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentTurn {
    pub faction: Faction,
}

impl Default for CurrentTurn {
    fn default() -> Self {
        Self {
            faction: Faction::Red,
        }
    }
}
