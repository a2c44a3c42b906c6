use serde::{Deserialize, Serialize};

use crate::Adjacency;

/// What lies under a tile, fixed when the board is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    /// Safe tile with the number of mines among its neighbors.
    Safe(u8),
    Mine,
}

impl TileKind {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn adjacent_mines(self) -> Option<u8> {
        match self {
            Self::Safe(count) => Some(count),
            Self::Mine => None,
        }
    }

    /// Safe with no adjacent mines, revealing it spreads to its neighbors.
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Safe(0))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    kind: TileKind,
    neighbors: Adjacency,
    exposed: bool,
    flagged: bool,
}

impl Tile {
    pub(crate) fn new(kind: TileKind, neighbors: Adjacency) -> Self {
        Self {
            kind,
            neighbors,
            exposed: false,
            flagged: false,
        }
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    pub fn neighbors(&self) -> &[crate::TileIndex] {
        &self.neighbors
    }

    pub fn is_exposed(&self) -> bool {
        self.exposed
    }

    pub fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// Hidden and unflagged, the only state a reveal acts on.
    pub fn is_untouched(&self) -> bool {
        !self.exposed && !self.flagged
    }

    pub(crate) fn expose(&mut self) {
        self.exposed = true;
        self.flagged = false;
    }

    /// Flips the flag on a hidden tile, returns whether anything changed.
    pub(crate) fn toggle_flag(&mut self) -> bool {
        if self.exposed {
            return false;
        }
        self.flagged = !self.flagged;
        true
    }
}
