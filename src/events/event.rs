//! Visual events emitted by a move.
//!
//! Events describe what changed, in board coordinates, so an external
//! renderer can animate it. The engine never consumes them itself.

use serde::{Deserialize, Serialize};

use crate::board::{Position, Tile};

/// Something the renderer should animate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// A new tile appeared in an empty cell.
    Spawn { cell: Position, tile: Tile },

    /// Two equal tiles combined.
    ///
    /// `from_a` is the tile nearer the collapse edge; `into` is where the
    /// merged tile ends up after sliding.
    Merge {
        from_a: Position,
        from_b: Position,
        into: Position,
        tile: Tile,
    },
}

impl Event {
    /// Create a spawn event.
    pub fn spawn(cell: Position, tile: Tile) -> Self {
        Event::Spawn { cell, tile }
    }

    /// Create a merge event.
    pub fn merge(from_a: Position, from_b: Position, into: Position, tile: Tile) -> Self {
        Event::Merge { from_a, from_b, into, tile }
    }

    /// Cell the event lands on.
    #[must_use]
    pub fn cell(&self) -> Position {
        match self {
            Event::Spawn { cell, .. } => *cell,
            Event::Merge { into, .. } => *into,
        }
    }

    /// Tile shown at [`cell`](Self::cell) once the event completes.
    #[must_use]
    pub fn tile(&self) -> Tile {
        match self {
            Event::Spawn { tile, .. } | Event::Merge { tile, .. } => *tile,
        }
    }

    #[must_use]
    pub fn is_spawn(&self) -> bool {
        matches!(self, Event::Spawn { .. })
    }

    #[must_use]
    pub fn is_merge(&self) -> bool {
        matches!(self, Event::Merge { .. })
    }
}
