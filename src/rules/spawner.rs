//! Weighted random tile placement.

use log::trace;

use crate::board::{Board, Position, Tile};
use crate::core::{EngineError, GameRng};
use crate::events::Event;

/// Places one new tile after a changed move.
///
/// The cell is chosen uniformly among the empty cells; the tile is a 4 with
/// probability `four_probability` and a 2 otherwise, drawn independently of
/// the cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileSpawner {
    four_probability: f64,
}

impl Default for TileSpawner {
    fn default() -> Self {
        Self { four_probability: 0.1 }
    }
}

impl TileSpawner {
    /// Create a spawner with a custom probability of spawning a 4.
    #[must_use]
    pub fn new(four_probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&four_probability),
            "four_probability must lie in [0, 1]"
        );
        Self { four_probability }
    }

    #[must_use]
    pub fn four_probability(&self) -> f64 {
        self.four_probability
    }

    /// Place a tile on `board` and return the matching spawn event.
    ///
    /// Panics with `NoEmptyCell` on a full board. Callers only spawn after a
    /// changed move, which always leaves a free cell.
    pub fn spawn(&self, board: &mut Board, rng: &mut GameRng) -> Event {
        let empty: Vec<Position> = board.empty_cells().collect();
        let cell = match rng.choose(&empty) {
            Some(&cell) => cell,
            None => panic!("{}", EngineError::NoEmptyCell),
        };
        let tile = if rng.gen_bool(self.four_probability) {
            Tile::FOUR
        } else {
            Tile::TWO
        };
        board.set(cell.row, cell.col, Some(tile));
        trace!("spawned {} at {}", tile, cell);
        Event::spawn(cell, tile)
    }
}
