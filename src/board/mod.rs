//! Grid state: tiles, positions, the board and move directions.
//!
//! The board only knows how to store and reorient cells. Sliding, merging,
//! spawning and win/loss rules live in `rules`.

mod tile;
mod grid;
mod direction;

pub use tile::{cell_value, Cell, Position, Tile};
pub use grid::Board;
pub use direction::Direction;
