//! Move directions and their canonical orientation.
//!
//! Every direction is reduced to "collapse each row toward index 0".
//! `canonicalize` rotates the board into that orientation and `restore`
//! undoes it:
//!
//! | Direction | canonicalize             | restore                  |
//! |-----------|--------------------------|--------------------------|
//! | Left      | identity                 | identity                 |
//! | Right     | reverse rows             | reverse rows             |
//! | Up        | transpose                | transpose                |
//! | Down      | transpose, reverse rows  | reverse rows, transpose  |

use serde::{Deserialize, Serialize};

use super::grid::Board;
use super::tile::Position;

/// A direction to slide and merge tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// True for directions that collapse along columns.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// True for directions that collapse toward the higher index.
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    /// Reorient `board` so this direction becomes "collapse left".
    #[must_use]
    pub fn canonicalize(self, board: &Board) -> Board {
        let board = if self.is_vertical() { board.transposed() } else { board.clone() };
        if self.is_reversed() {
            board.reversed_rows()
        } else {
            board
        }
    }

    /// Inverse of [`canonicalize`](Self::canonicalize).
    #[must_use]
    pub fn restore(self, board: &Board) -> Board {
        let board = if self.is_reversed() { board.reversed_rows() } else { board.clone() };
        if self.is_vertical() {
            board.transposed()
        } else {
            board
        }
    }

    /// Map a cell of the canonical grid back to the real board.
    #[must_use]
    pub fn to_board_position(self, canonical: Position, size: usize) -> Position {
        let col = if self.is_reversed() { size - 1 - canonical.col } else { canonical.col };
        if self.is_vertical() {
            Position::new(col, canonical.row)
        } else {
            Position::new(canonical.row, col)
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}
