//! Whole-board move resolution.
//!
//! `resolve` is a pure function of `(Board, Direction)`: the caller's board is
//! never touched, and the facade decides whether to apply the result.

use crate::board::{Board, Direction, Position};
use crate::events::Event;

use super::collapse::collapse_line;

/// Outcome of sliding a whole board in one direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Board after sliding and merging, before any spawn.
    pub board: Board,
    /// Sum of the merged tile values.
    pub score_gained: u64,
    /// Merge events in row-major order of their destination cell.
    pub merges: Vec<Event>,
    /// False when the direction had no legal shift.
    pub changed: bool,
}

/// Slide `board` in `direction`.
///
/// Rows of the canonical grid never interact, so each one is collapsed on
/// its own and the grid is then rotated back.
#[must_use]
pub fn resolve(board: &Board, direction: Direction) -> Resolution {
    let size = board.size();
    let canonical = direction.canonicalize(board);
    let mut collapsed = Board::new(size);
    let mut score_gained = 0;
    let mut merges = Vec::new();

    for (r, line) in canonical.rows().enumerate() {
        let out = collapse_line(line);
        collapsed.set_row(r, &out.cells);
        score_gained += out.score;

        let to_board = |col| direction.to_board_position(Position::new(r, col), size);
        merges.extend(
            out.merges
                .iter()
                .map(|m| Event::merge(to_board(m.from_a), to_board(m.from_b), to_board(m.into), m.tile)),
        );
    }

    let board_after = direction.restore(&collapsed);
    merges.sort_by_key(Event::cell);
    let changed = !board.equals(&board_after);

    Resolution {
        board: board_after,
        score_gained,
        merges,
        changed,
    }
}
