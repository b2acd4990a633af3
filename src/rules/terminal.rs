//! Win and loss classification.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Tile};

/// Where the session stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl TerminalState {
    /// True for `Won` and `Lost`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != TerminalState::InProgress
    }
}

/// Classifies a board after a changed move.
///
/// `Won` is sticky: once reported it is reported again on every check until
/// the facade resets. `Lost` is recomputed each time and never overrides
/// `Won`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerminalStateTracker {
    target: Tile,
}

impl Default for TerminalStateTracker {
    fn default() -> Self {
        Self {
            target: Tile::TWENTY_FORTY_EIGHT,
        }
    }
}

impl TerminalStateTracker {
    /// Create a tracker that declares a win at `target`.
    #[must_use]
    pub fn new(target: Tile) -> Self {
        Self { target }
    }

    #[must_use]
    pub fn target(&self) -> Tile {
        self.target
    }

    /// Classify `board`.
    #[must_use]
    pub fn check(&self, board: &Board, already_won: bool) -> TerminalState {
        if already_won || self.has_won(board) {
            TerminalState::Won
        } else if is_stuck(board) {
            TerminalState::Lost
        } else {
            TerminalState::InProgress
        }
    }

    /// True if any cell has reached the target.
    #[must_use]
    pub fn has_won(&self, board: &Board) -> bool {
        board.max_tile().is_some_and(|tile| tile >= self.target)
    }
}

/// True when the board is full and no two orthogonal neighbours can merge.
#[must_use]
pub fn is_stuck(board: &Board) -> bool {
    if !board.is_full() {
        return false;
    }
    let mergeable = |a: Cell, b: Cell| a == b && a.and_then(Tile::doubled).is_some();
    let size = board.size();
    for row in 0..size {
        for col in 0..size {
            let cell = board.get(row, col);
            if col + 1 < size && mergeable(cell, board.get(row, col + 1)) {
                return false;
            }
            if row + 1 < size && mergeable(cell, board.get(row + 1, col)) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard() -> Board {
        Board::from_array([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap()
    }

    #[test]
    fn test_checkerboard_is_lost() {
        let tracker = TerminalStateTracker::default();
        assert_eq!(tracker.check(&checkerboard(), false), TerminalState::Lost);
    }

    #[test]
    fn test_full_board_with_merge_in_progress() {
        let tracker = TerminalStateTracker::default();
        let board = Board::from_array([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 4]]).unwrap();
        assert_eq!(tracker.check(&board, false), TerminalState::InProgress);

        let vertical = Board::from_array([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [2, 2, 4, 2]]).unwrap();
        assert!(!is_stuck(&vertical));
    }

    #[test]
    fn test_board_with_gap_not_lost() {
        let board = Board::from_array([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 0]]).unwrap();
        assert_eq!(TerminalStateTracker::default().check(&board, false), TerminalState::InProgress);
    }

    #[test]
    fn test_target_reached_is_won() {
        let tracker = TerminalStateTracker::default();
        let mut board = Board::new(4);
        board.set(1, 1, Some(Tile::TWENTY_FORTY_EIGHT));
        assert_eq!(tracker.check(&board, false), TerminalState::Won);
    }

    #[test]
    fn test_won_beats_lost() {
        let tracker = TerminalStateTracker::default();
        let board = Board::from_array([[2048, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();
        assert!(is_stuck(&board));
        assert_eq!(tracker.check(&board, false), TerminalState::Won);
        assert_eq!(tracker.check(&checkerboard(), true), TerminalState::Won);
    }

    #[test]
    fn test_custom_target() {
        let tracker = TerminalStateTracker::new(Tile::from_value(16).unwrap());
        let board = Board::from_array([[32, 0], [0, 0]]).unwrap();
        assert_eq!(tracker.check(&board, false), TerminalState::Won);
        assert!(TerminalState::Won.is_terminal());
        assert!(!TerminalState::InProgress.is_terminal());
    }

    #[test]
    fn test_default_target_is_2048() {
        assert_eq!(TerminalStateTracker::default().target().value(), 2048);
    }

    #[test]
    fn test_adjacent_max_tiles_are_stuck() {
        let mut board = Board::new(2);
        board.set(0, 0, Some(Tile::MAX));
        board.set(0, 1, Some(Tile::MAX));
        board.set(1, 0, Some(Tile::TWO));
        board.set(1, 1, Some(Tile::FOUR));
        assert!(is_stuck(&board));
    }
}
