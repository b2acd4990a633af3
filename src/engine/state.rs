//! Values the facade hands back to its callers.
//!
//! ## EngineState
//!
//! Read-only snapshot for the UI and any save/load collaborator:
//! - Board, score and best score
//! - Number of changed moves since the last reset
//! - Terminal state
//!
//! ## MoveOutcome
//!
//! Result of one `apply_move` call, including the events to animate.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::events::Event;
use crate::rules::TerminalState;

/// Snapshot of the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    pub board: Board,
    pub score: u64,
    /// Highest score seen by this engine across resets.
    pub best_score: u64,
    /// Changed moves since the last reset.
    pub move_count: u32,
    pub terminal: TerminalState,
}

/// Result of one move request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// False when the move was refused or shifted nothing.
    pub changed: bool,
    /// Score gained by this move.
    pub score_delta: u64,
    /// Merge events in row-major order, then the spawn.
    pub events: Vec<Event>,
    /// Terminal state after the move.
    pub terminal: TerminalState,
}

impl MoveOutcome {
    /// Outcome of a move that did nothing.
    #[must_use]
    pub fn unchanged(terminal: TerminalState) -> Self {
        Self {
            changed: false,
            score_delta: 0,
            events: Vec::new(),
            terminal,
        }
    }

    /// Events of type `Merge`.
    pub fn merges(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|e| e.is_merge())
    }

    /// The spawn event, if the move changed the board.
    #[must_use]
    pub fn spawn(&self) -> Option<&Event> {
        self.events.iter().find(|e| e.is_spawn())
    }
}
