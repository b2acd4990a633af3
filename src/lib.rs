//! # twenty48-engine
//!
//! A deterministic sliding-merge grid engine for 2048-style puzzles.
//!
//! ## Design Principles
//!
//! 1. **One Algorithm**: Every direction is reduced to "collapse each row
//!    toward index 0" by a transpose/reverse transform and its inverse.
//!
//! 2. **Pure Moves**: Resolving a move is a function of `(Board, Direction)`.
//!    The facade applies the result only if the board changed.
//!
//! 3. **Injected Randomness**: The spawn RNG is seeded and owned by the
//!    engine, so a seed plus a move list replays a game exactly.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `board`: Tiles, positions, the grid and move directions
//! - `rules`: Line collapse, move resolution, spawning, win/loss
//! - `events`: Visual events and the queue that collects them
//! - `engine`: The facade consumed by input and render layers

pub mod core;
pub mod board;
pub mod rules;
pub mod events;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{EngineConfig, EngineError, EngineResult, GameRng, GameRngState};

pub use crate::board::{Board, Cell, Direction, Position, Tile};

pub use crate::rules::{
    collapse_line, resolve, CollapsedLine, LineMerge, Resolution,
    TerminalState, TerminalStateTracker, TileSpawner,
};

pub use crate::events::{Event, EventQueue};

pub use crate::engine::{Engine, EngineState, MoveOutcome};
