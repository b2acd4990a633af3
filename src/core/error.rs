//! Engine error taxonomy.
//!
//! The grid is a closed, fully validated domain, so the taxonomy is narrow.
//! `OutOfBounds` and `NoEmptyCell` are programming errors: the panicking
//! accessors raise them with this message rather than continuing with a
//! corrupted board. `InvalidTileValue` and `InvalidBoard` come from the
//! fallible constructors used at the save/load boundary, `InvalidConfig`
//! from `EngineConfig::validate`.

use thiserror::Error;

/// Errors raised by board access, tile construction and configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A row or column index exceeded `size - 1`.
    #[error("cell ({row}, {col}) is out of bounds for a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    /// The spawner was asked to place a tile on a full board.
    #[error("no empty cell available to spawn a tile")]
    NoEmptyCell,

    /// A cell value that is not a power of two >= 2.
    #[error("invalid tile value {0}: tiles must be powers of two >= 2")]
    InvalidTileValue(u32),

    /// Board data that does not describe a square grid of the expected size.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// An engine configuration that cannot produce a playable board.
    #[error("invalid engine config: {0}")]
    InvalidConfig(String),
}

/// Result alias for fallible engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
