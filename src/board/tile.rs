//! Tiles, cells and board positions.
//!
//! A `Tile` stores its exponent rather than its face value, so every tile
//! that can exist is a power of two >= 2 by construction. Serialized tiles
//! are face values and go back through [`Tile::from_value`] on the way in.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult};

/// A numbered tile. Internally the base-2 exponent: `Tile(1)` is a 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Tile(u8);

impl Tile {
    /// The common spawn tile.
    pub const TWO: Tile = Tile(1);
    /// The rare spawn tile.
    pub const FOUR: Tile = Tile(2);
    /// The classic winning tile.
    pub const TWENTY_FORTY_EIGHT: Tile = Tile(11);
    /// Largest tile whose face value fits in a `u32`.
    pub const MAX: Tile = Tile(31);

    /// Build a tile from its face value.
    ///
    /// ```
    /// use twenty48_engine::board::Tile;
    ///
    /// assert_eq!(Tile::from_value(64).unwrap().value(), 64);
    /// assert!(Tile::from_value(6).is_err());
    /// assert!(Tile::from_value(1).is_err());
    /// ```
    pub fn from_value(value: u32) -> EngineResult<Self> {
        if value < 2 || !value.is_power_of_two() {
            return Err(EngineError::InvalidTileValue(value));
        }
        Ok(Self(value.trailing_zeros() as u8))
    }

    /// Face value of the tile (2, 4, 8, ...).
    #[must_use]
    pub const fn value(self) -> u32 {
        1u32 << self.0
    }

    /// Base-2 exponent of the face value.
    #[must_use]
    pub const fn exponent(self) -> u8 {
        self.0
    }

    /// The tile produced by merging two copies of this one, or `None` for
    /// [`Tile::MAX`], which cannot merge.
    #[must_use]
    pub const fn doubled(self) -> Option<Self> {
        if self.0 >= Self::MAX.0 {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }
}

impl TryFrom<u32> for Tile {
    type Error = EngineError;

    fn try_from(value: u32) -> EngineResult<Self> {
        Self::from_value(value)
    }
}

impl From<Tile> for u32 {
    fn from(tile: Tile) -> Self {
        tile.value()
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Contents of one grid cell. `None` is an empty cell.
pub type Cell = Option<Tile>;

/// Face value of a cell, with 0 for empty.
#[must_use]
pub fn cell_value(cell: Cell) -> u32 {
    cell.map_or(0, Tile::value)
}

/// A cell coordinate on the board, 0-based from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
