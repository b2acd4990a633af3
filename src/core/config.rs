//! Engine configuration.
//!
//! The facade is configured once at construction. Everything that the
//! source game hardcoded (grid size, winning tile, spawn odds, number of
//! starting tiles) lives here instead.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Board edge length (default: 4).
    pub size: usize,

    /// Tile value that wins the game (default: 2048).
    /// Must be a power of two of at least 4.
    pub target: u32,

    /// Probability that a spawned tile is a 4 rather than a 2 (default: 0.1).
    pub four_probability: f64,

    /// Tiles placed by `initialize()` (default: 2).
    pub initial_tiles: usize,

    /// Seed for the spawn RNG when the engine builds its own.
    /// Same seed produces identical games for identical input.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: 4,
            target: 2048,
            four_probability: 0.1,
            initial_tiles: 2,
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Create a new config with custom board size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Create a new config with custom winning tile.
    #[must_use]
    pub fn with_target(mut self, target: u32) -> Self {
        self.target = target;
        self
    }

    /// Create a new config with custom probability of spawning a 4.
    #[must_use]
    pub fn with_four_probability(mut self, p: f64) -> Self {
        self.four_probability = p;
        self
    }

    /// Create a new config with custom number of starting tiles.
    #[must_use]
    pub fn with_initial_tiles(mut self, count: usize) -> Self {
        self.initial_tiles = count;
        self
    }

    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that this config describes a playable board.
    pub fn validate(&self) -> EngineResult<()> {
        if self.size == 0 {
            return Err(EngineError::InvalidConfig("board size must be at least 1".into()));
        }
        if self.target < 4 || !self.target.is_power_of_two() {
            return Err(EngineError::InvalidConfig(format!(
                "target {} must be a power of two >= 4",
                self.target
            )));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(EngineError::InvalidConfig(format!(
                "four_probability {} must lie in [0, 1]",
                self.four_probability
            )));
        }
        if self.initial_tiles > self.size * self.size {
            return Err(EngineError::InvalidConfig(format!(
                "{} initial tiles do not fit on a {}x{} board",
                self.initial_tiles, self.size, self.size
            )));
        }
        Ok(())
    }
}
