//! Core engine types: RNG, configuration, errors.
//!
//! These are shared by the board, the rules and the facade and carry no
//! game logic of their own.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::{GameRng, GameRngState};
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
