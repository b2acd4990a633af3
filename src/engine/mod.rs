//! Engine facade consumed by the input and render layers.
//!
//! - `Engine::initialize` / `reset`: fresh board with starting tiles
//! - `Engine::apply_move`: slide, merge, spawn, classify
//! - `Engine::current_state`: read-only snapshot
//!
//! All coupling is one-directional: callers read the returned
//! `MoveOutcome` and `EngineState`; the engine never calls back.

mod game;
mod state;

pub use game::Engine;
pub use state::{EngineState, MoveOutcome};
