//! Visual events and the queue that collects them.
//!
//! Rendering is asynchronous relative to the engine: a move produces an
//! ordered list of `Event`s and returns immediately. The renderer plays
//! them back at its own pace.

mod event;
mod queue;

pub use event::Event;
pub use queue::EventQueue;
