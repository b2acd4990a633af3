//! Game rules: sliding, merging, spawning and win/loss detection.
//!
//! - `collapse`: one row toward index 0, the only sliding algorithm
//! - `resolver`: a whole board in any direction, as a pure function
//! - `spawner`: weighted random tile placement
//! - `terminal`: win and loss classification
//!
//! The engine facade calls into these in that order on every move; none of
//! them hold state between calls.

pub mod collapse;
pub mod resolver;
pub mod spawner;
pub mod terminal;

pub use collapse::{collapse_line, CollapsedLine, LineMerge};
pub use resolver::{resolve, Resolution};
pub use spawner::TileSpawner;
pub use terminal::{is_stuck, TerminalState, TerminalStateTracker};
