//! The engine facade.
//!
//! `Engine` owns the board, score, terminal state and the spawn RNG. It is
//! the only thing that mutates them: a move is resolved as a pure function,
//! and the result is applied here only if the board actually changed.

use log::{debug, trace};

use crate::board::{Board, Direction, Tile};
use crate::core::{EngineConfig, EngineError, EngineResult, GameRng, GameRngState};
use crate::events::{Event, EventQueue};
use crate::rules::{resolve, TerminalState, TerminalStateTracker, TileSpawner};

use super::state::{EngineState, MoveOutcome};

/// A single 2048 session.
///
/// ## Example
///
/// ```
/// use twenty48_engine::board::Direction;
/// use twenty48_engine::core::EngineConfig;
/// use twenty48_engine::engine::Engine;
///
/// let mut engine = Engine::with_seed(EngineConfig::default().with_seed(7));
/// assert_eq!(engine.initial_events().len(), 2);
///
/// let before = engine.score();
/// let outcome = engine.apply_move(Direction::Left);
/// assert_eq!(engine.score(), before + outcome.score_delta);
/// ```
#[derive(Clone, Debug)]
pub struct Engine {
    config: EngineConfig,
    board: Board,
    score: u64,
    best_score: u64,
    move_count: u32,
    terminal: TerminalState,
    rng: GameRng,
    spawner: TileSpawner,
    tracker: TerminalStateTracker,
    queue: EventQueue,
    initial_events: Vec<Event>,
}

impl Engine {
    /// Create an engine with an injected RNG and start the first game.
    ///
    /// Panics if `config` fails validation.
    #[must_use]
    pub fn new(config: EngineConfig, rng: GameRng) -> Self {
        if let Err(err) = config.validate() {
            panic!("{err}");
        }
        let target = match Tile::from_value(config.target) {
            Ok(tile) => tile,
            Err(err) => panic!("{err}"),
        };

        let mut engine = Self {
            board: Board::new(config.size),
            score: 0,
            best_score: 0,
            move_count: 0,
            terminal: TerminalState::InProgress,
            rng,
            spawner: TileSpawner::new(config.four_probability),
            tracker: TerminalStateTracker::new(target),
            queue: EventQueue::new(),
            initial_events: Vec::new(),
            config,
        };
        engine.initialize();
        engine
    }

    /// Create an engine whose RNG is seeded from `config.seed`.
    #[must_use]
    pub fn with_seed(config: EngineConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self::new(config, rng)
    }

    /// Start a fresh game: empty board, starting tiles, zero score.
    ///
    /// The RNG is not reseeded, so consecutive games differ.
    pub fn initialize(&mut self) -> EngineState {
        self.board = Board::new(self.config.size);
        self.score = 0;
        self.move_count = 0;
        self.terminal = TerminalState::InProgress;
        self.queue.clear();

        for _ in 0..self.config.initial_tiles {
            let event = self.spawner.spawn(&mut self.board, &mut self.rng);
            self.queue.push(event);
        }
        self.initial_events = self.queue.drain();

        debug!(
            "initialized {}x{} board with {} tiles",
            self.config.size,
            self.config.size,
            self.initial_events.len()
        );
        self.current_state()
    }

    /// Same as [`initialize`](Self::initialize).
    pub fn reset(&mut self) {
        self.initialize();
    }

    /// Slide the board in `direction`.
    ///
    /// A move that is refused (the game is over) or shifts nothing leaves
    /// every piece of state untouched and returns an unchanged outcome. A
    /// changed move adds its merge score, spawns one tile and re-evaluates
    /// the terminal state.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.terminal.is_terminal() {
            trace!("ignoring {} move: game is {:?}", direction, self.terminal);
            return MoveOutcome::unchanged(self.terminal);
        }

        let resolution = resolve(&self.board, direction);
        if !resolution.changed {
            trace!("{} move shifts nothing", direction);
            return MoveOutcome::unchanged(self.terminal);
        }

        self.board = resolution.board;
        self.score += resolution.score_gained;
        self.best_score = self.best_score.max(self.score);
        self.move_count += 1;
        self.initial_events.clear();

        self.queue.extend(resolution.merges);
        let spawn = self.spawner.spawn(&mut self.board, &mut self.rng);
        self.queue.push(spawn);

        let previous = self.terminal;
        self.terminal = self
            .tracker
            .check(&self.board, previous == TerminalState::Won);
        if self.terminal != previous {
            debug!(
                "game {:?} after {} moves with score {}",
                self.terminal, self.move_count, self.score
            );
        }

        trace!(
            "{} move #{}: +{} points, {} events",
            direction,
            self.move_count,
            resolution.score_gained,
            self.queue.len()
        );

        MoveOutcome {
            changed: true,
            score_delta: resolution.score_gained,
            events: self.queue.drain(),
            terminal: self.terminal,
        }
    }

    /// Read-only snapshot of the session.
    #[must_use]
    pub fn current_state(&self) -> EngineState {
        EngineState {
            board: self.board.clone(),
            score: self.score,
            best_score: self.best_score,
            move_count: self.move_count,
            terminal: self.terminal,
        }
    }

    /// Spawn events of the current game's starting tiles.
    ///
    /// Cleared once the first changed move is applied.
    #[must_use]
    pub fn initial_events(&self) -> &[Event] {
        &self.initial_events
    }

    /// True if `apply_move(direction)` would change the board.
    #[must_use]
    pub fn can_move(&self, direction: Direction) -> bool {
        !self.terminal.is_terminal() && resolve(&self.board, direction).changed
    }

    /// Directions that would change the board, in `Direction::ALL` order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.can_move(dir))
            .collect()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn terminal_state(&self) -> TerminalState {
        self.terminal
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Position of the spawn RNG, for replays.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Replace the board, as when loading a saved game.
    ///
    /// Score and move count are kept; the terminal state is recomputed.
    /// A board whose size differs from the configured size is rejected with
    /// `InvalidBoard` and the session is left untouched.
    pub fn load_board(&mut self, board: Board) -> EngineResult<()> {
        if board.size() != self.config.size {
            return Err(EngineError::InvalidBoard(format!(
                "{}x{} board does not fit a {}x{} engine",
                board.size(),
                board.size(),
                self.config.size,
                self.config.size
            )));
        }
        self.board = board;
        self.initial_events.clear();
        self.terminal = self
            .tracker
            .check(&self.board, self.terminal == TerminalState::Won);
        debug!("loaded board, game is {:?}", self.terminal);
        Ok(())
    }
}
