use std::time::Duration;

use crate::{
    PieceCollisionError,
    core::{board::Board, piece::Piece},
};

use super::{config::GameConfig, game_state::GameState, piece_generator::PieceGenerator};

/// Discrete player commands, dispatched one engine call per command in
/// arrival order. Quitting is an input-boundary concern and never reaches
/// the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateClockwise,
    HardDrop,
}

/// Session lifecycle. `Playing` is initial; the transition to `GameOver`
/// happens only when a freshly spawned piece collides, and is terminal.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    GameOver,
}

/// A running game: [`GameState`] plus the playing/over state machine and
/// the gravity clock.
///
/// The session is display-free. A driver feeds it elapsed wall-clock time
/// and the frame's commands via [`Self::tick`]; a renderer reads the board,
/// falling piece, score, and session state through `&self` accessors. After
/// game over every mutating operation is a no-op.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    session_state: SessionState,
    fall_interval: Duration,
    fall_timer: Duration,
}

impl GameSession {
    /// Creates a session with an OS-seeded piece generator.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_generator(config, PieceGenerator::new())
    }

    /// Like [`Self::new`], but with a fixed generator seed; the same seed
    /// replays the same piece sequence.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_generator(config, PieceGenerator::with_seed(seed))
    }

    /// Like [`Self::new`], but with an injected piece generator.
    #[must_use]
    pub fn with_generator(config: GameConfig, generator: PieceGenerator) -> Self {
        Self {
            state: GameState::with_generator(config, generator),
            session_state: SessionState::Playing,
            fall_interval: config.fall_interval,
            fall_timer: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[must_use]
    pub fn falling_piece(&self) -> &Piece {
        self.state.falling_piece()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.state.score()
    }

    #[must_use]
    pub fn session_state(&self) -> &SessionState {
        &self.session_state
    }

    /// Advances the gravity clock by `elapsed` wall-clock time.
    ///
    /// Once the accumulated time reaches the fall interval, performs one
    /// gravity [`Self::step`] and resets the accumulator to zero. At most
    /// one step fires per call; drivers poll faster than the interval.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.session_state.is_game_over() {
            return;
        }
        self.fall_timer += elapsed;
        if self.fall_timer >= self.fall_interval {
            self.fall_timer = Duration::ZERO;
            self.step();
        }
    }

    /// One frame of the scheduling contract: gravity first, then the
    /// frame's commands in arrival order.
    ///
    /// Deterministic given the generator: tests replay whole games through
    /// this entry point without a display or a real clock.
    pub fn tick(&mut self, elapsed: Duration, commands: impl IntoIterator<Item = Command>) {
        self.advance(elapsed);
        for command in commands {
            self.apply(command);
        }
    }

    /// Dispatches one command to the matching operation. Rejected moves and
    /// rotations are silent no-ops.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveLeft => _ = self.try_move_left(),
            Command::MoveRight => _ = self.try_move_right(),
            Command::SoftDrop => self.soft_drop(),
            Command::RotateClockwise => _ = self.try_rotate_cw(),
            Command::HardDrop => self.hard_drop(),
        }
    }

    pub fn try_move_left(&mut self) -> Result<(), PieceCollisionError> {
        if self.session_state.is_game_over() {
            return Err(PieceCollisionError);
        }
        self.state.try_move(-1, 0)
    }

    pub fn try_move_right(&mut self) -> Result<(), PieceCollisionError> {
        if self.session_state.is_game_over() {
            return Err(PieceCollisionError);
        }
        self.state.try_move(1, 0)
    }

    pub fn try_rotate_cw(&mut self) -> Result<(), PieceCollisionError> {
        if self.session_state.is_game_over() {
            return Err(PieceCollisionError);
        }
        self.state.try_rotate_cw()
    }

    /// One gravity step: the piece descends one row, or locks when it
    /// cannot.
    pub fn step(&mut self) {
        if self.session_state.is_game_over() {
            return;
        }
        if self.state.try_move(0, 1).is_ok() {
            return;
        }
        self.lock_falling_piece();
    }

    /// Player-initiated descent by one row; locks at the bottom exactly
    /// like a gravity step.
    pub fn soft_drop(&mut self) {
        self.step();
    }

    /// Descends until the piece cannot move down, then locks. The repeated
    /// moves run synchronously within this call.
    pub fn hard_drop(&mut self) {
        if self.session_state.is_game_over() {
            return;
        }
        while self.state.try_move(0, 1).is_ok() {}
        self.lock_falling_piece();
    }

    fn lock_falling_piece(&mut self) {
        if self.state.lock_and_advance().is_err() {
            self.session_state = SessionState::GameOver;
        }
    }
}
