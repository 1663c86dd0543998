//! Game orchestration on top of the core data structures.
//!
//! - [`GameConfig`] - Startup constants (board size, fall interval, scoring)
//! - [`PieceGenerator`] - Injectable source of spawned piece kinds
//! - [`GameState`] - Board, falling piece, and score with the movement,
//!   rotation, and locking primitives
//! - [`GameSession`] - The playing/over state machine, gravity clock, and
//!   [`Command`] dispatch
//!
//! # Game Flow
//!
//! 1. Build a [`GameSession`] from a [`GameConfig`]
//! 2. Each frame, feed it the elapsed time and the frame's commands via
//!    [`GameSession::tick`] (or [`GameSession::advance`] plus
//!    [`GameSession::apply`])
//! 3. Gravity moves the piece down one row per fall interval; a failed
//!    descent locks the piece, clears full rows for score, and spawns the
//!    next piece
//! 4. The session ends when a fresh spawn collides with settled cells

pub use self::{config::*, game_state::*, piece_generator::*, session::*};

mod config;
mod game_state;
mod piece_generator;
mod session;
