//! Game-state engine for linefall, a terminal falling-block puzzle game.
//!
//! The engine is display-free: it owns the board, the falling piece, the
//! score, and the playing/over state machine, and exposes read accessors a
//! renderer consumes once per frame. Time reaches it only as [`Duration`]
//! values and player input only as [`Command`] values, so whole games can be
//! replayed deterministically in tests via [`GameSession::tick`].
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use linefall_engine::{Command, GameConfig, GameSession};
//!
//! let mut session = GameSession::new(GameConfig::default());
//!
//! // One frame: 500 ms of gravity, then the frame's input.
//! session.tick(Duration::from_millis(500), [Command::MoveLeft]);
//!
//! assert!(session.session_state().is_playing());
//! ```
//!
//! [`Duration`]: std::time::Duration

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Error returned when a piece cannot occupy the requested cells.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("piece colliding with the board bounds or settled cells")]
pub struct PieceCollisionError;
