use crate::{
    PieceCollisionError,
    core::{board::Board, piece::Piece},
};

use super::{config::GameConfig, piece_generator::PieceGenerator};

/// Board, falling piece, and score, with the movement and locking
/// primitives. [`GameSession`](super::GameSession) layers the state machine
/// and gravity clock on top.
///
/// Exactly one falling piece exists at a time; it is written into the board
/// only by [`Self::lock_and_advance`].
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    falling_piece: Piece,
    generator: PieceGenerator,
    score: usize,
    score_per_line: usize,
}

impl GameState {
    /// Creates a fresh game with an OS-seeded piece generator.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_generator(config, PieceGenerator::new())
    }

    /// Like [`Self::new`], but with an injected generator for deterministic
    /// piece sequences.
    #[must_use]
    pub fn with_generator(config: GameConfig, mut generator: PieceGenerator) -> Self {
        let board = Board::new(config.width, config.height);
        let falling_piece = Piece::spawn(generator.next_kind(), config.width);
        Self {
            board,
            falling_piece,
            generator,
            score: 0,
            score_per_line: config.score_per_line,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn falling_piece(&self) -> &Piece {
        &self.falling_piece
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Translates the falling piece by (dx, dy) if the target placement is
    /// valid; otherwise leaves the state unchanged.
    ///
    /// This is the single primitive beneath horizontal movement, the
    /// gravity step, and hard drop.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> Result<(), PieceCollisionError> {
        let candidate = self.falling_piece.translated(dx, dy);
        if !self
            .board
            .is_valid_placement(candidate.shape(), candidate.x(), candidate.y())
        {
            return Err(PieceCollisionError);
        }
        self.falling_piece = candidate;
        Ok(())
    }

    /// Rotates the falling piece 90° clockwise if the rotated shape fits at
    /// the current position; otherwise leaves the shape unchanged.
    ///
    /// The rotation is provisional: no wall kicks, no alternate offsets.
    pub fn try_rotate_cw(&mut self) -> Result<(), PieceCollisionError> {
        let rotated = self.falling_piece.shape().rotated_cw();
        if !self
            .board
            .is_valid_placement(&rotated, self.falling_piece.x(), self.falling_piece.y())
        {
            return Err(PieceCollisionError);
        }
        self.falling_piece.set_shape(rotated);
        Ok(())
    }

    /// Locks the falling piece and advances to the next one.
    ///
    /// Merges the piece into the board, clears full rows (awarding
    /// `score_per_line` per row), and spawns the next piece from the
    /// generator. Errors iff the fresh spawn placement is invalid - the
    /// board has filled up to the spawn rows - which the session treats as
    /// game over. Returns the number of lines cleared.
    pub fn lock_and_advance(&mut self) -> Result<usize, PieceCollisionError> {
        self.board.fill_piece(&self.falling_piece);
        let cleared_lines = self.board.clear_full_lines();
        self.score += self.score_per_line * cleared_lines;

        self.falling_piece = Piece::spawn(self.generator.next_kind(), self.board.width());
        if !self.board.is_valid_placement(
            self.falling_piece.shape(),
            self.falling_piece.x(),
            self.falling_piece.y(),
        ) {
            return Err(PieceCollisionError);
        }
        Ok(cleared_lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        board::Cell,
        piece::{PieceColor, PieceKind},
    };

    fn o_piece_state() -> GameState {
        GameState::with_generator(
            GameConfig::default(),
            PieceGenerator::from_sequence([PieceKind::O]),
        )
    }

    #[test]
    fn test_valid_move_commits_exact_offset() {
        let mut state = o_piece_state();
        assert_eq!((state.falling_piece().x(), state.falling_piece().y()), (4, 0));

        assert!(state.try_move(-1, 1).is_ok());
        assert_eq!((state.falling_piece().x(), state.falling_piece().y()), (3, 1));
    }

    #[test]
    fn test_rejected_move_leaves_position_unchanged() {
        let mut state = o_piece_state();
        for _ in 0..4 {
            assert!(state.try_move(-1, 0).is_ok());
        }
        assert_eq!(state.falling_piece().x(), 0);

        assert!(state.try_move(-1, 0).is_err());
        assert_eq!((state.falling_piece().x(), state.falling_piece().y()), (0, 0));
    }

    #[test]
    fn test_rotation_commits_when_valid() {
        let mut state = GameState::with_generator(
            GameConfig::default(),
            PieceGenerator::from_sequence([PieceKind::I]),
        );

        // Horizontal I becomes vertical at the spawn column.
        assert!(state.try_rotate_cw().is_ok());
        assert_eq!(state.falling_piece().shape().cols(), 1);
        assert_eq!(state.falling_piece().shape().rows(), 4);
    }

    #[test]
    fn test_rejected_rotation_leaves_shape_unchanged() {
        let mut state = GameState::with_generator(
            GameConfig::default(),
            PieceGenerator::from_sequence([PieceKind::I]),
        );

        // Horizontal I on the floor: the vertical candidate would reach
        // three rows below the floor and must be rejected.
        while state.try_move(0, 1).is_ok() {}
        assert_eq!(state.falling_piece().y(), 19);

        assert!(state.try_rotate_cw().is_err());
        assert_eq!(state.falling_piece().shape().cols(), 4);
        assert_eq!(state.falling_piece().shape().rows(), 1);
    }

    #[test]
    fn test_lock_merges_piece_and_spawns_next() {
        let mut state = o_piece_state();
        while state.try_move(0, 1).is_ok() {}
        assert_eq!(state.falling_piece().y(), 18);

        let cleared = state.lock_and_advance().expect("board far from full");
        assert_eq!(cleared, 0);
        assert_eq!(state.score(), 0);
        for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
            assert_eq!(state.board().cell(x, y), Cell::Filled(PieceColor::Yellow));
        }
        // Fresh piece back at the spawn position.
        assert_eq!((state.falling_piece().x(), state.falling_piece().y()), (4, 0));
    }

    #[test]
    fn test_lock_scores_cleared_lines() {
        let mut state = o_piece_state();
        // Fill the bottom two rows except the spawn columns 4-5.
        for y in 18..20 {
            for x in (0..10).filter(|x| !(4..=5).contains(x)) {
                state.board_mut().set_cell(x, y, Cell::Filled(PieceColor::Red));
            }
        }

        while state.try_move(0, 1).is_ok() {}
        let cleared = state.lock_and_advance().expect("spawn rows stay clear");
        assert_eq!(cleared, 2);
        assert_eq!(state.score(), 200);
        assert!(state.board().rows().flatten().all(|cell| cell.is_empty()));
    }

    #[test]
    fn test_lock_errors_when_spawn_is_blocked() {
        let mut state = o_piece_state();
        // Settle cells into the spawn footprint.
        for y in 0..2 {
            for x in 4..6 {
                state.board_mut().set_cell(x, y, Cell::Filled(PieceColor::Red));
            }
        }
        // Park the falling piece against the left wall, away from the block.
        assert!(state.try_move(-4, 0).is_ok());
        while state.try_move(0, 1).is_ok() {}

        assert!(state.lock_and_advance().is_err());
    }
}
