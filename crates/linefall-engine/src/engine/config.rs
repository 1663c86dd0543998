use std::time::Duration;

/// Startup constants for one game instance.
///
/// Fixed at construction and never reconfigured at runtime. The defaults
/// are a 10×20 board, one gravity step per 500 ms, and 100 points per
/// cleared line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board width in cells. Must be at least 4 so every catalog shape can
    /// spawn within the side walls.
    pub width: usize,
    /// Board height in cells. Must be at least 4.
    pub height: usize,
    /// Wall-clock time between gravity steps.
    pub fall_interval: Duration,
    /// Score awarded per cleared line; a lock clearing `n` lines awards
    /// `n * score_per_line`.
    pub score_per_line: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 20,
            fall_interval: Duration::from_millis(500),
            score_per_line: 100,
        }
    }
}
