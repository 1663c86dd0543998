use std::time::Duration;

use linefall_engine::GameConfig;

use crate::{command::play::app::PlayApp, tui::Tui};

mod app;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Board width in cells (minimum 4)
    #[clap(long, default_value_t = 10)]
    width: usize,
    /// Board height in cells (minimum 4)
    #[clap(long, default_value_t = 20)]
    height: usize,
    /// Milliseconds between gravity steps
    #[clap(long = "fall-interval-ms", default_value_t = 500)]
    fall_interval_ms: u64,
    /// Fixed piece-generator seed for a reproducible game
    #[clap(long)]
    seed: Option<u64>,
    /// Render frame rate
    #[clap(long, default_value_t = 60.0)]
    fps: f64,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        width,
        height,
        fall_interval_ms,
        seed,
        fps,
    } = arg;

    anyhow::ensure!(
        *width >= 4 && *height >= 4,
        "board must be at least 4 cells in each dimension"
    );
    anyhow::ensure!(*fps > 0.0, "frame rate must be positive");

    let config = GameConfig {
        width: *width,
        height: *height,
        fall_interval: Duration::from_millis(*fall_interval_ms),
        ..GameConfig::default()
    };

    let mut app = PlayApp::new(config, *seed, *fps);
    Tui::new().run(&mut app)
}
