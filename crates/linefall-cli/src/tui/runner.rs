use std::time::{Duration, Instant};

use crossterm::event;

use crate::tui::App;

/// TUI application runner.
///
/// Owns the terminal and the frame loop. Every iteration follows the same
/// order: elapsed time is applied first, then all pending input events are
/// drained and dispatched in arrival order, then one frame is drawn
/// reflecting the state after both. The loop then sleeps until the next
/// frame deadline, waking early when input arrives.
#[derive(Debug)]
pub struct Tui {
    frame_interval: Duration,
}

impl Default for Tui {
    fn default() -> Self {
        Self::new()
    }
}

impl Tui {
    const DEFAULT_FRAME_RATE: f64 = 60.0;

    /// Creates a runner with the default frame rate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame_interval: Duration::from_secs_f64(1.0 / Self::DEFAULT_FRAME_RATE),
        }
    }

    /// Sets the frame rate (Hz, frames per second).
    pub fn set_frame_rate(&mut self, rate: f64) {
        self.frame_interval = Duration::from_secs_f64(1.0 / rate);
    }

    /// Runs the application until [`App::should_exit`] returns true.
    ///
    /// The terminal is restored on return, including on error, by
    /// `ratatui::run`'s guard.
    pub fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            let mut last_update = Instant::now();
            while !app.should_exit() {
                let frame_started = Instant::now();
                app.update(frame_started.duration_since(last_update));
                last_update = frame_started;

                while event::poll(Duration::ZERO)? {
                    app.handle_event(event::read()?);
                }

                terminal.draw(|frame| app.draw(frame))?;

                let deadline = frame_started + self.frame_interval;
                let timeout = deadline.saturating_duration_since(Instant::now());
                if !timeout.is_zero() {
                    // Sleep until the frame deadline; input wakes the loop early.
                    _ = event::poll(timeout)?;
                }
            }
            Ok(())
        })
    }
}
