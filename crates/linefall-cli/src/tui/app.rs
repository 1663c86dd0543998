use std::time::Duration;

use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Tui;

/// Trait for TUI applications driven by [`Tui::run`].
pub trait App {
    /// Initializes the application.
    ///
    /// Called at the start of [`Tui::run`]. Use this to configure the frame
    /// rate.
    fn init(&mut self, tui: &mut Tui);

    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Advances time-driven state by the wall-clock time elapsed since the
    /// previous frame. Called first in every frame.
    fn update(&mut self, elapsed: Duration);

    /// Handles one terminal event (key input, resize, ...). Called after
    /// `update`, once per pending event, in arrival order.
    fn handle_event(&mut self, event: Event);

    /// Draws the frame, reflecting the state after `update` and this
    /// frame's events.
    fn draw(&self, frame: &mut Frame);
}
