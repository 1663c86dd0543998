use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyModifiers};
use linefall_engine::{Command, GameConfig, GameSession, PieceGenerator, SessionState};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};

use crate::{
    tui::{App, Tui},
    ui::widgets::GameDisplay,
};

#[derive(Debug)]
pub struct PlayApp {
    session: GameSession,
    frame_rate: f64,
    is_exiting: bool,
}

impl PlayApp {
    pub fn new(config: GameConfig, seed: Option<u64>, frame_rate: f64) -> Self {
        let generator = match seed {
            Some(seed) => PieceGenerator::with_seed(seed),
            None => PieceGenerator::new(),
        };
        Self {
            session: GameSession::with_generator(config, generator),
            frame_rate,
            is_exiting: false,
        }
    }
}

/// Maps a key to its engine command; unrecognized keys map to nothing and
/// never reach the session.
fn key_command(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Down => Some(Command::SoftDrop),
        KeyCode::Up => Some(Command::RotateClockwise),
        KeyCode::Char(' ') => Some(Command::HardDrop),
        _ => None,
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_frame_rate(self.frame_rate);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn update(&mut self, elapsed: Duration) {
        self.session.advance(elapsed);
    }

    fn handle_event(&mut self, event: Event) {
        let Some(key) = event.as_key_event() else {
            return;
        };
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.is_exiting = true;
            }
            code => {
                if let Some(command) = key_command(code) {
                    self.session.apply(command);
                }
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let game_display = GameDisplay::new(&self.session);
        let help_text = match self.session.session_state() {
            SessionState::Playing => {
                "Controls: ← → (Move) | ↓ (Soft Drop) | ↑ (Rotate) | Space (Hard Drop) | Q (Quit)"
            }
            SessionState::GameOver => "GAME OVER | Q (Quit)",
        };
        let help_text = Text::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
        frame.render_widget(&game_display, main_area);
        frame.render_widget(help_text, help_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_command_mapping() {
        assert_eq!(key_command(KeyCode::Left), Some(Command::MoveLeft));
        assert_eq!(key_command(KeyCode::Right), Some(Command::MoveRight));
        assert_eq!(key_command(KeyCode::Down), Some(Command::SoftDrop));
        assert_eq!(key_command(KeyCode::Up), Some(Command::RotateClockwise));
        assert_eq!(key_command(KeyCode::Char(' ')), Some(Command::HardDrop));
    }

    #[test]
    fn test_unrecognized_keys_map_to_nothing() {
        assert_eq!(key_command(KeyCode::Char('x')), None);
        assert_eq!(key_command(KeyCode::Enter), None);
        assert_eq!(key_command(KeyCode::Tab), None);
    }
}
