use linefall_engine::{GameSession, SessionState};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, Padding, Widget},
};

use crate::ui::widgets::{BoardDisplay, ScoreDisplay, style};

/// Full game view: bordered board with the falling piece, score panel to
/// the side, centered in the available area. The border turns red once the
/// session is over.
#[derive(Debug)]
pub struct GameDisplay<'a> {
    session: &'a GameSession,
}

impl<'a> GameDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self { session }
    }
}

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = match self.session.session_state() {
            SessionState::Playing => style::PLAYING_BORDER,
            SessionState::GameOver => style::GAME_OVER_BORDER,
        };

        let board = BoardDisplay::new(self.session.board())
            .falling_piece(self.session.falling_piece())
            .block(
                BlockWidget::bordered()
                    .border_style(border_style)
                    .style(style::DEFAULT),
            );
        let score_panel = ScoreDisplay::new(self.session).block(
            BlockWidget::bordered()
                .title(Line::from("SCORE").centered())
                .padding(Padding::symmetric(1, 0))
                .border_style(border_style)
                .style(style::DEFAULT),
        );

        let [board_column, panel_column] = Layout::horizontal([
            Constraint::Length(board.width()),
            Constraint::Length(score_panel.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [board_area] =
            Layout::vertical([Constraint::Length(board.height())]).areas(board_column);
        let [panel_area] =
            Layout::vertical([Constraint::Length(score_panel.height())]).areas(panel_column);

        board.render(board_area, buf);
        score_panel.render(panel_area, buf);
    }
}
