use linefall_engine::{GameSession, SessionState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Text},
    widgets::{Block as BlockWidget, BlockExt as _, Paragraph, Widget},
};

use crate::ui::widgets::style;

/// Side panel showing the score and the session state.
#[derive(Debug)]
pub struct ScoreDisplay<'a> {
    session: &'a GameSession,
    block: Option<BlockWidget<'a>>,
}

impl<'a> ScoreDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        12 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        3 + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for ScoreDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &ScoreDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let state_line = match self.session.session_state() {
            SessionState::Playing => Line::from("PLAYING"),
            SessionState::GameOver => Line::from("GAME OVER").style(style::GAME_OVER_TEXT),
        };
        let text = Text::from(vec![
            Line::from(self.session.score().to_string()),
            Line::default(),
            state_line,
        ]);
        Paragraph::new(text).style(style::DEFAULT).render(area, buf);
    }
}
