use std::iter;

use linefall_engine::{Board, Piece};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::CellDisplay;

/// Renders the board grid with the falling piece overlaid.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    falling_piece: Option<&'a Piece>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            falling_piece: None,
            block: None,
        }
    }

    pub fn falling_piece(self, piece: &'a Piece) -> Self {
        Self {
            falling_piece: Some(piece),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn width(&self) -> u16 {
        self.board.width() as u16 * CellDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        self.board.height() as u16 * CellDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        // Overlay the falling piece on a copy; the board itself only ever
        // contains settled cells.
        let mut board = self.board.clone();
        if let Some(piece) = self.falling_piece {
            board.fill_piece(piece);
        }

        let vertical =
            Layout::vertical((0..board.height()).map(|_| Constraint::Length(CellDisplay::height())));
        let horizontal =
            Layout::horizontal((0..board.width()).map(|_| Constraint::Length(CellDisplay::width())));

        let row_rects = vertical.split(area);
        for (row_rect, row) in iter::zip(row_rects.iter(), board.rows()) {
            let cell_rects = horizontal.split(*row_rect);
            for (cell_rect, cell) in iter::zip(cell_rects.iter(), row) {
                CellDisplay::from_cell(*cell).render(*cell_rect, buf);
            }
        }
    }
}
