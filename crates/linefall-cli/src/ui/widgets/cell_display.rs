use linefall_engine::{Cell, PieceColor};
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::ui::widgets::style;

/// Renders one board cell as a fixed-size terminal patch.
#[derive(Debug)]
pub struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    /// Terminal columns per board cell.
    pub fn width() -> u16 {
        2
    }

    /// Terminal rows per board cell.
    pub fn height() -> u16 {
        1
    }

    pub fn from_cell(cell: Cell) -> Self {
        match cell {
            Cell::Empty => Self::new(style::EMPTY_DOT, "."),
            Cell::Filled(color) => Self::new(cell_style(color), ""),
        }
    }
}

fn cell_style(color: PieceColor) -> Style {
    match color {
        PieceColor::Cyan => style::CYAN_CELL,
        PieceColor::Yellow => style::YELLOW_CELL,
        PieceColor::Magenta => style::MAGENTA_CELL,
        PieceColor::Orange => style::ORANGE_CELL,
        PieceColor::Blue => style::BLUE_CELL,
        PieceColor::Green => style::GREEN_CELL,
        PieceColor::Red => style::RED_CELL,
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // A Paragraph fills the whole patch, not just the symbol cells.
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
